//! Default configuration values

use super::types::CategoryRule;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "chronicle.toml";

/// Alternative (hidden) configuration file name
pub const ALT_CONFIG_FILE: &str = ".chronicle.toml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![DEFAULT_CONFIG_FILE, ALT_CONFIG_FILE]
}

/// Notice paragraph placed under the top-level heading of a fresh changelog
pub const DEFAULT_NOTICE: &str = "All notable changes to this project will be documented in this file.\nThe format is based on [Keep a Changelog](https://keepachangelog.com/en/1.1.0/).";

/// Pattern that opens a collection region in a commit body.
///
/// Matched case-insensitively against the start of each trimmed body line.
pub const DEFAULT_INDICATOR: &str = "(changelog|changes?):";

/// Date format used when rendering entry annotations
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Annotation template appended to entries when `annotate` is enabled
pub const DEFAULT_ANNOTATION: &str = " ~ {author} ({timestamp})";

/// Default category table.
///
/// Declaration order is significant: classification is first-match-wins, so
/// more specific patterns must come before the ones they overlap with.
pub fn default_categories() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new("Added", "Add(ed)?(s)?"),
        CategoryRule::new("Changed", "Change(d)?(s)?"),
        CategoryRule::new("Deprecated", "Deprecate(d)?(s)?"),
        CategoryRule::new("Removed", "Remove(d)?(s)?"),
        CategoryRule::new("Fixed", "Fix(ed)?(es)?"),
        CategoryRule::new("Security", "Security"),
    ]
}
