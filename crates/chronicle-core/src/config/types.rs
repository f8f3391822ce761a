//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults;

/// Main configuration for Chronicle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name
    pub name: Option<String>,

    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            changelog: ChangelogConfig::default(),
        }
    }
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path
    pub file: PathBuf,

    /// Notice paragraph written under the top-level heading of a new changelog
    pub notice: String,

    /// Pattern opening a collection region in a commit body.
    ///
    /// Matched case-insensitively, anchored at the start of the trimmed line.
    pub indicator: String,

    /// Ordered category table: classification is first-match-wins in
    /// declaration order
    pub categories: Vec<CategoryRule>,

    /// strftime-style format for the entry annotation timestamp
    pub date_format: String,

    /// Whether to append an author/date annotation to each entry
    pub annotate: bool,

    /// Annotation template; `{author}` and `{timestamp}` are substituted
    pub annotation: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG.md"),
            notice: defaults::DEFAULT_NOTICE.to_string(),
            indicator: defaults::DEFAULT_INDICATOR.to_string(),
            categories: defaults::default_categories(),
            date_format: defaults::DEFAULT_DATE_FORMAT.to_string(),
            annotate: true,
            annotation: defaults::DEFAULT_ANNOTATION.to_string(),
        }
    }
}

/// One category recognition rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category label, used as the section name (e.g. "Added")
    pub label: String,

    /// Recognition pattern accepting imperative and inflected verb forms
    /// (e.g. `Add(ed)?(s)?`)
    pub pattern: String,
}

impl CategoryRule {
    /// Create a new rule
    pub fn new(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_order() {
        let config = ChangelogConfig::default();
        let labels: Vec<&str> = config.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Added", "Changed", "Deprecated", "Removed", "Fixed", "Security"]
        );
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let config = Config::default();
        let rendered = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.changelog.file, config.changelog.file);
        assert_eq!(parsed.changelog.categories.len(), 6);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("[changelog]\nannotate = false\n").unwrap();
        assert!(!parsed.changelog.annotate);
        assert_eq!(parsed.changelog.date_format, "%Y-%m-%d");
        assert!(!parsed.changelog.categories.is_empty());
    }
}
