//! Change classification
//!
//! Maps a single bullet line to a change category via an ordered pattern
//! table. The first matching rule in declaration order wins, so overlapping
//! patterns must be declared most-specific first.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use chronicle_core::config::CategoryRule;
use chronicle_core::error::ChangelogError;

/// Category assigned when no rule matches
pub const OTHER_CATEGORY: &str = "Other";

/// Strips the bullet marker and an optional bracketed tag off a line
static MESSAGE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*] +(?:\[.*\] +)?").expect("Invalid regex"));

/// One classified change, ready to be merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Category label from the rule table, or [`OTHER_CATEGORY`]
    pub category: String,
    /// Everything after the bullet marker and any bracketed tag, unmodified
    pub message: String,
}

/// Classifier compiled from an ordered category rule table
#[derive(Debug)]
pub struct Classifier {
    rules: Vec<(String, Regex)>,
}

impl Classifier {
    /// Compile the rule table.
    ///
    /// Each pattern is anchored right after the bullet marker and an
    /// optional bracketed tag, and matched case-insensitively.
    pub fn from_rules(rules: &[CategoryRule]) -> Result<Self, ChangelogError> {
        let rules = rules
            .iter()
            .map(|rule| {
                Regex::new(&format!(r"(?i)^[-*] +\[?(?:{})\]? ", rule.pattern))
                    .map(|re| (rule.label.clone(), re))
                    .map_err(|source| ChangelogError::InvalidPattern {
                        label: rule.label.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// Classify a bullet line.
    ///
    /// The line is already known to start with a bullet marker; rules are
    /// tried in declaration order and the first match determines the
    /// category.
    pub fn classify(&self, line: &str) -> Change {
        let category = self
            .rules
            .iter()
            .find(|(_, re)| re.is_match(line))
            .map_or(OTHER_CATEGORY, |(label, _)| label.as_str())
            .to_string();

        let message = match MESSAGE_PREFIX.find(line) {
            Some(m) => line[m.end()..].to_string(),
            None => line.to_string(),
        };

        trace!(category = %category, message = %message, "classified bullet line");
        Change { category, message }
    }
}
