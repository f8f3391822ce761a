//! Commit body scanning
//!
//! A commit declares changes by putting an indicator line ("Changelog:",
//! "Change:", "Changes:") in its body; the bullet lines that follow it are
//! the declared changes. Scanning is a small two-state machine, local to
//! one commit.

use regex::Regex;
use tracing::trace;

use crate::classify::{Change, Classifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Looking for an indicator line
    Scanning,
    /// Bullets on the following lines are declared changes
    Collecting,
}

/// Scans one commit body for declared changes
pub struct CommitWalker<'a> {
    classifier: &'a Classifier,
    indicator: &'a Regex,
}

impl<'a> CommitWalker<'a> {
    /// Create a walker over the given classifier and indicator pattern
    pub fn new(classifier: &'a Classifier, indicator: &'a Regex) -> Self {
        Self {
            classifier,
            indicator,
        }
    }

    /// Scan a commit body and return its declared changes in order.
    ///
    /// Every line is checked against the indicator pattern (trimmed),
    /// regardless of state, so an indicator line that interrupts a bullet
    /// run immediately opens a new collection region. A non-bullet line
    /// otherwise ends the region. Bodies with an indicator but no bullets
    /// yield nothing; that is not an error.
    pub fn scan(&self, body: &str) -> Vec<Change> {
        let mut state = State::Scanning;
        let mut changes = Vec::new();

        for line in body.split('\n') {
            if state == State::Collecting && is_bullet(line) {
                changes.push(self.classifier.classify(line));
            } else {
                state = State::Scanning;
            }

            if self.indicator.is_match(line.trim()) {
                state = State::Collecting;
            }
        }

        trace!(count = changes.len(), "scanned commit body");
        changes
    }
}

fn is_bullet(line: &str) -> bool {
    line.starts_with("- ") || line.starts_with("* ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_core::config::{default_categories, DEFAULT_INDICATOR};

    fn scan(body: &str) -> Vec<Change> {
        let classifier = Classifier::from_rules(&default_categories()).unwrap();
        let indicator = Regex::new(&format!("(?i)^(?:{DEFAULT_INDICATOR})")).unwrap();
        CommitWalker::new(&classifier, &indicator).scan(body)
    }

    #[test]
    fn test_non_bullet_line_ends_collection() {
        let changes = scan("Changelog:\n- Added X\nrandom text\n- Added Y");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].message, "Added X");
    }

    #[test]
    fn test_bullets_before_indicator_ignored() {
        let changes = scan("- Added early\nChangelog:\n- Added late");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].message, "Added late");
    }

    #[test]
    fn test_multiple_indicator_blocks() {
        let body = "Changes: ui\n- Added button\n\nChangelog:\n- Fixed crash\n- Removed flag";
        let changes = scan(body);
        let messages: Vec<&str> = changes.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, ["Added button", "Fixed crash", "Removed flag"]);
    }

    #[test]
    fn test_indicator_reopens_on_same_line() {
        // the indicator line both ends the previous region and opens a new one
        let body = "Changelog:\n- Added X\nChanges: more\n- Fixed Y";
        let changes = scan(body);
        assert_eq!(changes.len(), 2);
    }

    #[test]
    fn test_indicator_is_trimmed_and_case_insensitive() {
        let changes = scan("   CHANGES: indented\n- Added X");
        assert_eq!(changes.len(), 1);
    }

    #[test]
    fn test_indicator_without_bullets_yields_nothing() {
        assert!(scan("Changelog:\nnothing declared here").is_empty());
        assert!(scan("no indicator at all\n- Added X").is_empty());
    }

    #[test]
    fn test_indicator_requires_colon_prefix() {
        assert!(scan("Changelogs are nice\n- Added X").is_empty());
    }
}
