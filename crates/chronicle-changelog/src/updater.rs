//! Changelog updating
//!
//! Ties the pieces together: compiles the configured patterns once, scans
//! commit bodies, and merges every declared change into a document tree.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use tracing::{debug, instrument};

use chronicle_core::config::ChangelogConfig;
use chronicle_core::error::ChangelogError;
use chronicle_git::{CommitAuthor, CommitRecord};

use crate::classify::Classifier;
use crate::document::{Document, Node};
use crate::merge;
use crate::walker::CommitWalker;

/// Release section new changes land in
pub const DEFAULT_RELEASE: &str = "Unreleased";

/// Applies commit records to a changelog document.
///
/// Configuration is passed in explicitly and compiled once at construction;
/// a rule or indicator pattern that does not compile fails here, before any
/// document is touched.
pub struct ChangelogUpdater {
    config: ChangelogConfig,
    classifier: Classifier,
    indicator: Regex,
}

impl ChangelogUpdater {
    /// Create an updater from configuration
    pub fn new(config: ChangelogConfig) -> Result<Self, ChangelogError> {
        let classifier = Classifier::from_rules(&config.categories)?;
        let indicator = Regex::new(&format!("(?i)^(?:{})", config.indicator))
            .map_err(ChangelogError::InvalidIndicator)?;

        Ok(Self {
            config,
            classifier,
            indicator,
        })
    }

    /// Build the skeleton used when no changelog exists yet: the top-level
    /// heading, the configured notice paragraph, and one empty release.
    pub fn skeleton(&self) -> Document {
        let mut doc = Document::new();
        let changelog = doc.append_child(doc.root(), Node::heading("# Changelog\n"));
        for line in self.config.notice.lines() {
            doc.append_content(changelog, format!("{line}\n"));
        }
        doc.append_child(changelog, Node::heading(format!("## [{DEFAULT_RELEASE}]\n")));
        doc
    }

    /// Scan one commit body and merge every declared change into `doc`.
    ///
    /// Returns the number of merged entries. A commit whose author date
    /// cannot be parsed fails before any of its changes are merged.
    #[instrument(skip_all, fields(author = %commit.author.name))]
    pub fn apply_commit(
        &self,
        doc: &mut Document,
        commit: &CommitRecord,
    ) -> Result<usize, ChangelogError> {
        let walker = CommitWalker::new(&self.classifier, &self.indicator);
        let changes = walker.scan(&commit.body);
        if changes.is_empty() {
            return Ok(0);
        }

        let annotation = if self.config.annotate {
            Some(self.render_annotation(&commit.author)?)
        } else {
            None
        };

        let count = changes.len();
        for change in changes {
            let mut message = change.message;
            if let Some(suffix) = &annotation {
                message.push_str(suffix);
            }
            merge::add_change(doc, &change.category, &message, DEFAULT_RELEASE);
        }

        debug!(count, "merged changes from commit");
        Ok(count)
    }

    /// Apply a sequence of commits in order; the first failure aborts
    pub fn apply_commits(
        &self,
        doc: &mut Document,
        commits: &[CommitRecord],
    ) -> Result<usize, ChangelogError> {
        let mut total = 0;
        for commit in commits {
            total += self.apply_commit(doc, commit)?;
        }
        Ok(total)
    }

    fn render_annotation(&self, author: &CommitAuthor) -> Result<String, ChangelogError> {
        let timestamp = format_timestamp(&author.date, &self.config.date_format)?;
        Ok(self
            .config
            .annotation
            .replace("{author}", &author.name)
            .replace("{timestamp}", &timestamp))
    }
}

/// Parse an ISO-8601 timestamp, with or without an offset, and render it
/// with the configured format.
fn format_timestamp(date: &str, format: &str) -> Result<String, ChangelogError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Ok(dt.format(format).to_string());
    }
    if let Ok(dt) = date.parse::<NaiveDateTime>() {
        return Ok(dt.format(format).to_string());
    }
    if let Ok(d) = date.parse::<NaiveDate>() {
        return Ok(d.format(format).to_string());
    }
    Err(ChangelogError::InvalidTimestamp(date.to_string()))
}
