//! Commit record types

use serde::{Deserialize, Serialize};

/// One commit as consumed by the changelog core.
///
/// All fields are required: a record missing `body`, `author.name` or
/// `author.date` fails decoding before any of its changes are processed.
/// Unknown fields from richer exports are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full commit message body
    pub body: String,
    /// Commit author
    pub author: CommitAuthor,
}

/// Author of a commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    /// Author name
    pub name: String,
    /// Author date as an ISO-8601 timestamp string
    pub date: String,
}

impl CommitRecord {
    /// Create a new commit record
    pub fn new(
        body: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            body: body.into(),
            author: CommitAuthor {
                name: author.into(),
                date: date.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_record() {
        let commit = CommitRecord::new("Changelog:\n- Added X", "Ann", "2024-01-05T10:00:00");
        assert_eq!(commit.author.name, "Ann");
        assert!(commit.body.starts_with("Changelog:"));
    }
}
