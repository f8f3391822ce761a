//! Decoding commit records from their JSON export

use tracing::debug;

use chronicle_core::error::{ChangelogError, Result};

use crate::types::CommitRecord;

/// Decode commit records from JSON.
///
/// Accepts either a JSON array of records or a single record object, which
/// is how `git log` exports typically arrive (one object per commit, or a
/// collected array).
pub fn decode_commits(json: &str) -> Result<Vec<CommitRecord>> {
    let trimmed = json.trim_start();

    let commits: Vec<CommitRecord> = if trimmed.starts_with('[') {
        serde_json::from_str(json).map_err(|e| ChangelogError::DecodeFailed(e.to_string()))?
    } else {
        let single: CommitRecord =
            serde_json::from_str(json).map_err(|e| ChangelogError::DecodeFailed(e.to_string()))?;
        vec![single]
    };

    debug!(count = commits.len(), "decoded commit records");
    Ok(commits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_array() {
        let json = r#"[
            {"body": "Changelog:\n- Added X", "author": {"name": "Ann", "date": "2024-01-05T10:00:00"}},
            {"body": "plain", "author": {"name": "Ben", "date": "2024-01-06T12:00:00"}}
        ]"#;

        let commits = decode_commits(json).unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].author.name, "Ann");
    }

    #[test]
    fn test_decode_single_object() {
        let json =
            r#"{"body": "x", "author": {"name": "Ann", "date": "2024-01-05T10:00:00"}}"#;

        let commits = decode_commits(json).unwrap();
        assert_eq!(commits.len(), 1);
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let json = r#"{"hash": "abc123", "body": "x", "author": {"name": "Ann", "email": "a@b.c", "date": "2024-01-05T10:00:00"}}"#;

        let commits = decode_commits(json).unwrap();
        assert_eq!(commits[0].author.date, "2024-01-05T10:00:00");
    }

    #[test]
    fn test_decode_missing_author_date_fails() {
        let json = r#"{"body": "x", "author": {"name": "Ann"}}"#;
        assert!(decode_commits(json).is_err());
    }

    #[test]
    fn test_decode_missing_body_fails() {
        let json = r#"[{"author": {"name": "Ann", "date": "2024-01-05T10:00:00"}}]"#;
        assert!(decode_commits(json).is_err());
    }
}
