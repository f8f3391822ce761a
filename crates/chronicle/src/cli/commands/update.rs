//! Update command

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use chronicle_changelog::{ChangelogUpdater, Document};
use chronicle_core::config::load_config_or_default;
use chronicle_core::error::ChangelogError;
use chronicle_git::decode_commits;

use crate::cli::{output, Cli, OutputFormat};

/// Merge declared changes from commit records into the changelog
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Commit records as JSON (an array, or a single object)
    #[arg(short, long, value_name = "JSON", conflicts_with = "commits_file")]
    pub commits: Option<String>,

    /// Read commit record JSON from a file, `-` for stdin
    #[arg(long, value_name = "PATH")]
    pub commits_file: Option<PathBuf>,

    /// Target changelog file (defaults to the configured path)
    #[arg(short, long)]
    pub target: Option<PathBuf>,
}

impl UpdateCommand {
    /// Execute the update command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(target = ?self.target, "executing update command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let json = self.commit_json()?;
        let commits = decode_commits(&json)?;
        if commits.is_empty() && !cli.quiet {
            output::warning("No commit records supplied; rewriting the changelog unchanged.");
        }

        let target = self
            .target
            .clone()
            .unwrap_or_else(|| config.changelog.file.clone());
        let updater = ChangelogUpdater::new(config.changelog)?;

        // An unreadable existing changelog aborts the run before any write.
        let (mut doc, created) = if target.exists() {
            let text =
                std::fs::read_to_string(&target).map_err(|source| ChangelogError::ReadFailed {
                    path: target.clone(),
                    source,
                })?;
            (Document::parse(&text), false)
        } else {
            debug!(path = %target.display(), "no changelog found, starting from skeleton");
            (updater.skeleton(), true)
        };

        let merged = updater.apply_commits(&mut doc, &commits)?;

        // One full truncate-and-rewrite of the target, never a patch.
        std::fs::write(&target, doc.render()).map_err(|source| ChangelogError::WriteFailed {
            path: target.clone(),
            source,
        })?;

        match cli.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "target": target,
                        "created": created,
                        "commits": commits.len(),
                        "entries": merged,
                    })
                );
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    output::success(&format!(
                        "Merged {} entr{} from {} commit{} into {}",
                        merged,
                        if merged == 1 { "y" } else { "ies" },
                        commits.len(),
                        if commits.len() == 1 { "" } else { "s" },
                        output::path_style().apply_to(target.display()),
                    ));
                }
            }
        }

        Ok(())
    }

    /// The commit JSON from whichever source was given
    fn commit_json(&self) -> anyhow::Result<String> {
        if let Some(json) = &self.commits {
            return Ok(json.clone());
        }

        match &self.commits_file {
            Some(path) if path.as_os_str() == "-" => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => anyhow::bail!("either --commits or --commits-file is required"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use tempfile::TempDir;

    fn run_update(target: &std::path::Path, commits: &str) {
        let cli = Cli::parse_from([
            "chronicle",
            "--quiet",
            "update",
            "--target",
            target.to_str().unwrap(),
            "--commits",
            commits,
        ]);
        let Commands::Update(ref cmd) = cli.command else {
            panic!("expected update command");
        };
        cmd.execute(&cli).unwrap();
    }

    #[test]
    fn test_update_creates_changelog_from_scratch() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("CHANGELOG.md");

        run_update(
            &target,
            r#"[{"body": "Changelog:\n- Fixed crash", "author": {"name": "Ann", "date": "2024-01-05T10:00:00"}}]"#,
        );

        let written = std::fs::read_to_string(&target).unwrap();
        assert!(written.starts_with("# Changelog\n"));
        assert!(written.contains("### [Fixed]\n- Fixed crash ~ Ann (2024-01-05)\n"));
    }

    #[test]
    fn test_update_merges_into_existing_changelog() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("CHANGELOG.md");
        std::fs::write(
            &target,
            "# Changelog\n## [1.0.0]\n### [Added]\n- shipped\n",
        )
        .unwrap();

        run_update(
            &target,
            r#"{"body": "Changes:\n- Added widget", "author": {"name": "Ben", "date": "2024-02-01T09:30:00"}}"#,
        );

        let written = std::fs::read_to_string(&target).unwrap();
        // the new release lands before the existing one
        let unreleased = written.find("## [Unreleased]").unwrap();
        let released = written.find("## [1.0.0]").unwrap();
        assert!(unreleased < released);
        assert!(written.contains("- Added widget ~ Ben (2024-02-01)\n"));
        // pre-existing content survives untouched
        assert!(written.contains("### [Added]\n- shipped\n"));
    }
}
