//! Init command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use chronicle_changelog::ChangelogUpdater;
use chronicle_core::config::load_config_or_default;

use crate::cli::{output, Cli};

/// Create a fresh skeleton changelog
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Target changelog file (defaults to the configured path)
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Overwrite an existing changelog
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, "executing init command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let target = self
            .target
            .clone()
            .unwrap_or_else(|| config.changelog.file.clone());

        if target.exists() && !self.force {
            anyhow::bail!(
                "Changelog already exists at {}. Use --force to overwrite.",
                target.display()
            );
        }

        let updater = ChangelogUpdater::new(config.changelog)?;
        std::fs::write(&target, updater.skeleton().render())?;

        if !cli.quiet {
            output::success(&format!(
                "Created changelog at {}",
                output::path_style().apply_to(target.display())
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_skeleton() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("CHANGELOG.md");

        let cli = Cli::parse_from([
            "chronicle",
            "--quiet",
            "init",
            "--target",
            target.to_str().unwrap(),
        ]);
        let Commands::Init(ref cmd) = cli.command else {
            panic!("expected init command");
        };
        cmd.execute(&cli).unwrap();

        let written = std::fs::read_to_string(&target).unwrap();
        assert!(written.starts_with("# Changelog\n"));
        assert!(written.ends_with("## [Unreleased]\n"));
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("CHANGELOG.md");
        std::fs::write(&target, "existing\n").unwrap();

        let cli = Cli::parse_from([
            "chronicle",
            "--quiet",
            "init",
            "--target",
            target.to_str().unwrap(),
        ]);
        let Commands::Init(ref cmd) = cli.command else {
            panic!("expected init command");
        };

        assert!(cmd.execute(&cli).is_err());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "existing\n");
    }
}
