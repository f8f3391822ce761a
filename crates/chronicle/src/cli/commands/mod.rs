//! CLI commands

mod completions;
mod init;
mod update;

pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use update::UpdateCommand;
