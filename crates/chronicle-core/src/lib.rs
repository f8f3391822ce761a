//! Chronicle Core - Core library for changelog maintenance
//!
//! This crate provides the shared error types and the configuration system
//! for the Chronicle changelog tool.

pub mod config;
pub mod error;

pub use config::{ChangelogConfig, CategoryRule, Config};
pub use error::{ChangelogError, ChronicleError, ConfigError, Result};
