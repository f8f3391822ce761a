//! Configuration validation

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    let changelog = &config.changelog;

    if changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file path cannot be empty".to_string(),
        }
        .into());
    }

    if changelog.categories.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.categories".to_string(),
            message: "category table cannot be empty".to_string(),
        }
        .into());
    }

    for (index, rule) in changelog.categories.iter().enumerate() {
        if rule.label.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("changelog.categories[{index}].label"),
                message: "label cannot be empty".to_string(),
            }
            .into());
        }

        // Compiled as a fragment inside a larger anchored pattern; the
        // non-capturing wrapper is what the classifier uses.
        if Regex::new(&format!("(?:{})", rule.pattern)).is_err() {
            return Err(ConfigError::InvalidValue {
                field: format!("changelog.categories[{index}].pattern"),
                message: format!("pattern '{}' does not compile", rule.pattern),
            }
            .into());
        }

        // First match wins, so a repeated label can only shadow entries.
        if changelog.categories[..index]
            .iter()
            .any(|earlier| earlier.label.eq_ignore_ascii_case(&rule.label))
        {
            warn!(label = %rule.label, "duplicate category label; earlier rule takes precedence");
        }
    }

    if Regex::new(&format!("(?:{})", changelog.indicator)).is_err() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.indicator".to_string(),
            message: format!("pattern '{}' does not compile", changelog.indicator),
        }
        .into());
    }

    if changelog.date_format.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.date_format".to_string(),
            message: "date format cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
