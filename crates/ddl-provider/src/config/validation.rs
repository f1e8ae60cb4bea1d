//! Configuration validation.

use super::Config;
use crate::drivers::Engine;
use crate::error::{ProviderError, Result};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    config.provider.engine.parse::<Engine>()?;

    if config.provider.newline != "\n" && config.provider.newline != "\r\n" {
        return Err(ProviderError::Config(format!(
            "provider.newline must be \"\\n\" or \"\\r\\n\", got {:?}",
            config.provider.newline
        )));
    }
    if config.provider.indent.contains(['\r', '\n']) {
        return Err(ProviderError::Config(
            "provider.indent must not contain line breaks".into(),
        ));
    }
    if let Some(ref schema) = config.provider.schema {
        if schema.trim() != schema {
            return Err(ProviderError::Config(format!(
                "provider.schema has surrounding whitespace: {:?}",
                schema
            )));
        }
    }
    if let Some(ref separator) = config.script.batch_separator {
        if separator.trim().is_empty() {
            return Err(ProviderError::Config(
                "script.batch_separator must not be empty".into(),
            ));
        }
    }

    Ok(())
}
