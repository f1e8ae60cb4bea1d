//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use std::path::Path;

use tracing::debug;

use crate::core::options::FormatOptions;
use crate::drivers::{Engine, ProviderImpl};
use crate::error::Result;

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Selected engine.
    pub fn engine(&self) -> Result<Engine> {
        self.provider.engine.parse()
    }

    /// Formatting options for the selected engine.
    pub fn format_options(&self) -> Result<FormatOptions> {
        let engine = self.engine()?;
        let schema = match self.provider.schema {
            Some(ref s) if s.is_empty() => None,
            Some(ref s) => Some(s.clone()),
            None => engine.default_schema().map(str::to_string),
        };
        Ok(FormatOptions {
            schema,
            indent: self.provider.indent.clone(),
            newline: self.provider.newline.clone(),
        })
    }

    /// Separator placed between rendered commands.
    pub fn batch_separator(&self) -> Result<String> {
        match self.script.batch_separator {
            Some(ref sep) => Ok(sep.clone()),
            None => Ok(self.engine()?.batch_separator().to_string()),
        }
    }

    /// Build the provider this configuration describes.
    pub fn build_provider(&self) -> Result<ProviderImpl> {
        let engine = self.engine()?;
        let options = self.format_options()?;
        debug!(
            "Using engine {} (schema: {})",
            engine,
            options.schema.as_deref().unwrap_or("<none>")
        );
        Ok(ProviderImpl::from_engine(engine, options))
    }
}
