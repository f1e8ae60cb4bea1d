//! Provider catalog for explicit dependency injection.
//!
//! The [`ProviderCatalog`] maps engine names to providers. It is built
//! explicitly and passed to whatever selects a provider at runtime; there
//! is no global registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::drivers::{Engine, ProviderImpl};
use crate::error::{ProviderError, Result};

use super::options::FormatOptions;
use super::traits::Provider;

/// Registry of providers keyed by engine name.
///
/// Lookups accept the built-in engine aliases (`sqlserver`, `pg`,
/// `mariadb`, ...), which resolve to the canonical engine name.
///
/// # Example
///
/// ```rust,ignore
/// let catalog = ProviderCatalog::with_builtins();
/// let provider = catalog.require("sqlserver")?;
/// for command in provider.rename_table("Users", "Members")? {
///     println!("{}", command);
/// }
/// ```
#[derive(Default, Clone)]
pub struct ProviderCatalog {
    providers: BTreeMap<String, Arc<dyn Provider>>,
}

impl ProviderCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with every built-in engine, using each engine's
    /// default formatting options.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        for engine in Engine::ALL {
            let options = FormatOptions {
                schema: engine.default_schema().map(str::to_string),
                ..FormatOptions::default()
            };
            catalog.register(engine.name(), ProviderImpl::from_engine(engine, options));
        }
        catalog
    }

    /// Register a provider under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, provider: impl Provider + 'static) {
        self.register_arc(name, Arc::new(provider));
    }

    /// Register a shared provider.
    pub fn register_arc(&mut self, name: impl Into<String>, provider: Arc<dyn Provider>) {
        let name = name.into().to_lowercase();
        debug!("Registering provider '{}'", name);
        self.providers.insert(name, provider);
    }

    /// Get a provider by engine name or alias.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Provider>> {
        self.providers.get(&Self::resolve(name)).cloned()
    }

    /// Get a provider by engine name or alias, returning an error if not found.
    pub fn require(&self, name: &str) -> Result<Arc<dyn Provider>> {
        self.get(name).ok_or_else(|| {
            ProviderError::Config(format!(
                "Unknown database engine: '{}'. Registered engines: {}",
                name,
                self.names().join(", ")
            ))
        })
    }

    /// Check if a provider is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(&Self::resolve(name))
    }

    /// Registered engine names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }

    fn resolve(name: &str) -> String {
        match name.parse::<Engine>() {
            Ok(engine) => engine.name().to_string(),
            Err(_) => name.trim().to_lowercase(),
        }
    }
}

impl std::fmt::Debug for ProviderCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCatalog")
            .field("providers", &self.names())
            .finish()
    }
}
