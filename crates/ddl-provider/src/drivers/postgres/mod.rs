//! PostgreSQL driver.
//!
//! This module provides PostgreSQL-specific implementations:
//!
//! - [`PostgresDialect`]: SQL syntax strategy for PostgreSQL
//! - [`PostgresProvider`]: PostgreSQL schema operations

mod dialect;
mod provider;

pub use dialect::PostgresDialect;
pub use provider::PostgresProvider;
