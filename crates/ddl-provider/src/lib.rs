//! # ddl-provider
//!
//! Engine-neutral schema changes rendered as engine-specific DDL.
//!
//! This library translates schema-change intents (create table, add columns,
//! rename, drop defaults, foreign keys, indexes) into the exact command
//! sequence a database engine expects, with:
//!
//! - **Four engines**: SQL Server, PostgreSQL, MySQL/MariaDB and SQLite
//! - **Exhaustive type mapping** from a shared set of logical types
//! - **Deterministic constraint names** so drops always match creates
//! - **Existence guards** that make table creation safe to re-run
//! - **Migration plans** loaded from YAML and rendered per engine
//!
//! Nothing here opens a connection. Generated commands are executed by a
//! caller-supplied [`CommandExecutor`].
//!
//! ## Example
//!
//! ```rust
//! use ddl_provider::{ColumnDescriptor, LogicalType, Provider, ProviderCatalog};
//!
//! # fn main() -> ddl_provider::Result<()> {
//! let catalog = ProviderCatalog::with_builtins();
//! let provider = catalog.require("mssql")?;
//!
//! let columns = vec![
//!     ColumnDescriptor::new("Id", LogicalType::Int32).primary_key(),
//!     ColumnDescriptor::new("Name", LogicalType::String).nullable(),
//! ];
//! for command in provider.create_table("Users", &columns, true)? {
//!     println!("{}", command);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod dialect;
pub mod drivers;
pub mod error;
pub mod executor;
pub mod plan;

// Re-exports for convenient access
pub use crate::core::{
    ColumnDescriptor, Command, CommandSequence, Dialect, ForeignKeyDescriptor, FormatOptions,
    Guard, IndexDescriptor, Provider, ProviderCatalog, TableDescriptor, TypeMapper,
};
pub use config::{Config, ProviderConfig, ScriptConfig};
pub use dialect::LogicalType;
pub use drivers::{Engine, ProviderImpl};
pub use error::{ProviderError, Result};
pub use executor::{execute_all, CommandExecutor};
pub use plan::{render_script, MigrationPlan, MigrationStep};
