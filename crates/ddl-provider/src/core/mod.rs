//! Core abstractions for engine-neutral schema changes.
//!
//! This module provides the foundational types and traits used throughout
//! the crate:
//!
//! - [`schema`]: Table, column, foreign key and index descriptors
//! - [`command`]: Generated commands and ordered command sequences
//! - [`traits`]: Core traits for dialects, type mappers and providers
//! - [`identifier`]: Identifier and literal quoting
//! - [`naming`]: Deterministic constraint names
//! - [`catalog`]: Provider registry keyed by engine name
//!
//! # Architecture
//!
//! The core module defines engine-agnostic abstractions that are implemented
//! by driver modules (`drivers/mssql`, `drivers/postgres`, etc.). Nothing in
//! here performs I/O or keeps shared mutable state.

pub mod catalog;
pub mod command;
pub mod identifier;
pub mod naming;
pub mod options;
pub mod schema;
pub mod traits;

// Re-export commonly used types for convenience
pub use catalog::ProviderCatalog;
pub use command::{Command, CommandSequence};
pub use options::FormatOptions;
pub use schema::{ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor, TableDescriptor};
pub use traits::{Dialect, Guard, Provider, TypeMapper};
