//! SQLite driver.
//!
//! - [`SqliteDialect`]: SQL syntax strategy for SQLite
//! - [`SqliteProvider`]: SQLite schema operations
//!
//! SQLite cannot alter constraints of an existing table, so default and
//! foreign key changes after creation are reported as unsupported.

mod dialect;
mod provider;

pub use dialect::SqliteDialect;
pub use provider::SqliteProvider;
