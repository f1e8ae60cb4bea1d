//! Microsoft SQL Server driver.
//!
//! This module provides MSSQL-specific implementations:
//!
//! - [`MssqlDialect`]: SQL syntax strategy for MSSQL
//! - [`MssqlProvider`]: T-SQL schema operations
//!
//! Multi-statement scripts for SQL Server are separated with `GO`.

mod dialect;
mod provider;

pub use dialect::MssqlDialect;
pub use provider::MssqlProvider;
