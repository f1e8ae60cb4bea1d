//! MySQL/MariaDB driver.
//!
//! This module provides MySQL-specific implementations for:
//! - [`MysqlDialect`]: SQL syntax strategy
//! - [`MysqlProvider`]: MySQL schema operations
//!
//! # Supported Versions
//!
//! - MySQL 8.0+ (`RENAME COLUMN` requires 8.0)
//! - MariaDB 10.5+

mod dialect;
mod provider;

pub use dialect::MysqlDialect;
pub use provider::MysqlProvider;
