//! Logical types and per-engine type mapping.
//!
//! This module provides the engine-neutral [`LogicalType`] and one
//! [`TypeMapper`](crate::core::TypeMapper) per supported engine.
//!
//! # Available Mappers
//!
//! - [`MssqlTypeMapper`]: SQL Server (`[int]`, `[nvarchar](max)`, ...)
//! - [`PostgresTypeMapper`]: PostgreSQL
//! - [`MysqlTypeMapper`]: MySQL/MariaDB
//! - [`SqliteTypeMapper`]: SQLite
//!
//! # Usage
//!
//! ```rust,ignore
//! let mapper = MssqlTypeMapper::new();
//! let token = mapper.map_type(LogicalType::FixedString, Some(10), None)?;
//! assert_eq!(token, "[nvarchar](10)");
//! ```

mod logical;
mod typemap;

pub use logical::LogicalType;
pub use typemap::{MssqlTypeMapper, MysqlTypeMapper, PostgresTypeMapper, SqliteTypeMapper};
