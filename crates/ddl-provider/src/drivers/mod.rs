//! Database driver implementations.
//!
//! This module provides engine-specific implementations of the core traits:
//!
//! - [`mssql`]: Microsoft SQL Server
//! - [`postgres`]: PostgreSQL
//! - [`mysql`]: MySQL/MariaDB
//! - [`sqlite`]: SQLite
//! - `common`: assembly helpers shared by the ANSI-style engines
//!
//! # Architecture
//!
//! Each driver module implements:
//! - `Dialect`: quoting, qualification and existence guards
//! - `Provider`: the schema operations, built on the dialect and the
//!   engine's `TypeMapper`
//!
//! # Static dispatch
//!
//! [`ProviderImpl`] wraps the concrete providers in an enum so callers can
//! pick an engine at runtime without boxing. The catalog hands out
//! `Arc<dyn Provider>` for callers that register their own engines.
//!
//! # Adding New Databases
//!
//! 1. Create a new module under `drivers/` with a dialect and a provider
//! 2. Add a type mapper in `dialect::typemap`
//! 3. Add a variant to [`Engine`] and [`ProviderImpl`]
//! 4. Register it in `ProviderCatalog::with_builtins()`

pub(crate) mod common;
pub mod mssql;
pub mod mysql;
pub mod postgres;
pub mod sqlite;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use mssql::{MssqlDialect, MssqlProvider};
pub use mysql::{MysqlDialect, MysqlProvider};
pub use postgres::{PostgresDialect, PostgresProvider};
pub use sqlite::{SqliteDialect, SqliteProvider};

use crate::core::command::CommandSequence;
use crate::core::options::FormatOptions;
use crate::core::schema::{ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor};
use crate::core::traits::{Provider, TypeMapper};
use crate::dialect::{MssqlTypeMapper, MysqlTypeMapper, PostgresTypeMapper, SqliteTypeMapper};
use crate::error::{ProviderError, Result};

/// Supported database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Mssql,
    Postgres,
    Mysql,
    Sqlite,
}

impl Engine {
    /// All engines, in display order.
    pub const ALL: [Engine; 4] = [Engine::Mssql, Engine::Postgres, Engine::Mysql, Engine::Sqlite];

    /// Canonical engine name.
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Mssql => "mssql",
            Engine::Postgres => "postgres",
            Engine::Mysql => "mysql",
            Engine::Sqlite => "sqlite",
        }
    }

    /// Alternative names accepted by [`Engine::from_str`].
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Engine::Mssql => &["sqlserver", "sql_server"],
            Engine::Postgres => &["postgresql", "pg"],
            Engine::Mysql => &["mariadb"],
            Engine::Sqlite => &["sqlite3"],
        }
    }

    /// Schema tables are qualified with unless configured otherwise.
    pub fn default_schema(&self) -> Option<&'static str> {
        match self {
            Engine::Mssql => Some("dbo"),
            _ => None,
        }
    }

    /// Separator placed between commands in a rendered script.
    pub fn batch_separator(&self) -> &'static str {
        match self {
            Engine::Mssql => "GO",
            _ => ";",
        }
    }

    /// The engine's type mapper.
    pub fn type_mapper(&self) -> Box<dyn TypeMapper> {
        match self {
            Engine::Mssql => Box::new(MssqlTypeMapper::new()),
            Engine::Postgres => Box::new(PostgresTypeMapper::new()),
            Engine::Mysql => Box::new(MysqlTypeMapper::new()),
            Engine::Sqlite => Box::new(SqliteTypeMapper::new()),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Engine::ALL
            .iter()
            .copied()
            .find(|e| e.name() == wanted || e.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| {
                ProviderError::Config(format!(
                    "Unknown database engine: '{}'. Supported engines: mssql, postgres, mysql, sqlite",
                    s
                ))
            })
    }
}

/// Enum-based static dispatch for providers.
///
/// Note: We use manual impl instead of enum_dispatch macro; the compiler
/// generates the same match statement.
#[derive(Debug, Clone)]
pub enum ProviderImpl {
    Mssql(MssqlProvider),
    Postgres(PostgresProvider),
    Mysql(MysqlProvider),
    Sqlite(SqliteProvider),
}

macro_rules! dispatch {
    ($self:ident, $p:ident => $call:expr) => {
        match $self {
            ProviderImpl::Mssql($p) => $call,
            ProviderImpl::Postgres($p) => $call,
            ProviderImpl::Mysql($p) => $call,
            ProviderImpl::Sqlite($p) => $call,
        }
    };
}

impl ProviderImpl {
    /// Create a provider for `engine` with explicit formatting options.
    pub fn from_engine(engine: Engine, options: FormatOptions) -> Self {
        match engine {
            Engine::Mssql => ProviderImpl::Mssql(MssqlProvider::with_options(options)),
            Engine::Postgres => ProviderImpl::Postgres(PostgresProvider::with_options(options)),
            Engine::Mysql => ProviderImpl::Mysql(MysqlProvider::with_options(options)),
            Engine::Sqlite => ProviderImpl::Sqlite(SqliteProvider::with_options(options)),
        }
    }

    /// Create a provider with the engine's default options from an engine
    /// name or alias.
    ///
    /// # Errors
    ///
    /// Returns a config error if the engine is not recognized.
    pub fn from_db_type(db_type: &str) -> Result<Self> {
        let engine: Engine = db_type.parse()?;
        let options = FormatOptions {
            schema: engine.default_schema().map(str::to_string),
            ..FormatOptions::default()
        };
        Ok(Self::from_engine(engine, options))
    }

    /// The engine this provider renders for.
    pub fn engine(&self) -> Engine {
        match self {
            ProviderImpl::Mssql(_) => Engine::Mssql,
            ProviderImpl::Postgres(_) => Engine::Postgres,
            ProviderImpl::Mysql(_) => Engine::Mysql,
            ProviderImpl::Sqlite(_) => Engine::Sqlite,
        }
    }
}

impl Provider for ProviderImpl {
    fn name(&self) -> &str {
        dispatch!(self, p => p.name())
    }

    fn create_table(
        &self,
        table: &str,
        columns: &[ColumnDescriptor],
        only_if_not_exists: bool,
    ) -> Result<CommandSequence> {
        dispatch!(self, p => p.create_table(table, columns, only_if_not_exists))
    }

    fn add_columns(&self, table: &str, columns: &[ColumnDescriptor]) -> Result<CommandSequence> {
        dispatch!(self, p => p.add_columns(table, columns))
    }

    fn rename_table(&self, old_name: &str, new_name: &str) -> Result<CommandSequence> {
        dispatch!(self, p => p.rename_table(old_name, new_name))
    }

    fn rename_column(
        &self,
        table: &str,
        old_name: &str,
        new_name: &str,
    ) -> Result<CommandSequence> {
        dispatch!(self, p => p.rename_column(table, old_name, new_name))
    }

    fn drop_default_constraint(&self, table: &str, column: &str) -> Result<CommandSequence> {
        dispatch!(self, p => p.drop_default_constraint(table, column))
    }

    fn drop_table(&self, table: &str, only_if_exists: bool) -> Result<CommandSequence> {
        dispatch!(self, p => p.drop_table(table, only_if_exists))
    }

    fn drop_column(&self, table: &str, column: &str) -> Result<CommandSequence> {
        dispatch!(self, p => p.drop_column(table, column))
    }

    fn add_foreign_key(&self, fk: &ForeignKeyDescriptor) -> Result<CommandSequence> {
        dispatch!(self, p => p.add_foreign_key(fk))
    }

    fn drop_foreign_key(&self, table: &str, name: &str) -> Result<CommandSequence> {
        dispatch!(self, p => p.drop_foreign_key(table, name))
    }

    fn add_index(&self, index: &IndexDescriptor) -> Result<CommandSequence> {
        dispatch!(self, p => p.add_index(index))
    }

    fn drop_index(&self, table: &str, name: &str) -> Result<CommandSequence> {
        dispatch!(self, p => p.drop_index(table, name))
    }
}
