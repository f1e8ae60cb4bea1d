//! MySQL/MariaDB SQL dialect (Strategy pattern).
//!
//! Provides MySQL-specific identifier quoting and schema qualification.
//! Existence guards use the native `IF [NOT] EXISTS` clause.

use crate::core::identifier::quote_mysql;
use crate::core::options::FormatOptions;
use crate::core::traits::{Dialect, Guard};
use crate::drivers::common::native_table_guard;

/// MySQL/MariaDB dialect implementation.
///
/// Implements the Strategy pattern for SQL syntax differences.
/// The optional schema is the MySQL database name.
#[derive(Debug, Clone, Default)]
pub struct MysqlDialect {
    options: FormatOptions,
}

impl MysqlDialect {
    /// Create a new MySQL dialect instance using the connection's database.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }
}

impl Dialect for MysqlDialect {
    fn name(&self) -> &str {
        "mysql"
    }

    fn quote_ident(&self, name: &str) -> String {
        quote_mysql(name)
    }

    fn qualify_table(&self, table: &str) -> String {
        match self.options.schema {
            Some(ref schema) => format!("{}.{}", quote_mysql(schema), quote_mysql(table)),
            None => quote_mysql(table),
        }
    }

    /// Only `CREATE TABLE` and `DROP TABLE` statements take a native guard;
    /// anything else is returned unchanged.
    fn guard_table(&self, _table: &str, guard: Guard, statement: &str) -> String {
        native_table_guard(statement, guard == Guard::IfNotExists)
    }
}
