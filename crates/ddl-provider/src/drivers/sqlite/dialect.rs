//! SQLite SQL dialect (Strategy pattern).

use crate::core::identifier::quote_pg;
use crate::core::options::FormatOptions;
use crate::core::traits::{Dialect, Guard};
use crate::drivers::common::native_table_guard;

/// SQLite dialect implementation.
///
/// SQLite quotes identifiers like PostgreSQL. The optional schema names an
/// attached database (`main`, `temp`, ...).
#[derive(Debug, Clone, Default)]
pub struct SqliteDialect {
    options: FormatOptions,
}

impl SqliteDialect {
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

impl Dialect for SqliteDialect {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn quote_ident(&self, name: &str) -> String {
        quote_pg(name)
    }

    fn qualify_table(&self, table: &str) -> String {
        match self.options.schema {
            Some(ref schema) => format!("{}.{}", quote_pg(schema), quote_pg(table)),
            None => quote_pg(table),
        }
    }

    fn guard_table(&self, _table: &str, guard: Guard, statement: &str) -> String {
        native_table_guard(statement, guard == Guard::IfNotExists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_and_qualify() {
        let dialect = SqliteDialect::new();
        assert_eq!(dialect.quote_ident("a\"b"), "\"a\"\"b\"");
        assert_eq!(dialect.qualify_table("users"), "\"users\"");

        let attached = SqliteDialect::with_options(FormatOptions::with_schema("aux"));
        assert_eq!(attached.qualify_table("users"), "\"aux\".\"users\"");
    }

    #[test]
    fn test_guard_table() {
        let dialect = SqliteDialect::new();
        assert_eq!(
            dialect.guard_table("t", Guard::IfExists, "DROP TABLE \"t\""),
            "DROP TABLE IF EXISTS \"t\""
        );
    }
}
