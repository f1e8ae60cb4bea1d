//! PostgreSQL SQL dialect (Strategy pattern).
//!
//! Provides PostgreSQL-specific identifier quoting, schema qualification and
//! `DO` block existence guards.

use crate::core::identifier::{quote_literal, quote_pg};
use crate::core::options::FormatOptions;
use crate::core::traits::{Dialect, Guard};

/// PostgreSQL dialect implementation.
///
/// Implements the Strategy pattern for SQL syntax differences.
#[derive(Debug, Clone, Default)]
pub struct PostgresDialect {
    options: FormatOptions,
}

impl PostgresDialect {
    /// Create a new PostgreSQL dialect resolving tables via `search_path`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dialect with explicit formatting options.
    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Schema predicate for `information_schema` lookups.
    fn schema_predicate(&self) -> String {
        match self.options.schema {
            Some(ref schema) => quote_literal(schema),
            None => "current_schema()".to_string(),
        }
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &str {
        "postgres"
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

    fn guard_table(&self, table: &str, guard: Guard, statement: &str) -> String {
        let nl = &self.options.newline;
        let condition = match guard {
            Guard::IfNotExists => "IF NOT EXISTS",
            Guard::IfExists => "IF EXISTS",
        };
        let body = statement.trim_end_matches(nl.as_str());
        [
            "DO $$".to_string(),
            "BEGIN".to_string(),
            format!(
                "{} (SELECT 1 FROM information_schema.tables WHERE table_schema = {} AND table_name = {}) THEN",
                condition,
                self.schema_predicate(),
                quote_literal(table)
            ),
            format!("{};", body),
            "END IF;".to_string(),
            "END".to_string(),
            "$$".to_string(),
        ]
        .join(nl)
    }
}
