//! MSSQL SQL dialect (Strategy pattern).
//!
//! Provides SQL Server identifier quoting, schema qualification and
//! `IF [NOT] EXISTS ... BEGIN ... END` existence guards.

use crate::core::identifier::{quote_mssql, quote_mssql_literal};
use crate::core::options::FormatOptions;
use crate::core::traits::{Dialect, Guard};

/// Microsoft SQL Server dialect implementation.
///
/// Implements the Strategy pattern for SQL syntax differences.
#[derive(Debug, Clone)]
pub struct MssqlDialect {
    options: FormatOptions,
}

impl Default for MssqlDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl MssqlDialect {
    /// Create a new MSSQL dialect instance qualifying tables with `[dbo]`.
    pub fn new() -> Self {
        Self::with_options(FormatOptions::with_schema("dbo"))
    }

    /// Create a dialect with explicit formatting options.
    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Formatting options in use.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }
}

impl Dialect for MssqlDialect {
    fn name(&self) -> &str {
        "mssql"
    }

    fn quote_ident(&self, name: &str) -> String {
        quote_mssql(name)
    }

    fn qualify_table(&self, table: &str) -> String {
        match self.options.schema {
            Some(ref schema) => format!("{}.{}", quote_mssql(schema), quote_mssql(table)),
            None => quote_mssql(table),
        }
    }

    fn guard_table(&self, table: &str, guard: Guard, statement: &str) -> String {
        let nl = &self.options.newline;
        let condition = match guard {
            Guard::IfNotExists => "IF NOT EXISTS",
            Guard::IfExists => "IF EXISTS",
        };
        // END must start on its own line so it never fuses with the body.
        let separator = if statement.ends_with(nl.as_str()) { "" } else { nl.as_str() };
        format!(
            "{} (SELECT * FROM sys.objects WHERE object_id = OBJECT_ID({}) AND type in (N'U')){}BEGIN{}{}{}END",
            condition,
            quote_mssql_literal(&self.qualify_table(table)),
            nl,
            nl,
            statement,
            separator
        )
    }
}
