//! Assembly helpers shared by the engine providers.
//!
//! PostgreSQL, MySQL and SQLite share the ANSI layout for column lists,
//! inline defaults and `ADD COLUMN`; SQL Server only uses the precondition
//! checks and list helpers from here.

use crate::core::command::Command;
use crate::core::naming;
use crate::core::options::FormatOptions;
use crate::core::schema::{primary_key_columns, ColumnDescriptor};
use crate::core::traits::{Dialect, TypeMapper};
use crate::error::{ProviderError, Result};

/// `NULL` / `NOT NULL` clause for a column.
pub(crate) fn nullability(col: &ColumnDescriptor) -> &'static str {
    if col.is_nullable {
        "NULL"
    } else {
        "NOT NULL"
    }
}

/// Reject an empty column set.
pub(crate) fn require_columns(
    operation: &str,
    table: &str,
    columns: &[ColumnDescriptor],
) -> Result<()> {
    if columns.is_empty() {
        return Err(ProviderError::precondition(format!(
            "{} on table '{}' requires at least one column",
            operation, table
        )));
    }
    Ok(())
}

/// Reject columns flagged for default removal that have no default.
pub(crate) fn check_temporary_defaults(table: &str, columns: &[ColumnDescriptor]) -> Result<()> {
    if let Some(col) = columns
        .iter()
        .find(|c| c.drop_default_after_create && c.default_value.is_none())
    {
        return Err(ProviderError::precondition(format!(
            "column '{}' on table '{}' drops its default after create but has no default value",
            col.name, table
        )));
    }
    Ok(())
}

/// Quote each name and join with `sep`.
pub(crate) fn quote_list<S: AsRef<str>>(dialect: &dyn Dialect, names: &[S], sep: &str) -> String {
    names
        .iter()
        .map(|n| dialect.quote_ident(n.as_ref()))
        .collect::<Vec<_>>()
        .join(sep)
}

/// Column definition with an unnamed inline default:
/// `"name" type NOT NULL DEFAULT value`.
pub(crate) fn ansi_column_definition(
    dialect: &dyn Dialect,
    mapper: &dyn TypeMapper,
    col: &ColumnDescriptor,
) -> Result<String> {
    let mut def = format!(
        "{} {} {}",
        dialect.quote_ident(&col.name),
        mapper.map_column(col)?,
        nullability(col)
    );
    if let Some(ref value) = col.default_value {
        def.push(' ');
        def.push_str(&mapper.default_clause(col.logical_type, value));
    }
    Ok(def)
}

/// ANSI-layout `CREATE TABLE` body.
///
/// ```text
/// CREATE TABLE "Users" (
///     "Id" integer NOT NULL,
///     "Name" text NULL,
///     CONSTRAINT "PK_Users" PRIMARY KEY ("Id")
/// )<table_options>
/// ```
pub(crate) fn ansi_create_table(
    dialect: &dyn Dialect,
    mapper: &dyn TypeMapper,
    options: &FormatOptions,
    table: &str,
    columns: &[ColumnDescriptor],
    table_options: &str,
) -> Result<String> {
    require_columns("CREATE TABLE", table, columns)?;

    let mut lines = columns
        .iter()
        .map(|c| {
            ansi_column_definition(dialect, mapper, c).map(|def| format!("{}{}", options.indent, def))
        })
        .collect::<Result<Vec<_>>>()?;

    let pk_cols = primary_key_columns(columns);
    if !pk_cols.is_empty() {
        lines.push(format!(
            "{}CONSTRAINT {} PRIMARY KEY ({})",
            options.indent,
            dialect.quote_ident(&naming::primary_key_name(table)),
            quote_list(dialect, &pk_cols, ", ")
        ));
    }

    let nl = &options.newline;
    Ok(format!(
        "CREATE TABLE {} ({}{}{}){}",
        dialect.qualify_table(table),
        nl,
        lines.join(&format!(",{}", nl)),
        nl,
        table_options
    ))
}

/// ANSI-layout `ALTER TABLE ... ADD COLUMN` commands, one per column.
pub(crate) fn ansi_add_columns(
    dialect: &dyn Dialect,
    mapper: &dyn TypeMapper,
    table: &str,
    columns: &[ColumnDescriptor],
) -> Result<Vec<Command>> {
    columns
        .iter()
        .map(|c| {
            Ok(Command::new(format!(
                "ALTER TABLE {} ADD COLUMN {}",
                dialect.qualify_table(table),
                ansi_column_definition(dialect, mapper, c)?
            )))
        })
        .collect()
}

/// Insert a native existence clause after a leading `CREATE TABLE ` or
/// `DROP TABLE ` keyword pair.
pub(crate) fn native_table_guard(statement: &str, if_not_exists: bool) -> String {
    if if_not_exists {
        statement.replacen("CREATE TABLE ", "CREATE TABLE IF NOT EXISTS ", 1)
    } else {
        statement.replacen("DROP TABLE ", "DROP TABLE IF EXISTS ", 1)
    }
}
