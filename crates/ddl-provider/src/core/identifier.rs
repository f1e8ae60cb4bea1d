//! Identifier and literal quoting shared by all engines.
//!
//! SQL identifiers (table, column, constraint names) cannot be bound as
//! statement parameters, so every provider splices them into DDL text. The
//! escaping policy is the same everywhere: wrap the name in the engine's
//! quote characters and double any embedded closing quote. Quoting never
//! fails, and an identifier that already contains quote characters round-trips
//! as the same logical name.
//!
//! | Engine     | Quote      | Embedded      |
//! |------------|------------|---------------|
//! | SQL Server | `[name]`   | `]` → `]]`    |
//! | PostgreSQL | `"name"`   | `"` → `""`    |
//! | SQLite     | `"name"`   | `"` → `""`    |
//! | MySQL      | `` `name` `` | `` ` `` → ``` `` ``` |
//!
//! Reserved words and length limits are not checked.

/// Quote a SQL Server identifier using brackets.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(quote_mssql("users"), "[users]");
/// assert_eq!(quote_mssql("table]name"), "[table]]name]");
/// ```
pub fn quote_mssql(name: &str) -> String {
    format!("[{}]", name.replace(']', "]]"))
}

/// Quote a PostgreSQL (or SQLite) identifier using double quotes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(quote_pg("users"), "\"users\"");
/// assert_eq!(quote_pg("table\"name"), "\"table\"\"name\"");
/// ```
pub fn quote_pg(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quote a MySQL identifier using backticks.
pub fn quote_mysql(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Quote a string literal with single quotes, doubling embedded quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Quote a SQL Server Unicode string literal (`N'...'`).
pub fn quote_mssql_literal(value: &str) -> String {
    format!("N{}", quote_literal(value))
}
