//! Per-provider formatting options.

/// Formatting values a provider renders with.
///
/// Each provider owns its own copy, so engines with different conventions can
/// be used side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Schema prefixed to table names (`[dbo].[Users]`). `None` leaves names unqualified.
    pub schema: Option<String>,

    /// Indentation for column lines inside `CREATE TABLE`.
    pub indent: String,

    /// Line separator inside multi-line commands.
    pub newline: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            schema: None,
            indent: "\t".to_string(),
            newline: "\n".to_string(),
        }
    }
}

impl FormatOptions {
    /// Options with a schema qualifier.
    pub fn with_schema(schema: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            ..Self::default()
        }
    }
}
