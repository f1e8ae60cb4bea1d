//! Core traits for engine-specific DDL generation.
//!
//! This module defines the primary abstractions used by the providers:
//!
//! - [`Dialect`]: identifier quoting, table qualification and existence guards
//! - [`TypeMapper`]: logical type → engine type token
//! - [`Provider`]: the schema-operation capability set every engine implements
//!
//! # Design Patterns
//!
//! - **Strategy**: `Dialect` and `TypeMapper` provide interchangeable syntax rules
//! - **Template Method**: `Provider::create_table_from` and
//!   `TypeMapper::map_column` define skeletons on top of the required methods

use crate::dialect::LogicalType;
use crate::error::{ProviderError, Result};

use super::command::CommandSequence;
use super::schema::{ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor, TableDescriptor};

/// Existence condition attached to a guarded statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Run only when the object does not exist yet (creates).
    IfNotExists,
    /// Run only when the object exists (drops).
    IfExists,
}

/// SQL syntax strategy for a database engine.
///
/// Implementations hold their formatting configuration (schema, indentation)
/// as plain values; there is no process-wide formatting state.
pub trait Dialect: Send + Sync {
    /// Get the dialect identifier (e.g., "mssql", "postgres").
    fn name(&self) -> &str;

    /// Quote an identifier (table name, column name, constraint name).
    ///
    /// - MSSQL: `[identifier]`
    /// - PostgreSQL/SQLite: `"identifier"`
    /// - MySQL: `` `identifier` ``
    fn quote_ident(&self, name: &str) -> String;

    /// Quote a table name, prefixed with the configured schema if any.
    fn qualify_table(&self, table: &str) -> String;

    /// Wrap a statement on `table` in an existence guard.
    ///
    /// The returned text is a single command that contains `statement`.
    fn guard_table(&self, table: &str, guard: Guard, statement: &str) -> String;
}

/// Maps logical column types onto one engine's type tokens.
///
/// Mappings are exhaustive: every [`LogicalType`] either has exactly one
/// token or yields [`ProviderError::UnsupportedType`].
pub trait TypeMapper: Send + Sync {
    /// Get the dialect name this mapper produces tokens for.
    fn dialect_name(&self) -> &str;

    /// Map a logical type to the engine's type token.
    ///
    /// `length` is interpolated for fixed-length strings and is the precision
    /// of decimals; `scale` only applies to decimals.
    fn map_type(
        &self,
        logical_type: LogicalType,
        length: Option<u32>,
        scale: Option<u32>,
    ) -> Result<String>;

    /// Map a column descriptor to the engine's type token.
    fn map_column(&self, col: &ColumnDescriptor) -> Result<String> {
        if col.logical_type.requires_length() && col.length.is_none() {
            return Err(ProviderError::precondition(format!(
                "column '{}' of type {} requires a length",
                col.name, col.logical_type
            )));
        }
        self.map_type(col.logical_type, col.length, col.scale)
    }

    /// Inline `DEFAULT` clause for a column of `logical_type`.
    fn default_clause(&self, _logical_type: LogicalType, literal: &str) -> String {
        format!("DEFAULT {}", literal)
    }
}

/// Length of a fixed-length type, or a precondition error when missing.
pub(crate) fn require_length(logical_type: LogicalType, length: Option<u32>) -> Result<u32> {
    length.ok_or_else(|| {
        ProviderError::precondition(format!("type {} requires a length", logical_type))
    })
}

/// Schema-operation capability set implemented by every engine.
///
/// Each operation returns the commands to execute, in order. Inputs are
/// never mutated, and no operation touches a database.
pub trait Provider: Send + Sync {
    /// Get the engine identifier (e.g., "mssql", "postgres").
    fn name(&self) -> &str;

    /// Create a table with the given columns.
    ///
    /// Primary key columns form one composite `PK_<table>` constraint in
    /// declaration order. With `only_if_not_exists` the statement is wrapped
    /// in an existence guard within the same command.
    fn create_table(
        &self,
        table: &str,
        columns: &[ColumnDescriptor],
        only_if_not_exists: bool,
    ) -> Result<CommandSequence>;

    /// Add columns to an existing table.
    ///
    /// Emits one `ALTER TABLE ... ADD` per column, then one drop-default
    /// command per column flagged `drop_default_after_create`.
    ///
    /// # Errors
    ///
    /// Returns a precondition violation if `columns` is empty.
    fn add_columns(&self, table: &str, columns: &[ColumnDescriptor]) -> Result<CommandSequence>;

    /// Rename a table.
    fn rename_table(&self, old_name: &str, new_name: &str) -> Result<CommandSequence>;

    /// Rename a column of a table.
    fn rename_column(&self, table: &str, old_name: &str, new_name: &str)
        -> Result<CommandSequence>;

    /// Drop the default of a column, as created by `add_columns`.
    fn drop_default_constraint(&self, table: &str, column: &str) -> Result<CommandSequence>;

    /// Drop a table, optionally only if it exists.
    fn drop_table(&self, table: &str, only_if_exists: bool) -> Result<CommandSequence>;

    /// Drop a column of a table.
    fn drop_column(&self, table: &str, column: &str) -> Result<CommandSequence>;

    /// Add a foreign key constraint.
    fn add_foreign_key(&self, fk: &ForeignKeyDescriptor) -> Result<CommandSequence>;

    /// Drop a foreign key constraint by name.
    fn drop_foreign_key(&self, table: &str, name: &str) -> Result<CommandSequence>;

    /// Create an index.
    fn add_index(&self, index: &IndexDescriptor) -> Result<CommandSequence>;

    /// Drop an index by name.
    fn drop_index(&self, table: &str, name: &str) -> Result<CommandSequence>;

    /// Create a table from a descriptor.
    fn create_table_from(
        &self,
        table: &TableDescriptor,
        only_if_not_exists: bool,
    ) -> Result<CommandSequence> {
        self.create_table(&table.name, &table.columns, only_if_not_exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedMapper;

    impl TypeMapper for FixedMapper {
        fn dialect_name(&self) -> &str {
            "fixed"
        }

        fn map_type(
            &self,
            logical_type: LogicalType,
            length: Option<u32>,
            _scale: Option<u32>,
        ) -> Result<String> {
            match logical_type {
                LogicalType::FixedString => Ok(format!(
                    "CHAR({})",
                    require_length(logical_type, length)?
                )),
                LogicalType::Int32 => Ok("INT".to_string()),
                other => Err(ProviderError::unsupported_type("fixed", other)),
            }
        }
    }

    #[test]
    fn test_map_column_requires_length() {
        let col = ColumnDescriptor::new("Code", LogicalType::FixedString);
        let err = FixedMapper.map_column(&col).unwrap_err();
        assert!(matches!(err, ProviderError::Precondition(_)));
        assert!(err.to_string().contains("column 'Code'"));
    }

    #[test]
    fn test_map_column_delegates_to_map_type() {
        let col = ColumnDescriptor::new("Code", LogicalType::FixedString).length(3);
        assert_eq!(FixedMapper.map_column(&col).unwrap(), "CHAR(3)");
    }

    #[test]
    fn test_map_type_unsupported() {
        let err = FixedMapper.map_type(LogicalType::Xml, None, None).unwrap_err();
        assert!(matches!(err, ProviderError::UnsupportedType { .. }));
    }
}
