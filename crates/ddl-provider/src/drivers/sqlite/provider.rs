//! SQLite provider.

use crate::core::command::CommandSequence;
use crate::core::naming;
use crate::core::options::FormatOptions;
use crate::core::schema::{ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor};
use crate::core::traits::{Dialect, Guard, Provider};
use crate::dialect::SqliteTypeMapper;
use crate::drivers::common::{
    ansi_add_columns, ansi_create_table, check_temporary_defaults, quote_list, require_columns,
};
use crate::error::{ProviderError, Result};

use super::SqliteDialect;

/// SQLite provider.
///
/// Defaults and foreign keys are part of the table definition in SQLite and
/// cannot be changed with `ALTER TABLE`. Operations that need this return
/// [`ProviderError::UnsupportedOperation`]. A column added to an existing
/// table must be nullable or carry a default.
#[derive(Debug, Clone, Default)]
pub struct SqliteProvider {
    dialect: SqliteDialect,
    types: SqliteTypeMapper,
}

impl SqliteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            dialect: SqliteDialect::with_options(options),
            types: SqliteTypeMapper::new(),
        }
    }

    fn alter_table(&self, table: &str) -> String {
        format!("ALTER TABLE {}", self.dialect.qualify_table(table))
    }

    fn unsupported(&self, operation: &str) -> ProviderError {
        ProviderError::unsupported_operation(self.name(), operation)
    }
}

impl Provider for SqliteProvider {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn create_table(
        &self,
        table: &str,
        columns: &[ColumnDescriptor],
        only_if_not_exists: bool,
    ) -> Result<CommandSequence> {
        let mut sql = ansi_create_table(
            &self.dialect,
            &self.types,
            self.dialect.options(),
            table,
            columns,
            "",
        )?;
        if only_if_not_exists {
            sql = self.dialect.guard_table(table, Guard::IfNotExists, &sql);
        }
        Ok(CommandSequence::single(sql))
    }

    fn add_columns(&self, table: &str, columns: &[ColumnDescriptor]) -> Result<CommandSequence> {
        require_columns("ADD COLUMN", table, columns)?;
        check_temporary_defaults(table, columns)?;
        if columns.iter().any(|c| c.drop_default_after_create) {
            return Err(self.unsupported("drop default after create"));
        }
        if let Some(col) = columns
            .iter()
            .find(|c| !c.is_nullable && c.default_value.is_none())
        {
            return Err(ProviderError::precondition(format!(
                "NOT NULL column '{}' added to table '{}' needs a default value",
                col.name, table
            )));
        }
        Ok(CommandSequence::new(ansi_add_columns(
            &self.dialect,
            &self.types,
            table,
            columns,
        )?))
    }

    // SQLite keeps the renamed table in its database, so the new name is bare.
    fn rename_table(&self, old_name: &str, new_name: &str) -> Result<CommandSequence> {
        Ok(CommandSequence::single(format!(
            "{} RENAME TO {}",
            self.alter_table(old_name),
            self.dialect.quote_ident(new_name)
        )))
    }

    fn rename_column(
        &self,
        table: &str,
        old_name: &str,
        new_name: &str,
    ) -> Result<CommandSequence> {
        Ok(CommandSequence::single(format!(
            "{} RENAME COLUMN {} TO {}",
            self.alter_table(table),
            self.dialect.quote_ident(old_name),
            self.dialect.quote_ident(new_name)
        )))
    }

    fn drop_default_constraint(&self, _table: &str, _column: &str) -> Result<CommandSequence> {
        Err(self.unsupported("drop default constraint"))
    }

    fn drop_table(&self, table: &str, only_if_exists: bool) -> Result<CommandSequence> {
        let mut sql = format!("DROP TABLE {}", self.dialect.qualify_table(table));
        if only_if_exists {
            sql = self.dialect.guard_table(table, Guard::IfExists, &sql);
        }
        Ok(CommandSequence::single(sql))
    }

    fn drop_column(&self, table: &str, column: &str) -> Result<CommandSequence> {
        Ok(CommandSequence::single(format!(
            "{} DROP COLUMN {}",
            self.alter_table(table),
            self.dialect.quote_ident(column)
        )))
    }

    fn add_foreign_key(&self, _fk: &ForeignKeyDescriptor) -> Result<CommandSequence> {
        Err(self.unsupported("add foreign key"))
    }

    fn drop_foreign_key(&self, _table: &str, _name: &str) -> Result<CommandSequence> {
        Err(self.unsupported("drop foreign key"))
    }

    // The index name carries the database qualifier; the indexed table may not.
    fn add_index(&self, index: &IndexDescriptor) -> Result<CommandSequence> {
        index.validate()?;
        let name = index
            .name
            .clone()
            .unwrap_or_else(|| naming::index_name(&index.table, &index.columns, index.is_unique));
        let unique = if index.is_unique { "UNIQUE " } else { "" };
        Ok(CommandSequence::single(format!(
            "CREATE {}INDEX {} ON {} ({})",
            unique,
            self.dialect.qualify_table(&name),
            self.dialect.quote_ident(&index.table),
            quote_list(&self.dialect, &index.columns, ", ")
        )))
    }

    fn drop_index(&self, _table: &str, name: &str) -> Result<CommandSequence> {
        Ok(CommandSequence::single(format!(
            "DROP INDEX {}",
            self.dialect.qualify_table(name)
        )))
    }
}
