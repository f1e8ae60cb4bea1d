//! MySQL/MariaDB provider.

use crate::core::command::{Command, CommandSequence};
use crate::core::naming;
use crate::core::options::FormatOptions;
use crate::core::schema::{ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor};
use crate::core::traits::{Dialect, Guard, Provider};
use crate::dialect::MysqlTypeMapper;
use crate::drivers::common::{
    ansi_add_columns, ansi_create_table, check_temporary_defaults, quote_list, require_columns,
};
use crate::error::Result;

use super::MysqlDialect;

/// Storage engine clause appended to every `CREATE TABLE`.
const TABLE_OPTIONS: &str = " ENGINE=InnoDB";

/// MySQL/MariaDB provider.
#[derive(Debug, Clone, Default)]
pub struct MysqlProvider {
    dialect: MysqlDialect,
    types: MysqlTypeMapper,
}

impl MysqlProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            dialect: MysqlDialect::with_options(options),
            types: MysqlTypeMapper::new(),
        }
    }

    fn alter_table(&self, table: &str) -> String {
        format!("ALTER TABLE {}", self.dialect.qualify_table(table))
    }
}

impl Provider for MysqlProvider {
    fn name(&self) -> &str {
        "mysql"
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
            TABLE_OPTIONS,
        )?;
        if only_if_not_exists {
            sql = self.dialect.guard_table(table, Guard::IfNotExists, &sql);
        }
        Ok(CommandSequence::single(sql))
    }

    fn add_columns(&self, table: &str, columns: &[ColumnDescriptor]) -> Result<CommandSequence> {
        require_columns("ADD COLUMN", table, columns)?;
        check_temporary_defaults(table, columns)?;

        let mut commands: Vec<Command> =
            ansi_add_columns(&self.dialect, &self.types, table, columns)?;
        for col in columns.iter().filter(|c| c.drop_default_after_create) {
            commands.extend(self.drop_default_constraint(table, &col.name)?);
        }
        Ok(CommandSequence::new(commands))
    }

    fn rename_table(&self, old_name: &str, new_name: &str) -> Result<CommandSequence> {
        Ok(CommandSequence::single(format!(
            "RENAME TABLE {} TO {}",
            self.dialect.qualify_table(old_name),
            self.dialect.qualify_table(new_name)
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

    fn drop_default_constraint(&self, table: &str, column: &str) -> Result<CommandSequence> {
        Ok(CommandSequence::single(format!(
            "{} ALTER COLUMN {} DROP DEFAULT",
            self.alter_table(table),
            self.dialect.quote_ident(column)
        )))
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

    fn add_foreign_key(&self, fk: &ForeignKeyDescriptor) -> Result<CommandSequence> {
        fk.validate()?;
        let name = fk
            .name
            .clone()
            .unwrap_or_else(|| naming::foreign_key_name(&fk.table, &fk.referenced_table));
        Ok(CommandSequence::single(format!(
            "{} ADD CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
            self.alter_table(&fk.table),
            self.dialect.quote_ident(&name),
            quote_list(&self.dialect, &fk.columns, ", "),
            self.dialect.qualify_table(&fk.referenced_table),
            quote_list(&self.dialect, &fk.referenced_columns, ", ")
        )))
    }

    fn drop_foreign_key(&self, table: &str, name: &str) -> Result<CommandSequence> {
        Ok(CommandSequence::single(format!(
            "{} DROP FOREIGN KEY {}",
            self.alter_table(table),
            self.dialect.quote_ident(name)
        )))
    }

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
            self.dialect.quote_ident(&name),
            self.dialect.qualify_table(&index.table),
            quote_list(&self.dialect, &index.columns, ", ")
        )))
    }

    fn drop_index(&self, table: &str, name: &str) -> Result<CommandSequence> {
        Ok(CommandSequence::single(format!(
            "DROP INDEX {} ON {}",
            self.dialect.quote_ident(name),
            self.dialect.qualify_table(table)
        )))
    }
}
