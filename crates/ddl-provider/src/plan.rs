//! Serializable migration plans.
//!
//! A [`MigrationPlan`] is an ordered list of provider operations that can be
//! loaded from YAML and rendered against any engine:
//!
//! ```yaml
//! name: add-users
//! steps:
//!   - op: create_table
//!     table: Users
//!     if_not_exists: true
//!     columns:
//!       - { name: Id, type: Int32, is_primary_key: true }
//!       - { name: Name, type: String, is_nullable: true }
//!   - op: rename_column
//!     table: Users
//!     from: Name
//!     to: FullName
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::command::{Command, CommandSequence};
use crate::core::schema::{ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor, TableDescriptor};
use crate::core::traits::Provider;
use crate::error::Result;

/// One provider operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MigrationStep {
    CreateTable {
        table: String,
        columns: Vec<ColumnDescriptor>,
        #[serde(default)]
        if_not_exists: bool,
    },
    AddColumns {
        table: String,
        columns: Vec<ColumnDescriptor>,
    },
    RenameTable {
        from: String,
        to: String,
    },
    RenameColumn {
        table: String,
        from: String,
        to: String,
    },
    DropDefaultConstraint {
        table: String,
        column: String,
    },
    DropTable {
        table: String,
        #[serde(default)]
        if_exists: bool,
    },
    DropColumn {
        table: String,
        column: String,
    },
    AddForeignKey(ForeignKeyDescriptor),
    DropForeignKey {
        table: String,
        name: String,
    },
    AddIndex(IndexDescriptor),
    DropIndex {
        table: String,
        name: String,
    },
}

impl MigrationStep {
    /// Commands for this step on `provider`.
    pub fn commands(&self, provider: &dyn Provider) -> Result<CommandSequence> {
        match self {
            MigrationStep::CreateTable {
                table,
                columns,
                if_not_exists,
            } => {
                // Duplicate column names are only caught on the descriptor.
                let descriptor = TableDescriptor::new(table.clone(), columns.clone())?;
                provider.create_table_from(&descriptor, *if_not_exists)
            }
            MigrationStep::AddColumns { table, columns } => provider.add_columns(table, columns),
            MigrationStep::RenameTable { from, to } => provider.rename_table(from, to),
            MigrationStep::RenameColumn { table, from, to } => {
                provider.rename_column(table, from, to)
            }
            MigrationStep::DropDefaultConstraint { table, column } => {
                provider.drop_default_constraint(table, column)
            }
            MigrationStep::DropTable { table, if_exists } => provider.drop_table(table, *if_exists),
            MigrationStep::DropColumn { table, column } => provider.drop_column(table, column),
            MigrationStep::AddForeignKey(fk) => provider.add_foreign_key(fk),
            MigrationStep::DropForeignKey { table, name } => provider.drop_foreign_key(table, name),
            MigrationStep::AddIndex(index) => provider.add_index(index),
            MigrationStep::DropIndex { table, name } => provider.drop_index(table, name),
        }
    }

    /// Short human-readable description, used in logs.
    pub fn describe(&self) -> String {
        match self {
            MigrationStep::CreateTable { table, .. } => format!("create table {}", table),
            MigrationStep::AddColumns { table, columns } => {
                format!("add {} column(s) to {}", columns.len(), table)
            }
            MigrationStep::RenameTable { from, to } => format!("rename table {} to {}", from, to),
            MigrationStep::RenameColumn { table, from, to } => {
                format!("rename column {}.{} to {}", table, from, to)
            }
            MigrationStep::DropDefaultConstraint { table, column } => {
                format!("drop default of {}.{}", table, column)
            }
            MigrationStep::DropTable { table, .. } => format!("drop table {}", table),
            MigrationStep::DropColumn { table, column } => {
                format!("drop column {}.{}", table, column)
            }
            MigrationStep::AddForeignKey(fk) => {
                format!("add foreign key {} -> {}", fk.table, fk.referenced_table)
            }
            MigrationStep::DropForeignKey { table, name } => {
                format!("drop foreign key {} on {}", name, table)
            }
            MigrationStep::AddIndex(index) => format!("add index on {}", index.table),
            MigrationStep::DropIndex { table, name } => format!("drop index {} on {}", name, table),
        }
    }
}

/// A named, ordered list of migration steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationPlan {
    /// Plan name.
    pub name: String,

    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Steps in execution order.
    #[serde(default)]
    pub steps: Vec<MigrationStep>,
}

impl MigrationPlan {
    /// Load a plan from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading migration plan from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a plan from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Render every step on `provider`, in order.
    ///
    /// Rendering is all-or-nothing: if any step fails, no commands are
    /// returned.
    pub fn render(&self, provider: &dyn Provider) -> Result<Vec<Command>> {
        info!(
            "Rendering plan '{}' ({} steps) for {}",
            self.name,
            self.steps.len(),
            provider.name()
        );

        let mut commands = Vec::new();
        for (i, step) in self.steps.iter().enumerate() {
            let produced = step.commands(provider).map_err(|e| {
                warn!("Step {} ({}) failed: {}", i + 1, step.describe(), e);
                e
            })?;
            let before = commands.len();
            commands.extend(produced);
            debug!(
                "Step {} ({}): {} command(s)",
                i + 1,
                step.describe(),
                commands.len() - before
            );
        }
        Ok(commands)
    }
}

/// Join commands into a script.
///
/// A separator made only of punctuation (`;`) terminates each command in
/// place; any other separator (`GO`) goes on a line of its own.
pub fn render_script(commands: &[Command], separator: &str, newline: &str) -> String {
    let inline = separator.chars().all(|c| !c.is_alphanumeric());
    let mut script = String::new();
    for command in commands {
        let text = command.as_str().trim_end_matches(['\r', '\n']);
        script.push_str(text);
        if inline {
            script.push_str(separator);
        } else {
            script.push_str(newline);
            script.push_str(separator);
        }
        script.push_str(newline);
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::LogicalType;
    use crate::drivers::ProviderImpl;
    use crate::error::ProviderError;

    const PLAN: &str = r#"
name: users
description: create and evolve the users table
steps:
  - op: create_table
    table: Users
    if_not_exists: true
    columns:
      - { name: Id, type: Int32, is_primary_key: true }
      - { name: Name, type: String, is_nullable: true }
  - op: add_columns
    table: Users
    columns:
      - { name: Active, type: Boolean, default_value: "1", drop_default_after_create: true }
  - op: rename_column
    table: Users
    from: Name
    to: FullName
  - op: add_index
    table: Users
    columns: [FullName]
"#;

    #[test]
    fn test_plan_from_yaml() {
        let plan = MigrationPlan::from_yaml(PLAN).unwrap();
        assert_eq!(plan.name, "users");
        assert_eq!(plan.steps.len(), 4);
        match &plan.steps[1] {
            MigrationStep::AddColumns { table, columns } => {
                assert_eq!(table, "Users");
                assert_eq!(columns[0].logical_type, LogicalType::Boolean);
                assert!(columns[0].drop_default_after_create);
            }
            other => panic!("unexpected step {:?}", other),
        }
        assert!(matches!(&plan.steps[3], MigrationStep::AddIndex(idx) if !idx.is_unique));
    }

    #[test]
    fn test_render_mssql() {
        let plan = MigrationPlan::from_yaml(PLAN).unwrap();
        let provider = ProviderImpl::from_db_type("mssql").unwrap();
        let commands = plan.render(&provider).unwrap();

        assert_eq!(commands.len(), 5);
        assert!(commands[0].as_str().starts_with("IF NOT EXISTS"));
        assert_eq!(
            commands[1].as_str(),
            "ALTER TABLE [dbo].[Users] ADD [Active] [bit] NOT NULL CONSTRAINT [DF_Users_Active] DEFAULT 1"
        );
        assert_eq!(
            commands[2].as_str(),
            "ALTER TABLE [dbo].[Users] DROP CONSTRAINT [DF_Users_Active]"
        );
        assert!(commands[3].as_str().contains("@newname=N'FullName'"));
        assert_eq!(
            commands[4].as_str(),
            "CREATE NONCLUSTERED INDEX [IX_Users_FullName] ON [dbo].[Users] ([FullName])"
        );
    }

    #[test]
    fn test_render_is_all_or_nothing() {
        // SQLite cannot drop a default after the column exists.
        let plan = MigrationPlan::from_yaml(PLAN).unwrap();
        let provider = ProviderImpl::from_db_type("sqlite").unwrap();
        let err = plan.render(&provider).unwrap_err();
        assert!(matches!(err, ProviderError::UnsupportedOperation { .. }));
    }

    #[test]
    fn test_render_rejects_duplicate_columns() {
        let plan = MigrationPlan {
            name: "dup".into(),
            description: None,
            steps: vec![MigrationStep::CreateTable {
                table: "T".into(),
                columns: vec![
                    ColumnDescriptor::new("A", LogicalType::Int32),
                    ColumnDescriptor::new("A", LogicalType::Int32),
                ],
                if_not_exists: false,
            }],
        };
        let provider = ProviderImpl::from_db_type("postgres").unwrap();
        let err = plan.render(&provider).unwrap_err();
        assert!(matches!(err, ProviderError::Precondition(_)));
    }

    #[test]
    fn test_unknown_op_is_yaml_error() {
        let err = MigrationPlan::from_yaml("name: x\nsteps:\n  - op: truncate\n    table: T\n")
            .unwrap_err();
        assert!(matches!(err, ProviderError::Yaml(_)));
    }

    #[test]
    fn test_render_script_go_separator() {
        let commands = vec![Command::new("CREATE TABLE [T](\n)\n"), Command::new("DROP TABLE [T]")];
        assert_eq!(
            render_script(&commands, "GO", "\n"),
            "CREATE TABLE [T](\n)\nGO\nDROP TABLE [T]\nGO\n"
        );
    }

    #[test]
    fn test_render_script_semicolon_separator() {
        let commands = vec![Command::new("DROP TABLE \"a\""), Command::new("DROP TABLE \"b\"")];
        assert_eq!(
            render_script(&commands, ";", "\n"),
            "DROP TABLE \"a\";\nDROP TABLE \"b\";\n"
        );
    }
}
