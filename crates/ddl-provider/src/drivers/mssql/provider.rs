//! MSSQL provider: schema operations rendered as T-SQL.

use crate::core::command::{Command, CommandSequence};
use crate::core::identifier::quote_mssql_literal;
use crate::core::naming;
use crate::core::options::FormatOptions;
use crate::core::schema::{primary_key_columns, ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor};
use crate::core::traits::{Dialect, Guard, Provider, TypeMapper};
use crate::dialect::MssqlTypeMapper;
use crate::drivers::common::{check_temporary_defaults, nullability, quote_list, require_columns};
use crate::error::Result;

use super::MssqlDialect;

/// Microsoft SQL Server provider.
///
/// Tables are qualified with the configured schema (`[dbo]` by default).
/// Defaults are created as named constraints (`DF_<table>_<column>`) so
/// they can be dropped again by name.
#[derive(Debug, Clone, Default)]
pub struct MssqlProvider {
    dialect: MssqlDialect,
    types: MssqlTypeMapper,
}

impl MssqlProvider {
    /// Create a provider with the default `[dbo]` schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with explicit formatting options.
    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            dialect: MssqlDialect::with_options(options),
            types: MssqlTypeMapper::new(),
        }
    }

    fn options(&self) -> &FormatOptions {
        self.dialect.options()
    }

    fn alter_table(&self, table: &str) -> String {
        format!("ALTER TABLE {}", self.dialect.qualify_table(table))
    }

    /// Quoted default constraint name shared by the add and drop paths.
    fn default_constraint(&self, table: &str, column: &str) -> String {
        self.dialect
            .quote_ident(&naming::default_constraint_name(table, column))
    }

    /// `[name] [type] NOT NULL[ CONSTRAINT [DF_t_c] DEFAULT value]`
    fn column_definition(&self, table: &str, col: &ColumnDescriptor) -> Result<String> {
        let mut def = format!(
            "{} {} {}",
            self.dialect.quote_ident(&col.name),
            self.types.map_column(col)?,
            nullability(col)
        );
        if let Some(ref value) = col.default_value {
            def.push_str(&format!(
                " CONSTRAINT {} DEFAULT {}",
                self.default_constraint(table, &col.name),
                value
            ));
        }
        Ok(def)
    }
}

impl Provider for MssqlProvider {
    fn name(&self) -> &str {
        "mssql"
    }

    fn create_table(
        &self,
        table: &str,
        columns: &[ColumnDescriptor],
        only_if_not_exists: bool,
    ) -> Result<CommandSequence> {
        require_columns("CREATE TABLE", table, columns)?;

        let nl = &self.options().newline;
        let indent = &self.options().indent;

        let col_defs = columns
            .iter()
            .map(|c| {
                self.column_definition(table, c)
                    .map(|def| format!("{}{}", indent, def))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut sql = format!("CREATE TABLE {}({}", self.dialect.qualify_table(table), nl);
        sql.push_str(&col_defs.join(&format!(",{}", nl)));

        let pk_cols = primary_key_columns(columns);
        if !pk_cols.is_empty() {
            let pk_lines = pk_cols
                .iter()
                .map(|c| format!("{}{}", indent, self.dialect.quote_ident(c)))
                .collect::<Vec<_>>();
            sql.push_str(&format!(
                ",{} CONSTRAINT {} PRIMARY KEY {}({}{}{})WITH (IGNORE_DUP_KEY = OFF)",
                nl,
                self.dialect.quote_ident(&naming::primary_key_name(table)),
                nl,
                nl,
                pk_lines.join(&format!(",{}", nl)),
                nl
            ));
        }

        sql.push_str(nl);
        sql.push(')');
        sql.push_str(nl);

        if only_if_not_exists {
            sql = self.dialect.guard_table(table, Guard::IfNotExists, &sql);
        }
        Ok(CommandSequence::single(sql))
    }

    fn add_columns(&self, table: &str, columns: &[ColumnDescriptor]) -> Result<CommandSequence> {
        require_columns("ADD", table, columns)?;
        check_temporary_defaults(table, columns)?;

        let mut commands = columns
            .iter()
            .map(|c| {
                Ok(Command::new(format!(
                    "{} ADD {}",
                    self.alter_table(table),
                    self.column_definition(table, c)?
                )))
            })
            .collect::<Result<Vec<_>>>()?;

        // Defaults that only seed existing rows go once every column is in place.
        for col in columns.iter().filter(|c| c.drop_default_after_create) {
            commands.extend(self.drop_default_constraint(table, &col.name)?);
        }
        Ok(CommandSequence::new(commands))
    }

    fn rename_table(&self, old_name: &str, new_name: &str) -> Result<CommandSequence> {
        Ok(CommandSequence::single(format!(
            "EXEC dbo.sp_rename @objname = {}, @newname = {}, @objtype = N'OBJECT'",
            quote_mssql_literal(&self.dialect.qualify_table(old_name)),
            quote_mssql_literal(new_name)
        )))
    }

    fn rename_column(
        &self,
        table: &str,
        old_name: &str,
        new_name: &str,
    ) -> Result<CommandSequence> {
        let object = format!(
            "{}.{}",
            self.dialect.qualify_table(table),
            self.dialect.quote_ident(old_name)
        );
        Ok(CommandSequence::single(format!(
            "EXEC dbo.sp_rename @objname={}, @newname={}, @objtype=N'COLUMN'",
            quote_mssql_literal(&object),
            quote_mssql_literal(new_name)
        )))
    }

    fn drop_default_constraint(&self, table: &str, column: &str) -> Result<CommandSequence> {
        Ok(CommandSequence::single(format!(
            "{} DROP CONSTRAINT {}",
            self.alter_table(table),
            self.default_constraint(table, column)
        )))
    }

    fn drop_table(&self, table: &str, only_if_exists: bool) -> Result<CommandSequence> {
        let sql = format!("DROP TABLE {}", self.dialect.qualify_table(table));
        if only_if_exists {
            return Ok(CommandSequence::single(self.dialect.guard_table(
                table,
                Guard::IfExists,
                &sql,
            )));
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
            "{} DROP CONSTRAINT {}",
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
            "CREATE {}NONCLUSTERED INDEX {} ON {} ({})",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::LogicalType;
    use crate::error::ProviderError;

    fn users_columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("Id", LogicalType::Int32).primary_key(),
            ColumnDescriptor::new("Name", LogicalType::String).nullable(),
        ]
    }

    #[test]
    fn test_create_table_with_primary_key() {
        let provider = MssqlProvider::new();
        let commands = provider
            .create_table("Users", &users_columns(), false)
            .unwrap()
            .into_strings();

        assert_eq!(commands.len(), 1);
        assert_eq!(
            commands[0],
            "CREATE TABLE [dbo].[Users](\n\
             \t[Id] [int] NOT NULL,\n\
             \t[Name] [nvarchar](max) NULL,\n \
             CONSTRAINT [PK_Users] PRIMARY KEY \n\
             (\n\
             \t[Id]\n\
             )WITH (IGNORE_DUP_KEY = OFF)\n\
             )\n"
        );
    }

    #[test]
    fn test_create_table_without_primary_key() {
        let provider = MssqlProvider::new();
        let columns = vec![ColumnDescriptor::new("Payload", LogicalType::Xml).nullable()];
        let sql = provider
            .create_table("Log", &columns, false)
            .unwrap()
            .into_strings()
            .remove(0);

        assert_eq!(sql, "CREATE TABLE [dbo].[Log](\n\t[Payload] [xml] NULL\n)\n");
        assert!(!sql.contains("PRIMARY KEY"));
        assert!(!sql.contains("CONSTRAINT"));
    }

    #[test]
    fn test_create_table_composite_key_in_declaration_order() {
        let provider = MssqlProvider::new();
        let columns = vec![
            ColumnDescriptor::new("OrderId", LogicalType::Int64).primary_key(),
            ColumnDescriptor::new("Amount", LogicalType::Currency),
            ColumnDescriptor::new("LineNo", LogicalType::Int16).primary_key(),
        ];
        let sql = provider
            .create_table("OrderLines", &columns, false)
            .unwrap()
            .into_strings()
            .remove(0);

        assert_eq!(sql.matches("PRIMARY KEY").count(), 1);
        assert!(sql.contains("CONSTRAINT [PK_OrderLines] PRIMARY KEY \n(\n\t[OrderId],\n\t[LineNo]\n)"));
    }

    #[test]
    fn test_create_table_guard_wraps_unguarded_body() {
        let provider = MssqlProvider::new();
        let plain = provider
            .create_table("Users", &users_columns(), false)
            .unwrap()
            .into_strings()
            .remove(0);
        let guarded = provider
            .create_table("Users", &users_columns(), true)
            .unwrap()
            .into_strings();

        assert_eq!(guarded.len(), 1);
        let prefix = "IF NOT EXISTS (SELECT * FROM sys.objects WHERE object_id = OBJECT_ID(N'[dbo].[Users]') AND type in (N'U'))\nBEGIN\n";
        assert_eq!(guarded[0], format!("{}{}END", prefix, plain));
    }

    #[test]
    fn test_create_table_unsupported_type_fails() {
        let provider = MssqlProvider::new();
        let columns = vec![ColumnDescriptor::new("Blob", LogicalType::Object)];
        let err = provider.create_table("T", &columns, false).unwrap_err();
        assert!(matches!(err, ProviderError::UnsupportedType { .. }));
    }

    #[test]
    fn test_create_table_respects_format_options() {
        let provider = MssqlProvider::with_options(FormatOptions {
            schema: Some("sales".to_string()),
            indent: "    ".to_string(),
            newline: "\r\n".to_string(),
        });
        let columns = vec![ColumnDescriptor::new("Id", LogicalType::Int32)];
        let sql = provider
            .create_table("Orders", &columns, false)
            .unwrap()
            .into_strings()
            .remove(0);
        assert_eq!(sql, "CREATE TABLE [sales].[Orders](\r\n    [Id] [int] NOT NULL\r\n)\r\n");
    }

    #[test]
    fn test_add_columns_one_statement_per_column() {
        let provider = MssqlProvider::new();
        let columns = vec![
            ColumnDescriptor::new("Age", LogicalType::Int32).nullable(),
            ColumnDescriptor::new("Code", LogicalType::FixedString).length(10),
        ];
        let commands = provider.add_columns("Users", &columns).unwrap().into_strings();
        assert_eq!(
            commands,
            vec![
                "ALTER TABLE [dbo].[Users] ADD [Age] [int] NULL",
                "ALTER TABLE [dbo].[Users] ADD [Code] [nvarchar](10) NOT NULL",
            ]
        );
    }

    #[test]
    fn test_add_columns_drops_temporary_defaults_last() {
        let provider = MssqlProvider::new();
        let columns = vec![
            ColumnDescriptor::new("Active", LogicalType::Boolean).temporary_default("1"),
            ColumnDescriptor::new("Score", LogicalType::Int32).default_value("0"),
            ColumnDescriptor::new("Region", LogicalType::FixedAnsiString)
                .length(2)
                .temporary_default("'EU'"),
        ];
        let commands = provider.add_columns("Users", &columns).unwrap().into_strings();

        assert_eq!(
            commands,
            vec![
                "ALTER TABLE [dbo].[Users] ADD [Active] [bit] NOT NULL CONSTRAINT [DF_Users_Active] DEFAULT 1",
                "ALTER TABLE [dbo].[Users] ADD [Score] [int] NOT NULL CONSTRAINT [DF_Users_Score] DEFAULT 0",
                "ALTER TABLE [dbo].[Users] ADD [Region] [varchar](2) NOT NULL CONSTRAINT [DF_Users_Region] DEFAULT 'EU'",
                "ALTER TABLE [dbo].[Users] DROP CONSTRAINT [DF_Users_Active]",
                "ALTER TABLE [dbo].[Users] DROP CONSTRAINT [DF_Users_Region]",
            ]
        );
    }

    #[test]
    fn test_add_columns_empty_is_precondition_violation() {
        let provider = MssqlProvider::new();
        let err = provider.add_columns("Users", &[]).unwrap_err();
        assert!(matches!(err, ProviderError::Precondition(_)));
    }

    #[test]
    fn test_add_columns_unsupported_type_yields_nothing() {
        let provider = MssqlProvider::new();
        let columns = vec![
            ColumnDescriptor::new("Ok", LogicalType::Int32).nullable(),
            ColumnDescriptor::new("Bad", LogicalType::VarNumeric).nullable(),
        ];
        assert!(provider.add_columns("Users", &columns).is_err());
    }

    #[test]
    fn test_drop_default_matches_add_name() {
        let provider = MssqlProvider::new();
        let add = provider
            .add_columns(
                "Orders",
                &[ColumnDescriptor::new("Status", LogicalType::Int16).default_value("0")],
            )
            .unwrap()
            .into_strings()
            .remove(0);
        let drop = provider
            .drop_default_constraint("Orders", "Status")
            .unwrap()
            .into_strings()
            .remove(0);

        assert_eq!(drop, "ALTER TABLE [dbo].[Orders] DROP CONSTRAINT [DF_Orders_Status]");
        assert!(add.contains("CONSTRAINT [DF_Orders_Status] DEFAULT 0"));
    }

    #[test]
    fn test_rename_table() {
        let provider = MssqlProvider::new();
        let commands = provider.rename_table("Users", "Members").unwrap().into_strings();
        assert_eq!(
            commands,
            vec!["EXEC dbo.sp_rename @objname = N'[dbo].[Users]', @newname = N'Members', @objtype = N'OBJECT'"]
        );
    }

    #[test]
    fn test_rename_column() {
        let provider = MssqlProvider::new();
        let commands = provider
            .rename_column("Users", "Name", "FullName")
            .unwrap()
            .into_strings();
        assert_eq!(
            commands,
            vec!["EXEC dbo.sp_rename @objname=N'[dbo].[Users].[Name]', @newname=N'FullName', @objtype=N'COLUMN'"]
        );
    }

    #[test]
    fn test_rename_new_name_is_literal_escaped() {
        let provider = MssqlProvider::new();
        let sql = provider
            .rename_table("Users", "User's")
            .unwrap()
            .into_strings()
            .remove(0);
        assert!(sql.contains("@newname = N'User''s'"));
    }

    #[test]
    fn test_drop_table_guarded() {
        let provider = MssqlProvider::new();
        let plain = provider.drop_table("Users", false).unwrap().into_strings();
        assert_eq!(plain, vec!["DROP TABLE [dbo].[Users]"]);

        let guarded = provider.drop_table("Users", true).unwrap().into_strings();
        assert!(guarded[0].starts_with("IF EXISTS"));
        assert!(guarded[0].ends_with("BEGIN\nDROP TABLE [dbo].[Users]\nEND"));
    }

    #[test]
    fn test_drop_column() {
        let provider = MssqlProvider::new();
        let commands = provider.drop_column("Users", "Age").unwrap().into_strings();
        assert_eq!(commands, vec!["ALTER TABLE [dbo].[Users] DROP COLUMN [Age]"]);
    }

    #[test]
    fn test_foreign_keys() {
        let provider = MssqlProvider::new();
        let fk = ForeignKeyDescriptor {
            table: "Orders".into(),
            columns: vec!["CustomerId".into()],
            referenced_table: "Customers".into(),
            referenced_columns: vec!["Id".into()],
            name: None,
        };
        let add = provider.add_foreign_key(&fk).unwrap().into_strings();
        assert_eq!(
            add,
            vec!["ALTER TABLE [dbo].[Orders] ADD CONSTRAINT [FK_Orders_Customers] FOREIGN KEY ([CustomerId]) REFERENCES [dbo].[Customers] ([Id])"]
        );

        let drop = provider
            .drop_foreign_key("Orders", "FK_Orders_Customers")
            .unwrap()
            .into_strings();
        assert_eq!(
            drop,
            vec!["ALTER TABLE [dbo].[Orders] DROP CONSTRAINT [FK_Orders_Customers]"]
        );
    }

    #[test]
    fn test_indexes() {
        let provider = MssqlProvider::new();
        let idx = IndexDescriptor {
            table: "Orders".into(),
            columns: vec!["Region".into(), "Number".into()],
            is_unique: true,
            name: None,
        };
        let add = provider.add_index(&idx).unwrap().into_strings();
        assert_eq!(
            add,
            vec!["CREATE UNIQUE NONCLUSTERED INDEX [UQ_Orders_Region_Number] ON [dbo].[Orders] ([Region], [Number])"]
        );

        let drop = provider
            .drop_index("Orders", "UQ_Orders_Region_Number")
            .unwrap()
            .into_strings();
        assert_eq!(drop, vec!["DROP INDEX [UQ_Orders_Region_Number] ON [dbo].[Orders]"]);
    }
}
