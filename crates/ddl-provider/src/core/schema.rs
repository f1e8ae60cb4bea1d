//! Descriptor types for tables, columns, foreign keys and indexes.
//!
//! These types provide an engine-neutral description of a schema change.
//! Providers only read them; nothing in this crate mutates a descriptor once
//! it has been handed over.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dialect::LogicalType;
use crate::error::{ProviderError, Result};

/// Column definition used by `create_table` and `add_columns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,

    /// Engine-neutral type.
    #[serde(rename = "type")]
    pub logical_type: LogicalType,

    /// Length for fixed-length strings, precision for decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,

    /// Scale for decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,

    /// Whether the column accepts NULL.
    #[serde(default)]
    pub is_nullable: bool,

    /// Whether the column takes part in the primary key.
    #[serde(default)]
    pub is_primary_key: bool,

    /// Raw SQL literal used as default value (e.g. `0`, `N'none'`, `GETDATE()`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// Drop the default again once the column has been added.
    ///
    /// Used to seed existing rows of a NOT NULL column without keeping the
    /// default around afterwards.
    #[serde(default)]
    pub drop_default_after_create: bool,
}

impl ColumnDescriptor {
    /// Create a NOT NULL, non-key column without default.
    pub fn new(name: impl Into<String>, logical_type: LogicalType) -> Self {
        Self {
            name: name.into(),
            logical_type,
            length: None,
            scale: None,
            is_nullable: false,
            is_primary_key: false,
            default_value: None,
            drop_default_after_create: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Set precision and scale (decimals).
    pub fn precision(mut self, precision: u32, scale: u32) -> Self {
        self.length = Some(precision);
        self.scale = Some(scale);
        self
    }

    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.default_value = Some(literal.into());
        self
    }

    /// Seed existing rows with `literal`, then drop the default.
    pub fn temporary_default(mut self, literal: impl Into<String>) -> Self {
        self.default_value = Some(literal.into());
        self.drop_default_after_create = true;
        self
    }
}

/// Table definition: a name and its ordered columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// Table name.
    pub name: String,

    /// Column definitions in declaration order.
    pub columns: Vec<ColumnDescriptor>,
}

impl TableDescriptor {
    /// Create a table descriptor, rejecting duplicate column names.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Result<Self> {
        let table = Self {
            name: name.into(),
            columns,
        };
        table.validate()?;
        Ok(table)
    }

    /// Check that column names are unique within the table.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for col in &self.columns {
            if !seen.insert(col.name.as_str()) {
                return Err(ProviderError::precondition(format!(
                    "duplicate column '{}' in table '{}'",
                    col.name, self.name
                )));
            }
        }
        Ok(())
    }
}

/// Names of the primary key columns, in declaration order.
pub fn primary_key_columns(columns: &[ColumnDescriptor]) -> Vec<&str> {
    columns
        .iter()
        .filter(|c| c.is_primary_key)
        .map(|c| c.name.as_str())
        .collect()
}

/// Foreign key constraint definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyDescriptor {
    /// Referencing table.
    pub table: String,

    /// Referencing columns.
    pub columns: Vec<String>,

    /// Referenced table.
    pub referenced_table: String,

    /// Referenced columns, positionally matching `columns`.
    pub referenced_columns: Vec<String>,

    /// Explicit constraint name. Defaults to `FK_<table>_<referenced_table>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ForeignKeyDescriptor {
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(ProviderError::precondition(format!(
                "foreign key on '{}' has no columns",
                self.table
            )));
        }
        if self.columns.len() != self.referenced_columns.len() {
            return Err(ProviderError::precondition(format!(
                "foreign key on '{}' lists {} columns but references {}",
                self.table,
                self.columns.len(),
                self.referenced_columns.len()
            )));
        }
        Ok(())
    }
}

/// Index definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDescriptor {
    /// Indexed table.
    pub table: String,

    /// Indexed columns, in key order.
    pub columns: Vec<String>,

    /// Whether the index enforces uniqueness.
    #[serde(default)]
    pub is_unique: bool,

    /// Explicit index name. Defaults to `IX_`/`UQ_<table>_<columns>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl IndexDescriptor {
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(ProviderError::precondition(format!(
                "index on '{}' has no columns",
                self.table
            )));
        }
        Ok(())
    }
}
