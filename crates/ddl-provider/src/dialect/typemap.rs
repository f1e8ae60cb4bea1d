//! Logical type → engine type token mappers.
//!
//! One mapper per engine. Each `match` is exhaustive over [`LogicalType`],
//! so adding a logical type forces a decision for every engine. Types an
//! engine cannot store without approximation are listed explicitly and
//! return [`ProviderError::UnsupportedType`].
//!
//! Length handling:
//!
//! - `FixedString`/`FixedAnsiString` require a length, interpolated as `(N)`.
//! - `Decimal` uses length as precision and the descriptor's scale; engine
//!   defaults apply when they are absent.
//! - Every other type ignores length.

use crate::core::traits::{require_length, TypeMapper};
use crate::error::{ProviderError, Result};

use super::LogicalType;

/// Precision/scale pair for a decimal, falling back to `default_precision`.
///
/// Returns `None` when neither the descriptor nor the engine supplies a
/// precision, meaning the bare type name is used. A scale without any
/// precision is a precondition violation.
fn decimal_spec(
    length: Option<u32>,
    scale: Option<u32>,
    default_precision: Option<u32>,
) -> Result<Option<(u32, u32)>> {
    match (length.or(default_precision), scale) {
        (Some(precision), scale) => Ok(Some((precision, scale.unwrap_or(0)))),
        (None, None) => Ok(None),
        (None, Some(scale)) => Err(ProviderError::precondition(format!(
            "decimal scale {} requires a precision",
            scale
        ))),
    }
}

// =============================================================================
// SQL Server
// =============================================================================

/// SQL Server type tokens, bracket-quoted (`[int]`, `[nvarchar](max)`).
#[derive(Debug, Clone, Default)]
pub struct MssqlTypeMapper;

impl MssqlTypeMapper {
    /// Create a new SQL Server type mapper.
    pub fn new() -> Self {
        Self
    }
}

impl TypeMapper for MssqlTypeMapper {
    fn dialect_name(&self) -> &str {
        "mssql"
    }

    fn map_type(
        &self,
        logical_type: LogicalType,
        length: Option<u32>,
        scale: Option<u32>,
    ) -> Result<String> {
        let token = match logical_type {
            // Strings
            LogicalType::AnsiString => "[varchar](max)".to_string(),
            LogicalType::String => "[nvarchar](max)".to_string(),
            LogicalType::FixedAnsiString => {
                format!("[varchar]({})", require_length(logical_type, length)?)
            }
            LogicalType::FixedString => {
                format!("[nvarchar]({})", require_length(logical_type, length)?)
            }

            // Binary
            LogicalType::Binary => "[varbinary](max)".to_string(),

            // Boolean
            LogicalType::Boolean => "[bit]".to_string(),

            // Integers. tinyint is unsigned, so both 8-bit types widen to smallint.
            LogicalType::Byte | LogicalType::SByte => "[smallint]".to_string(),
            LogicalType::Int16 => "[smallint]".to_string(),
            LogicalType::Int32 => "[int]".to_string(),
            LogicalType::Int64 => "[bigint]".to_string(),
            LogicalType::UInt16 => "[int]".to_string(),
            LogicalType::UInt32 => "[bigint]".to_string(),
            LogicalType::UInt64 => "[decimal](20, 0)".to_string(),

            // Fractional
            LogicalType::Single => "[real]".to_string(),
            LogicalType::Double => "[float]".to_string(),
            LogicalType::Decimal => match decimal_spec(length, scale, Some(18))? {
                Some((p, s)) => format!("[decimal]({}, {})", p, s),
                None => "[decimal]".to_string(),
            },
            LogicalType::Currency => "[money]".to_string(),

            // Date/time
            LogicalType::Date => "[date]".to_string(),
            LogicalType::Time => "[time]".to_string(),
            LogicalType::DateTime => "[datetime]".to_string(),
            LogicalType::DateTime2 => "[datetime2]".to_string(),
            LogicalType::DateTimeOffset => "[datetimeoffset]".to_string(),

            // Special
            LogicalType::Guid => "[uniqueidentifier]".to_string(),
            LogicalType::Xml => "[xml]".to_string(),

            // sql_variant rejects several base types; no faithful mapping.
            LogicalType::Object | LogicalType::VarNumeric => {
                return Err(ProviderError::unsupported_type(
                    self.dialect_name(),
                    logical_type,
                ))
            }
        };
        Ok(token)
    }
}

// =============================================================================
// PostgreSQL
// =============================================================================

/// PostgreSQL type tokens.
#[derive(Debug, Clone, Default)]
pub struct PostgresTypeMapper;

impl PostgresTypeMapper {
    /// Create a new PostgreSQL type mapper.
    pub fn new() -> Self {
        Self
    }
}

impl TypeMapper for PostgresTypeMapper {
    fn dialect_name(&self) -> &str {
        "postgres"
    }

    fn map_type(
        &self,
        logical_type: LogicalType,
        length: Option<u32>,
        scale: Option<u32>,
    ) -> Result<String> {
        let token = match logical_type {
            // Strings (PostgreSQL text is always Unicode-capable)
            LogicalType::AnsiString | LogicalType::String => "text".to_string(),
            LogicalType::FixedAnsiString | LogicalType::FixedString => {
                format!("varchar({})", require_length(logical_type, length)?)
            }

            // Binary
            LogicalType::Binary => "bytea".to_string(),

            // Boolean
            LogicalType::Boolean => "boolean".to_string(),

            // Integers
            LogicalType::Byte | LogicalType::SByte | LogicalType::Int16 => "smallint".to_string(),
            LogicalType::Int32 | LogicalType::UInt16 => "integer".to_string(),
            LogicalType::Int64 | LogicalType::UInt32 => "bigint".to_string(),
            LogicalType::UInt64 => "numeric(20,0)".to_string(),

            // Fractional
            LogicalType::Single => "real".to_string(),
            LogicalType::Double => "double precision".to_string(),
            LogicalType::Decimal => match decimal_spec(length, scale, None)? {
                Some((p, s)) => format!("numeric({},{})", p, s),
                None => "numeric".to_string(),
            },
            LogicalType::VarNumeric => "numeric".to_string(),
            LogicalType::Currency => "money".to_string(),

            // Date/time
            LogicalType::Date => "date".to_string(),
            LogicalType::Time => "time".to_string(),
            LogicalType::DateTime | LogicalType::DateTime2 => "timestamp".to_string(),
            LogicalType::DateTimeOffset => "timestamptz".to_string(),

            // Special
            LogicalType::Guid => "uuid".to_string(),
            LogicalType::Xml => "xml".to_string(),

            LogicalType::Object => {
                return Err(ProviderError::unsupported_type(
                    self.dialect_name(),
                    logical_type,
                ))
            }
        };
        Ok(token)
    }
}

// =============================================================================
// MySQL / MariaDB
// =============================================================================

/// MySQL/MariaDB type tokens.
#[derive(Debug, Clone, Default)]
pub struct MysqlTypeMapper;

impl MysqlTypeMapper {
    /// Create a new MySQL type mapper.
    pub fn new() -> Self {
        Self
    }
}

impl TypeMapper for MysqlTypeMapper {
    fn dialect_name(&self) -> &str {
        "mysql"
    }

    fn map_type(
        &self,
        logical_type: LogicalType,
        length: Option<u32>,
        scale: Option<u32>,
    ) -> Result<String> {
        let token = match logical_type {
            // Strings
            LogicalType::AnsiString | LogicalType::String => "longtext".to_string(),
            LogicalType::FixedAnsiString | LogicalType::FixedString => {
                format!("varchar({})", require_length(logical_type, length)?)
            }

            // Binary
            LogicalType::Binary => "longblob".to_string(),

            // Boolean
            LogicalType::Boolean => "tinyint(1)".to_string(),

            // Integers
            LogicalType::Byte => "tinyint unsigned".to_string(),
            LogicalType::SByte => "tinyint".to_string(),
            LogicalType::Int16 => "smallint".to_string(),
            LogicalType::Int32 => "int".to_string(),
            LogicalType::Int64 => "bigint".to_string(),
            LogicalType::UInt16 => "smallint unsigned".to_string(),
            LogicalType::UInt32 => "int unsigned".to_string(),
            LogicalType::UInt64 => "bigint unsigned".to_string(),

            // Fractional
            LogicalType::Single => "float".to_string(),
            LogicalType::Double => "double".to_string(),
            LogicalType::Decimal => match decimal_spec(length, scale, None)? {
                Some((p, s)) => format!("decimal({},{})", p, s),
                None => "decimal".to_string(),
            },
            LogicalType::Currency => "decimal(19,4)".to_string(),

            // Date/time
            LogicalType::Date => "date".to_string(),
            LogicalType::Time => "time".to_string(),
            LogicalType::DateTime => "datetime".to_string(),
            LogicalType::DateTime2 => "datetime(6)".to_string(),

            // Special
            LogicalType::Guid => "char(36)".to_string(),

            // No offset-aware timestamp, no XML type, no unbounded numeric.
            LogicalType::DateTimeOffset
            | LogicalType::Xml
            | LogicalType::VarNumeric
            | LogicalType::Object => {
                return Err(ProviderError::unsupported_type(
                    self.dialect_name(),
                    logical_type,
                ))
            }
        };
        Ok(token)
    }

    // TEXT and BLOB columns only take expression defaults.
    fn default_clause(&self, logical_type: LogicalType, literal: &str) -> String {
        match logical_type {
            LogicalType::AnsiString | LogicalType::String | LogicalType::Binary => {
                format!("DEFAULT ({})", literal)
            }
            _ => format!("DEFAULT {}", literal),
        }
    }
}

// =============================================================================
// SQLite
// =============================================================================

/// SQLite type names, chosen for their column affinity.
///
/// Date/time values use TEXT affinity (ISO-8601 strings), which is the
/// storage convention of SQLite's date and time functions.
#[derive(Debug, Clone, Default)]
pub struct SqliteTypeMapper;

impl SqliteTypeMapper {
    /// Create a new SQLite type mapper.
    pub fn new() -> Self {
        Self
    }
}

impl TypeMapper for SqliteTypeMapper {
    fn dialect_name(&self) -> &str {
        "sqlite"
    }

    fn map_type(
        &self,
        logical_type: LogicalType,
        length: Option<u32>,
        _scale: Option<u32>,
    ) -> Result<String> {
        let token = match logical_type {
            // Strings
            LogicalType::AnsiString | LogicalType::String | LogicalType::Xml => "TEXT".to_string(),
            LogicalType::FixedAnsiString | LogicalType::FixedString => {
                format!("VARCHAR({})", require_length(logical_type, length)?)
            }

            // Binary
            LogicalType::Binary => "BLOB".to_string(),

            // Integers (64-bit signed storage)
            LogicalType::Boolean
            | LogicalType::Byte
            | LogicalType::SByte
            | LogicalType::Int16
            | LogicalType::Int32
            | LogicalType::Int64
            | LogicalType::UInt16
            | LogicalType::UInt32 => "INTEGER".to_string(),

            // Fractional
            LogicalType::Single | LogicalType::Double => "REAL".to_string(),
            LogicalType::Decimal | LogicalType::VarNumeric | LogicalType::Currency => {
                "NUMERIC".to_string()
            }

            // Date/time
            LogicalType::Date
            | LogicalType::Time
            | LogicalType::DateTime
            | LogicalType::DateTime2
            | LogicalType::DateTimeOffset => "TEXT".to_string(),

            // Special
            LogicalType::Guid => "TEXT".to_string(),

            // UInt64 overflows INTEGER storage.
            LogicalType::UInt64 | LogicalType::Object => {
                return Err(ProviderError::unsupported_type(
                    self.dialect_name(),
                    logical_type,
                ))
            }
        };
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(mapper: &dyn TypeMapper, ty: LogicalType) -> String {
        mapper.map_type(ty, None, None).unwrap()
    }

    fn assert_unsupported(mapper: &dyn TypeMapper, ty: LogicalType) {
        let err = mapper.map_type(ty, Some(10), None).unwrap_err();
        match err {
            ProviderError::UnsupportedType {
                engine,
                logical_type,
            } => {
                assert_eq!(engine, mapper.dialect_name());
                assert_eq!(logical_type, ty);
            }
            other => panic!("expected UnsupportedType, got {:?}", other),
        }
    }

    /// Every logical type either maps to a token or fails as unsupported.
    fn assert_exhaustive(mapper: &dyn TypeMapper) {
        for ty in LogicalType::ALL {
            match mapper.map_type(ty, Some(10), Some(2)) {
                Ok(token) => assert!(!token.is_empty(), "{} mapped to empty token", ty),
                Err(ProviderError::UnsupportedType { .. }) => {}
                Err(other) => panic!("{} failed with {:?}", ty, other),
            }
        }
    }

    // =========================================================================
    // SQL Server
    // =========================================================================

    #[test]
    fn test_mssql_core_types() {
        let m = MssqlTypeMapper::new();
        assert_eq!(map(&m, LogicalType::Int32), "[int]");
        assert_eq!(map(&m, LogicalType::String), "[nvarchar](max)");
        assert_eq!(map(&m, LogicalType::DateTime), "[datetime]");
        assert_eq!(map(&m, LogicalType::Byte), "[smallint]");
        assert_eq!(map(&m, LogicalType::Guid), "[uniqueidentifier]");
        assert_eq!(map(&m, LogicalType::Boolean), "[bit]");
    }

    #[test]
    fn test_mssql_fixed_length_interpolated() {
        let m = MssqlTypeMapper::new();
        assert_eq!(
            m.map_type(LogicalType::FixedString, Some(50), None).unwrap(),
            "[nvarchar](50)"
        );
        assert_eq!(
            m.map_type(LogicalType::FixedAnsiString, Some(8), None).unwrap(),
            "[varchar](8)"
        );
    }

    #[test]
    fn test_mssql_fixed_length_missing() {
        let m = MssqlTypeMapper::new();
        let err = m.map_type(LogicalType::FixedString, None, None).unwrap_err();
        assert!(matches!(err, ProviderError::Precondition(_)));
    }

    #[test]
    fn test_mssql_decimal() {
        let m = MssqlTypeMapper::new();
        assert_eq!(map(&m, LogicalType::Decimal), "[decimal](18, 0)");
        assert_eq!(
            m.map_type(LogicalType::Decimal, Some(10), Some(2)).unwrap(),
            "[decimal](10, 2)"
        );
        assert_eq!(
            m.map_type(LogicalType::Decimal, None, Some(4)).unwrap(),
            "[decimal](18, 4)"
        );
    }

    #[test]
    fn test_mssql_length_ignored_for_variable_types() {
        let m = MssqlTypeMapper::new();
        assert_eq!(
            m.map_type(LogicalType::String, Some(50), None).unwrap(),
            "[nvarchar](max)"
        );
    }

    #[test]
    fn test_mssql_unsupported() {
        let m = MssqlTypeMapper::new();
        assert_unsupported(&m, LogicalType::Object);
        assert_unsupported(&m, LogicalType::VarNumeric);
        assert_exhaustive(&m);
    }

    // =========================================================================
    // PostgreSQL
    // =========================================================================

    #[test]
    fn test_postgres_types() {
        let m = PostgresTypeMapper::new();
        assert_eq!(map(&m, LogicalType::Int32), "integer");
        assert_eq!(map(&m, LogicalType::String), "text");
        assert_eq!(map(&m, LogicalType::Double), "double precision");
        assert_eq!(map(&m, LogicalType::DateTimeOffset), "timestamptz");
        assert_eq!(map(&m, LogicalType::Guid), "uuid");
        assert_eq!(map(&m, LogicalType::Decimal), "numeric");
        assert_eq!(
            m.map_type(LogicalType::Decimal, Some(12), Some(4)).unwrap(),
            "numeric(12,4)"
        );
        assert_eq!(
            m.map_type(LogicalType::FixedString, Some(3), None).unwrap(),
            "varchar(3)"
        );
    }

    #[test]
    fn test_decimal_scale_without_precision() {
        let mappers: [&dyn TypeMapper; 2] = [&PostgresTypeMapper::new(), &MysqlTypeMapper::new()];
        for m in mappers {
            let err = m.map_type(LogicalType::Decimal, None, Some(4)).unwrap_err();
            assert!(matches!(err, ProviderError::Precondition(_)), "{}", m.dialect_name());
        }
    }

    #[test]
    fn test_postgres_unsupported() {
        let m = PostgresTypeMapper::new();
        assert_unsupported(&m, LogicalType::Object);
        assert_exhaustive(&m);
    }

    // =========================================================================
    // MySQL
    // =========================================================================

    #[test]
    fn test_mysql_types() {
        let m = MysqlTypeMapper::new();
        assert_eq!(map(&m, LogicalType::Int32), "int");
        assert_eq!(map(&m, LogicalType::Boolean), "tinyint(1)");
        assert_eq!(map(&m, LogicalType::UInt64), "bigint unsigned");
        assert_eq!(map(&m, LogicalType::Guid), "char(36)");
        assert_eq!(map(&m, LogicalType::DateTime2), "datetime(6)");
    }

    #[test]
    fn test_mysql_unsupported() {
        let m = MysqlTypeMapper::new();
        assert_unsupported(&m, LogicalType::DateTimeOffset);
        assert_unsupported(&m, LogicalType::Xml);
        assert_unsupported(&m, LogicalType::VarNumeric);
        assert_unsupported(&m, LogicalType::Object);
        assert_exhaustive(&m);
    }

    // =========================================================================
    // SQLite
    // =========================================================================

    #[test]
    fn test_sqlite_affinities() {
        let m = SqliteTypeMapper::new();
        assert_eq!(map(&m, LogicalType::Int64), "INTEGER");
        assert_eq!(map(&m, LogicalType::Boolean), "INTEGER");
        assert_eq!(map(&m, LogicalType::Double), "REAL");
        assert_eq!(map(&m, LogicalType::DateTime), "TEXT");
        assert_eq!(map(&m, LogicalType::Decimal), "NUMERIC");
        assert_eq!(
            m.map_type(LogicalType::FixedAnsiString, Some(2), None).unwrap(),
            "VARCHAR(2)"
        );
    }

    #[test]
    fn test_sqlite_unsupported() {
        let m = SqliteTypeMapper::new();
        assert_unsupported(&m, LogicalType::UInt64);
        assert_unsupported(&m, LogicalType::Object);
        assert_exhaustive(&m);
    }
}
