//! Engine-neutral logical column types.
//!
//! Every provider maps these onto its own type tokens. The set mirrors the
//! usual ADO-style `DbType` enumeration so that migration definitions can be
//! written once and rendered for any engine:
//!
//! ```text
//! ColumnDescriptor  →  LogicalType  →  engine token
//!     "Id"          →     Int32     →  [int] / integer / int / INTEGER
//! ```
//!
//! Not every engine can represent every logical type. A missing mapping is
//! reported as [`ProviderError::UnsupportedType`](crate::ProviderError) and
//! never approximated.

use serde::{Deserialize, Serialize};

/// Logical column type, independent of any database engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalType {
    // ===== Strings =====
    /// Variable-length non-Unicode string.
    AnsiString,
    /// Variable-length Unicode string.
    String,
    /// Fixed-length non-Unicode string. Requires a length.
    FixedAnsiString,
    /// Fixed-length Unicode string. Requires a length.
    FixedString,

    // ===== Binary =====
    /// Variable-length binary data.
    Binary,

    // ===== Boolean =====
    Boolean,

    // ===== Integers =====
    /// 8-bit unsigned integer.
    Byte,
    /// 8-bit signed integer.
    SByte,
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,

    // ===== Fractional =====
    /// Single-precision floating point.
    Single,
    /// Double-precision floating point.
    Double,
    /// Exact numeric. Length is the precision, scale comes from the descriptor.
    Decimal,
    /// Variable-length numeric without declared precision.
    VarNumeric,
    /// Monetary value.
    Currency,

    // ===== Date/Time =====
    Date,
    Time,
    /// Date and time, engine's classic precision.
    DateTime,
    /// Date and time with extended range and precision.
    DateTime2,
    /// Date and time with a time zone offset.
    DateTimeOffset,

    // ===== Special =====
    /// 128-bit globally unique identifier.
    Guid,
    Xml,
    /// Engine-specific variant type.
    Object,
}

impl LogicalType {
    /// Every logical type, in declaration order.
    pub const ALL: [LogicalType; 27] = [
        LogicalType::AnsiString,
        LogicalType::String,
        LogicalType::FixedAnsiString,
        LogicalType::FixedString,
        LogicalType::Binary,
        LogicalType::Boolean,
        LogicalType::Byte,
        LogicalType::SByte,
        LogicalType::Int16,
        LogicalType::Int32,
        LogicalType::Int64,
        LogicalType::UInt16,
        LogicalType::UInt32,
        LogicalType::UInt64,
        LogicalType::Single,
        LogicalType::Double,
        LogicalType::Decimal,
        LogicalType::VarNumeric,
        LogicalType::Currency,
        LogicalType::Date,
        LogicalType::Time,
        LogicalType::DateTime,
        LogicalType::DateTime2,
        LogicalType::DateTimeOffset,
        LogicalType::Guid,
        LogicalType::Xml,
        LogicalType::Object,
    ];

    /// Whether the engine token must carry the descriptor's length.
    pub fn requires_length(&self) -> bool {
        matches!(self, LogicalType::FixedAnsiString | LogicalType::FixedString)
    }
}

impl std::fmt::Display for LogicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Debug output is the bare variant name for a fieldless enum.
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_is_variant_name() {
        assert_eq!(LogicalType::Int32.to_string(), "Int32");
        assert_eq!(LogicalType::DateTimeOffset.to_string(), "DateTimeOffset");
    }

    #[test]
    fn test_all_is_distinct() {
        let set: HashSet<_> = LogicalType::ALL.iter().collect();
        assert_eq!(set.len(), LogicalType::ALL.len());
    }

    #[test]
    fn test_requires_length() {
        assert!(LogicalType::FixedString.requires_length());
        assert!(LogicalType::FixedAnsiString.requires_length());
        assert!(!LogicalType::String.requires_length());
        assert!(!LogicalType::Decimal.requires_length());
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let ty: LogicalType = serde_yaml::from_str("FixedString").unwrap();
        assert_eq!(ty, LogicalType::FixedString);
    }
}
