//! Deterministic constraint and index names.
//!
//! Every name is a pure function of the table and column names it covers.
//! Both sides of a create/drop pair call the same function, so a drop always
//! references the name that the matching create produced.
//!
//! Two distinct inputs can format to the same name (`DF_a_b_c` is produced by
//! table `a_b` / column `c` and by table `a` / column `b_c`). Such collisions
//! are not detected.

/// Primary key constraint name: `PK_<table>`.
pub fn primary_key_name(table: &str) -> String {
    format!("PK_{}", table)
}

/// Default constraint name: `DF_<table>_<column>`.
pub fn default_constraint_name(table: &str, column: &str) -> String {
    format!("DF_{}_{}", table, column)
}

/// Foreign key constraint name: `FK_<table>_<referenced_table>`.
pub fn foreign_key_name(table: &str, referenced_table: &str) -> String {
    format!("FK_{}_{}", table, referenced_table)
}

/// Index name: `IX_<table>_<col1>_<col2>...`, or `UQ_...` for unique indexes.
pub fn index_name<S: AsRef<str>>(table: &str, columns: &[S], is_unique: bool) -> String {
    let prefix = if is_unique { "UQ" } else { "IX" };
    let mut name = format!("{}_{}", prefix, table);
    for col in columns {
        name.push('_');
        name.push_str(col.as_ref());
    }
    name
}
