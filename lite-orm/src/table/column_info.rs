use crate::types::SqliteType;

/// Storage metadata of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnInfo {
    /// The name of the column.
    pub name: &'static str,
    /// The storage type of the column.
    pub sqlite_type: SqliteType,
    /// Whether the column rejects `NULL` values.
    pub not_null: bool,
}

impl ColumnInfo {
    /// Creates a new [`ColumnInfo`].
    pub fn new(name: &'static str, sqlite_type: SqliteType, not_null: bool) -> Self {
        Self {
            name,
            sqlite_type,
            not_null,
        }
    }
}
