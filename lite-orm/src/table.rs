//! This module contains types related to database tables.

mod column_info;
mod definition;
mod group;
mod info;
mod model;

use thiserror::Error;

pub use self::column_info::ColumnInfo;
pub use self::definition::{
    ColumnDef, DEFAULT_CACHE_SIZE, DEFAULT_PRIMARY_KEY_NAME, FieldDef, FieldKind, IndexGroupDef,
    PrimaryKeyDef, TableDef, UniqueGroupDef,
};
pub use self::group::{ConflictAction, IndexGroupInfo, UniqueGroupInfo};
pub use self::info::TableInfo;
pub use self::model::Model;

/// The result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// An enum representing the errors in a table declaration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// Two columns of the table have the same name.
    #[error("{model} declares the column `{column}` more than once")]
    DuplicateColumnName {
        model: &'static str,
        column: &'static str,
    },
    /// The same index group number is declared twice.
    #[error("{model} declares the index group {group} more than once")]
    DuplicateIndexGroup { model: &'static str, group: u32 },
    /// The same unique group number is declared twice.
    #[error("{model} declares the unique group {group} more than once")]
    DuplicateUniqueGroup { model: &'static str, group: u32 },
    /// The primary key field is not an `i64`.
    #[error("Primary key field `{field}` of {model} should be i64, found {found}")]
    InvalidPrimaryKeyType {
        model: &'static str,
        field: &'static str,
        found: &'static str,
    },
    /// No field is declared as primary key.
    #[error("Primary key field not found for model {0}")]
    MissingPrimaryKey(&'static str),
    /// More than one field is declared as primary key.
    #[error("{0} contains more than one primary key; composite primary keys are not supported")]
    MultiplePrimaryKeys(&'static str),
    /// A column references an index group which is not declared by the table.
    #[error("Index group with number {group} not found in {model}")]
    UnknownIndexGroup { model: &'static str, group: u32 },
    /// A column references a unique group which is not declared by the table.
    #[error("Unique group with number {group} not found in {model}")]
    UnknownUniqueGroup { model: &'static str, group: u32 },
    /// The field type has no SQLite representation and no serializer.
    #[error("Field `{field}` of {model} has unsupported type {ty}")]
    UnsupportedColumnType {
        model: &'static str,
        field: &'static str,
        ty: &'static str,
    },
}
