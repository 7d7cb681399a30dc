//! Static table declarations.
//!
//! These are the raw declarations of a model, as written by hand or generated by
//! `#[derive(Model)]`. They are not validated until they are turned into a
//! [`crate::table::TableInfo`].

use crate::table::ConflictAction;
use crate::types::TypeRef;

/// Default number of cached records when caching is enabled.
pub const DEFAULT_CACHE_SIZE: usize = 1000;

/// Default name of the primary key column.
pub const DEFAULT_PRIMARY_KEY_NAME: &str = "id";

/// Declaration of a table.
#[derive(Debug, Clone, Copy)]
pub struct TableDef {
    /// The model type mapped to this table.
    pub model: TypeRef,
    /// The name of the table; if `None` or empty, the model name is used.
    pub name: Option<&'static str>,
    /// The [`crate::database::Database`] this table belongs to.
    pub database: TypeRef,
    /// Whether loaded records should be cached.
    pub caching_enabled: bool,
    /// Maximum number of cached records.
    pub cache_size: usize,
    /// The unique groups of the table.
    pub unique_groups: &'static [UniqueGroupDef],
    /// The index groups of the table.
    pub index_groups: &'static [IndexGroupDef],
    /// The persisted fields of the model, in declaration order.
    pub fields: &'static [FieldDef],
}

/// Declaration of a group of columns which must be unique together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueGroupDef {
    /// The number the columns use to refer to this group.
    pub number: u32,
    /// What to do when a row violates the constraint.
    pub on_conflict: ConflictAction,
}

/// Declaration of a group of columns indexed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexGroupDef {
    /// The number the columns use to refer to this group.
    pub number: u32,
    /// The name of the index.
    pub name: Option<&'static str>,
    /// Whether the index is unique.
    pub unique: bool,
}

/// Declaration of a persisted field of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// The name of the field in the model.
    pub name: &'static str,
    /// The type of the field, without the `Option` wrapper.
    pub ty: TypeRef,
    /// Whether the field is wrapped in an `Option`.
    ///
    /// Nullability of the column comes from [`ColumnDef::not_null`]; a `NOT NULL` column on an
    /// optional field is accepted with a warning.
    pub optional: bool,
    /// How the field is persisted.
    pub kind: FieldKind,
}

/// How a field is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    PrimaryKey(PrimaryKeyDef),
    Column(ColumnDef),
}

/// Declaration of the primary key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryKeyDef {
    /// The name of the primary key column.
    pub name: &'static str,
}

impl Default for PrimaryKeyDef {
    fn default() -> Self {
        Self {
            name: DEFAULT_PRIMARY_KEY_NAME,
        }
    }
}

/// Declaration of a column field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// The name of the column; if `None` or empty, the field name is used.
    pub name: Option<&'static str>,
    /// Whether the column rejects `NULL` values.
    pub not_null: bool,
    /// Numbers of the unique groups this column belongs to.
    pub unique_groups: &'static [u32],
    /// Numbers of the index groups this column belongs to.
    pub index_groups: &'static [u32],
}

impl FieldDef {
    /// Returns the [`PrimaryKeyDef`] if this field is the primary key.
    pub fn primary_key(&self) -> Option<&PrimaryKeyDef> {
        match &self.kind {
            FieldKind::PrimaryKey(pk) => Some(pk),
            FieldKind::Column(_) => None,
        }
    }

    /// Returns the [`ColumnDef`] if this field is a column.
    pub fn column(&self) -> Option<&ColumnDef> {
        match &self.kind {
            FieldKind::Column(column) => Some(column),
            FieldKind::PrimaryKey(_) => None,
        }
    }
}
