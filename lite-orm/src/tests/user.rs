use std::time::SystemTime;

use crate::table::{ColumnDef, FieldDef, FieldKind, Model, PrimaryKeyDef, TableDef};
use crate::tests::TestDatabase;
use crate::types::TypeRef;

/// A simple user struct for testing purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub email: Option<String>,
    pub created_at: SystemTime,
    /// Not persisted.
    pub session_token: Option<Vec<u8>>,
}

static USER_TABLE: TableDef = TableDef {
    model: TypeRef::of::<User>(),
    name: Some("users"),
    database: TypeRef::of::<TestDatabase>(),
    caching_enabled: true,
    cache_size: 256,
    unique_groups: &[],
    index_groups: &[],
    fields: &[
        FieldDef {
            name: "id",
            ty: TypeRef::of::<i64>(),
            optional: true,
            kind: FieldKind::PrimaryKey(PrimaryKeyDef { name: "id" }),
        },
        FieldDef {
            name: "name",
            ty: TypeRef::of::<String>(),
            optional: false,
            kind: FieldKind::Column(ColumnDef {
                name: Some("user_name"),
                not_null: true,
                unique_groups: &[],
                index_groups: &[],
            }),
        },
        FieldDef {
            name: "email",
            ty: TypeRef::of::<String>(),
            optional: true,
            kind: FieldKind::Column(ColumnDef {
                name: None,
                not_null: false,
                unique_groups: &[],
                index_groups: &[],
            }),
        },
        FieldDef {
            name: "created_at",
            ty: TypeRef::of::<SystemTime>(),
            optional: false,
            kind: FieldKind::Column(ColumnDef {
                name: Some(""),
                not_null: false,
                unique_groups: &[],
                index_groups: &[],
            }),
        },
    ],
};

impl Model for User {
    fn table_def() -> &'static TableDef {
        &USER_TABLE
    }
}
