use crate::database::Database;
use crate::table::{
    ColumnDef, DEFAULT_CACHE_SIZE, FieldDef, FieldKind, Model, PrimaryKeyDef, TableDef,
};
use crate::types::TypeRef;

/// A database other than [`crate::tests::TestDatabase`].
pub struct OtherDatabase;

impl Database for OtherDatabase {
    const NAME: &'static str = "audit.db";
    const VERSION: u32 = 1;
}

/// An audit entry, stored in [`OtherDatabase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audit {
    pub id: Option<i64>,
    pub message: String,
}

static AUDIT_TABLE: TableDef = TableDef {
    model: TypeRef::of::<Audit>(),
    name: Some("audit_log"),
    database: TypeRef::of::<OtherDatabase>(),
    caching_enabled: false,
    cache_size: DEFAULT_CACHE_SIZE,
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
            name: "message",
            ty: TypeRef::of::<String>(),
            optional: false,
            kind: FieldKind::Column(ColumnDef {
                name: None,
                not_null: true,
                unique_groups: &[],
                index_groups: &[],
            }),
        },
    ],
};

impl Model for Audit {
    fn table_def() -> &'static TableDef {
        &AUDIT_TABLE
    }
}
