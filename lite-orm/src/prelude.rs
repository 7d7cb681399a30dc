//! Re-exports all the most commonly used items from this crate.

pub use crate::Model;
pub use crate::database::{
    ConfigError, Database, DatabaseConfig, DatabaseConfigBuilder, DatabaseSchema,
};
pub use crate::serializer::{SerializerError, SerializerRegistry, TypeSerializer};
pub use crate::table::{
    ColumnDef, ColumnInfo, ConflictAction, DEFAULT_CACHE_SIZE, DEFAULT_PRIMARY_KEY_NAME, FieldDef,
    FieldKind, IndexGroupDef, IndexGroupInfo, Model, PrimaryKeyDef, TableDef, TableError,
    TableInfo, UniqueGroupDef, UniqueGroupInfo,
};
pub use crate::types::{SqliteType, TypeRef, TypeResolver};
pub use crate::{LiteOrmError, LiteOrmResult};
