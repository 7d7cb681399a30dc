//! This module exposes the storage types and the mapping from Rust types to SQLite types.

mod resolver;
mod sqlite_type;
mod type_ref;

pub use self::resolver::TypeResolver;
pub use self::sqlite_type::SqliteType;
pub use self::type_ref::TypeRef;
