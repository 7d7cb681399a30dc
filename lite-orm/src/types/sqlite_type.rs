use std::fmt;

use crate::types::TypeRef;

/// Storage classes supported by SQLite columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqliteType {
    Integer,
    Real,
    Text,
    Blob,
}

/// Rust types which can be stored without a [`crate::serializer::TypeSerializer`].
///
/// 64-bit unsigned and pointer-sized integers are left out since they can't be stored
/// losslessly into a SQLite integer.
const TYPE_MAPPING: &[(TypeRef, SqliteType)] = &[
    (TypeRef::of::<bool>(), SqliteType::Integer),
    (TypeRef::of::<i8>(), SqliteType::Integer),
    (TypeRef::of::<i16>(), SqliteType::Integer),
    (TypeRef::of::<i32>(), SqliteType::Integer),
    (TypeRef::of::<i64>(), SqliteType::Integer),
    (TypeRef::of::<u8>(), SqliteType::Integer),
    (TypeRef::of::<u16>(), SqliteType::Integer),
    (TypeRef::of::<u32>(), SqliteType::Integer),
    (TypeRef::of::<f32>(), SqliteType::Real),
    (TypeRef::of::<f64>(), SqliteType::Real),
    (TypeRef::of::<char>(), SqliteType::Text),
    (TypeRef::of::<String>(), SqliteType::Text),
    (TypeRef::of::<Vec<u8>>(), SqliteType::Blob),
];

impl SqliteType {
    /// Returns the [`SqliteType`] a Rust type is stored as, if the type is natively supported.
    pub fn for_type(ty: TypeRef) -> Option<Self> {
        TYPE_MAPPING
            .iter()
            .find(|(mapped, _)| *mapped == ty)
            .map(|(_, sqlite_type)| *sqlite_type)
    }

    /// Returns whether a Rust type is natively supported.
    pub fn contains_type(ty: TypeRef) -> bool {
        Self::for_type(ty).is_some()
    }

    /// Returns the SQL keyword of this type.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqliteType::Integer => "INTEGER",
            SqliteType::Real => "REAL",
            SqliteType::Text => "TEXT",
            SqliteType::Blob => "BLOB",
        }
    }
}

impl fmt::Display for SqliteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_sql())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_map_native_types() {
        assert_eq!(
            SqliteType::for_type(TypeRef::of::<i64>()),
            Some(SqliteType::Integer)
        );
        assert_eq!(
            SqliteType::for_type(TypeRef::of::<bool>()),
            Some(SqliteType::Integer)
        );
        assert_eq!(
            SqliteType::for_type(TypeRef::of::<f32>()),
            Some(SqliteType::Real)
        );
        assert_eq!(
            SqliteType::for_type(TypeRef::of::<String>()),
            Some(SqliteType::Text)
        );
        assert_eq!(
            SqliteType::for_type(TypeRef::of::<Vec<u8>>()),
            Some(SqliteType::Blob)
        );
    }

    #[test]
    fn test_should_not_map_lossy_integers() {
        assert!(!SqliteType::contains_type(TypeRef::of::<u64>()));
        assert!(!SqliteType::contains_type(TypeRef::of::<usize>()));
        assert!(!SqliteType::contains_type(TypeRef::of::<i128>()));
    }

    #[test]
    fn test_should_render_sql_keyword() {
        assert_eq!(SqliteType::Integer.to_string(), "INTEGER");
        assert_eq!(SqliteType::Blob.as_sql(), "BLOB");
    }
}
