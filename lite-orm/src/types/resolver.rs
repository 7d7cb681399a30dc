use std::collections::HashSet;

use crate::serializer::SerializerRegistry;
use crate::types::{SqliteType, TypeRef};

/// Resolves the [`SqliteType`] a field is stored as.
///
/// The lookup order is:
///
/// 1. a registered [`crate::serializer::TypeSerializer`] replaces the field type with its serialized type;
/// 2. the native type mapping of [`SqliteType::for_type`];
/// 3. a reference to another registered model is stored as its primary key, so as an integer.
pub struct TypeResolver<'a> {
    serializers: &'a SerializerRegistry,
    models: HashSet<TypeRef>,
}

impl<'a> TypeResolver<'a> {
    /// Creates a new resolver from the serializers and the models known to the database.
    pub fn new(
        serializers: &'a SerializerRegistry,
        models: impl IntoIterator<Item = TypeRef>,
    ) -> Self {
        Self {
            serializers,
            models: models.into_iter().collect(),
        }
    }

    /// Resolves the [`SqliteType`] for the given field type.
    ///
    /// Returns `None` if the type can't be stored.
    pub fn resolve(&self, ty: TypeRef) -> Option<SqliteType> {
        let ty = self.serializers.serialized_type_of(ty).unwrap_or(ty);

        SqliteType::for_type(ty).or_else(|| self.is_model(ty).then_some(SqliteType::Integer))
    }

    /// Returns whether the type is a registered model.
    pub fn is_model(&self, ty: TypeRef) -> bool {
        self.models.contains(&ty)
    }

    /// Returns the serializers used by the resolver.
    pub fn serializers(&self) -> &SerializerRegistry {
        self.serializers
    }
}

#[cfg(test)]
mod tests {

    use std::time::SystemTime;

    use super::*;

    struct Author;

    #[test]
    fn test_should_resolve_native_type() {
        let serializers = SerializerRegistry::default();
        let resolver = TypeResolver::new(&serializers, []);
        assert_eq!(
            resolver.resolve(TypeRef::of::<String>()),
            Some(SqliteType::Text)
        );
    }

    #[test]
    fn test_should_resolve_through_serializer() {
        let serializers = SerializerRegistry::with_defaults();
        let resolver = TypeResolver::new(&serializers, []);
        assert_eq!(
            resolver.resolve(TypeRef::of::<SystemTime>()),
            Some(SqliteType::Integer)
        );
        assert_eq!(
            resolver.resolve(TypeRef::of::<uuid::Uuid>()),
            Some(SqliteType::Text)
        );
    }

    #[test]
    fn test_should_resolve_model_reference_as_integer() {
        let serializers = SerializerRegistry::default();
        let resolver = TypeResolver::new(&serializers, [TypeRef::of::<Author>()]);
        assert!(resolver.is_model(TypeRef::of::<Author>()));
        assert_eq!(
            resolver.resolve(TypeRef::of::<Author>()),
            Some(SqliteType::Integer)
        );
    }

    #[test]
    fn test_should_not_resolve_unknown_type() {
        let serializers = SerializerRegistry::default();
        let resolver = TypeResolver::new(&serializers, []);
        assert_eq!(resolver.resolve(TypeRef::of::<Author>()), None);
        assert_eq!(resolver.resolve(TypeRef::of::<SystemTime>()), None);
    }
}
