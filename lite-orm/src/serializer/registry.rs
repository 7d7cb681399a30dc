use std::any::Any;
use std::collections::HashMap;

use crate::serializer::{
    DecimalSerializer, SystemTimeSerializer, TypeSerializer, UuidSerializer,
};
use crate::types::TypeRef;

/// A registered serializer, with its type erased.
struct SerializerEntry {
    serialized: TypeRef,
    serializer: Box<dyn Any + Send + Sync>,
}

/// The set of [`TypeSerializer`]s known to a database, keyed by the field type they serialize.
///
/// At most one serializer per field type can be registered;
/// registering another serializer for the same type replaces the previous one.
#[derive(Default)]
pub struct SerializerRegistry {
    serializers: HashMap<TypeRef, SerializerEntry>,
}

impl SerializerRegistry {
    /// Creates a registry with the built-in serializers:
    ///
    /// - [`SystemTimeSerializer`]
    /// - [`UuidSerializer`]
    /// - [`DecimalSerializer`]
    pub fn with_defaults() -> Self {
        let mut registry = Self::default();
        registry.register(SystemTimeSerializer);
        registry.register(UuidSerializer);
        registry.register(DecimalSerializer);
        registry
    }

    /// Registers a serializer.
    pub fn register<S>(&mut self, serializer: S)
    where
        S: TypeSerializer,
    {
        let deserialized = TypeRef::of::<S::Deserialized>();
        let entry = SerializerEntry {
            serialized: TypeRef::of::<S::Serialized>(),
            serializer: Box::new(serializer),
        };
        if self.serializers.insert(deserialized, entry).is_some() {
            log::warn!("serializer for {deserialized} has been replaced");
        }
    }

    /// Returns the type the given field type is serialized to, if a serializer is registered for it.
    pub fn serialized_type_of(&self, ty: TypeRef) -> Option<TypeRef> {
        self.serializers.get(&ty).map(|entry| entry.serialized)
    }

    /// Returns whether a serializer is registered for the given field type.
    pub fn contains(&self, ty: TypeRef) -> bool {
        self.serializers.contains_key(&ty)
    }

    /// Returns the registered serializer of type `S`.
    ///
    /// Returns `None` if no serializer is registered for `S::Deserialized`,
    /// or if the registered one is not an `S`.
    pub fn get<S>(&self) -> Option<&S>
    where
        S: TypeSerializer,
    {
        self.serializers
            .get(&TypeRef::of::<S::Deserialized>())
            .and_then(|entry| entry.serializer.downcast_ref::<S>())
    }

    /// Returns the number of registered serializers.
    pub fn len(&self) -> usize {
        self.serializers.len()
    }

    /// Returns whether no serializer is registered.
    pub fn is_empty(&self) -> bool {
        self.serializers.is_empty()
    }
}

impl std::fmt::Debug for SerializerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.serializers
                    .iter()
                    .map(|(deserialized, entry)| (deserialized, entry.serialized)),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {

    use std::time::SystemTime;

    use super::*;
    use crate::serializer::SerializerResult;

    /// Stores a [`SystemTime`] as seconds, as text.
    struct SecondsAsText;

    impl TypeSerializer for SecondsAsText {
        type Deserialized = SystemTime;
        type Serialized = String;

        fn serialize(&self, value: &SystemTime) -> String {
            value
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
                .to_string()
        }

        fn deserialize(&self, value: String) -> SerializerResult<SystemTime> {
            let secs = value.parse::<u64>().map_err(|e| {
                crate::serializer::SerializerError::InvalidValue {
                    type_name: "SystemTime",
                    reason: e.to_string(),
                }
            })?;
            Ok(SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(secs))
        }
    }

    #[test]
    fn test_should_register_defaults() {
        let registry = SerializerRegistry::with_defaults();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains(TypeRef::of::<SystemTime>()));
        assert!(registry.contains(TypeRef::of::<uuid::Uuid>()));
        assert!(registry.contains(TypeRef::of::<rust_decimal::Decimal>()));
        assert!(!registry.contains(TypeRef::of::<String>()));
    }

    #[test]
    fn test_should_get_serialized_type() {
        let registry = SerializerRegistry::with_defaults();
        assert_eq!(
            registry.serialized_type_of(TypeRef::of::<SystemTime>()),
            Some(TypeRef::of::<i64>())
        );
        assert_eq!(registry.serialized_type_of(TypeRef::of::<i64>()), None);
    }

    #[test]
    fn test_should_replace_serializer_for_same_type() {
        let mut registry = SerializerRegistry::with_defaults();
        registry.register(SecondsAsText);

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.serialized_type_of(TypeRef::of::<SystemTime>()),
            Some(TypeRef::of::<String>())
        );
        assert!(registry.get::<SecondsAsText>().is_some());
        assert!(registry.get::<SystemTimeSerializer>().is_none());
    }

    #[test]
    fn test_should_get_typed_serializer() {
        let registry = SerializerRegistry::with_defaults();
        let serializer = registry
            .get::<UuidSerializer>()
            .expect("uuid serializer should be registered");
        let id = uuid::Uuid::nil();
        assert_eq!(
            serializer.serialize(&id),
            "00000000-0000-0000-0000-000000000000"
        );
    }
}
