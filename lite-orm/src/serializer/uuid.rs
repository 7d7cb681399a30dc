use ::uuid::Uuid;

use crate::serializer::{SerializerError, SerializerResult, TypeSerializer};

/// Stores a [`Uuid`] as its hyphenated text form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidSerializer;

impl TypeSerializer for UuidSerializer {
    type Deserialized = Uuid;
    type Serialized = String;

    fn serialize(&self, value: &Uuid) -> String {
        value.hyphenated().to_string()
    }

    fn deserialize(&self, value: String) -> SerializerResult<Uuid> {
        Uuid::parse_str(&value).map_err(|err| SerializerError::InvalidValue {
            type_name: "Uuid",
            reason: err.to_string(),
        })
    }
}
