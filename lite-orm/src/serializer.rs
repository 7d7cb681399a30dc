//! This module defines type serializers, which make types without a native SQLite
//! representation storable by converting them to one which has it.

mod decimal;
mod registry;
mod system_time;
mod uuid;

use thiserror::Error;

pub use self::decimal::DecimalSerializer;
pub use self::registry::SerializerRegistry;
pub use self::system_time::SystemTimeSerializer;
pub use self::uuid::UuidSerializer;

/// The result type for serializer operations.
pub type SerializerResult<T> = Result<T, SerializerError>;

/// An enum representing possible errors when converting a stored value back into its field type.
#[derive(Debug, Error)]
pub enum SerializerError {
    /// The stored value can't be parsed into the field type.
    #[error("Invalid value for {type_name}: {reason}")]
    InvalidValue {
        type_name: &'static str,
        reason: String,
    },
    /// The stored value is outside of the range of the field type.
    #[error("Value out of range for {0}")]
    OutOfRange(&'static str),
}

/// Converts a field type into a type natively supported by SQLite and back.
///
/// The [`TypeSerializer::Serialized`] type is used to resolve the column type, so it must be
/// supported by [`crate::types::SqliteType::for_type`].
pub trait TypeSerializer: Send + Sync + 'static {
    /// The type of the model field.
    type Deserialized: 'static;
    /// The type stored into the column.
    type Serialized: 'static;

    /// Converts the field value into its stored representation.
    fn serialize(&self, value: &Self::Deserialized) -> Self::Serialized;

    /// Converts a stored value back into the field value.
    fn deserialize(&self, value: Self::Serialized) -> SerializerResult<Self::Deserialized>;
}
