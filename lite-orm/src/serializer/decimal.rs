use std::str::FromStr as _;

use rust_decimal::Decimal;

use crate::serializer::{SerializerError, SerializerResult, TypeSerializer};

/// Stores a [`Decimal`] as text, so that no precision is lost to a floating point column.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecimalSerializer;

impl TypeSerializer for DecimalSerializer {
    type Deserialized = Decimal;
    type Serialized = String;

    fn serialize(&self, value: &Decimal) -> String {
        value.to_string()
    }

    fn deserialize(&self, value: String) -> SerializerResult<Decimal> {
        Decimal::from_str(&value).map_err(|err| SerializerError::InvalidValue {
            type_name: "Decimal",
            reason: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_keep_precision() {
        let value = Decimal::new(1_234_567_890_123, 6);
        let text = DecimalSerializer.serialize(&value);
        assert_eq!(text, "1234567.890123");
        assert_eq!(DecimalSerializer.deserialize(text).expect("valid"), value);
    }

    #[test]
    fn test_should_fail_on_invalid_decimal() {
        assert!(DecimalSerializer.deserialize("twelve".to_string()).is_err());
    }
}
