use std::time::{Duration, SystemTime};

use crate::serializer::{SerializerError, SerializerResult, TypeSerializer};

/// Stores a [`SystemTime`] as the milliseconds elapsed since the Unix epoch.
///
/// Instants before the epoch are stored as negative values.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSerializer;

impl TypeSerializer for SystemTimeSerializer {
    type Deserialized = SystemTime;
    type Serialized = i64;

    fn serialize(&self, value: &SystemTime) -> i64 {
        match value.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            Err(err) => i64::try_from(err.duration().as_millis())
                .map(|millis| -millis)
                .unwrap_or(i64::MIN),
        }
    }

    fn deserialize(&self, value: i64) -> SerializerResult<SystemTime> {
        let offset = Duration::from_millis(value.unsigned_abs());
        let time = if value >= 0 {
            SystemTime::UNIX_EPOCH.checked_add(offset)
        } else {
            SystemTime::UNIX_EPOCH.checked_sub(offset)
        };

        time.ok_or(SerializerError::OutOfRange("SystemTime"))
    }
}
