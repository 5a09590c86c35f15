//! Stored-Record Codec
//!
//! Records come out of the key-value store as optional strings. Decoding
//! them is a three-way branch — parsed, missing, or corrupt — so the
//! "fall back to a default" policy is an explicit outcome the
//! repositories match on (and tests can reach) rather than a swallowed
//! exception.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Outcome of decoding one stored record.
#[derive(Debug)]
pub enum Decoded<T> {
    /// The stored record parsed cleanly.
    Parsed(T),
    /// Nothing is stored under the key yet.
    Missing,
    /// A record is present but unreadable; callers degrade to a default.
    Corrupt(serde_json::Error),
}

impl<T> Decoded<T> {
    /// True when decoding produced a usable value.
    pub fn is_parsed(&self) -> bool {
        matches!(self, Decoded::Parsed(_))
    }
}

/// Decode a raw record as read from the store.
pub fn decode_record<T: DeserializeOwned>(raw: Option<&str>) -> Decoded<T> {
    match raw {
        None => Decoded::Missing,
        Some(text) => match serde_json::from_str(text) {
            Ok(value) => Decoded::Parsed(value),
            Err(err) => Decoded::Corrupt(err),
        },
    }
}

/// Encode a record for storage. Record types hold only strings and
/// vectors, so serialization cannot fail in practice.
pub fn encode_record<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
