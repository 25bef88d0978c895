use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Deserializes a string field, treating `null` like an absent field.
///
/// Numbers and other non-string values are still rejected so that the modem's
/// string-typed contract is never coerced.
pub fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserializes a record that must be a JSON object.
///
/// Derived struct deserialization also accepts sequences, which would let `[]`
/// slip through as an all-empty record. A `null` counts as an absent record.
pub fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Option::<Map<String, Value>>::deserialize(deserializer)? {
        Some(map) => from_object(map).map_err(D::Error::custom),
        None => Ok(T::default()),
    }
}

pub fn from_object<T>(map: Map<String, Value>) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    T::deserialize(Value::Object(map))
}
