//! Conversions between models and wire maps

use std::hash::{Hash, Hasher};

use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Conversion of a model to and from its JSON object form
pub trait WireModel: Serialize + DeserializeOwned {
    /// Build a model from a wire map.
    ///
    /// Unknown keys are ignored. A field present under both its wire and
    /// snake_case name is rejected with [`Error::ConflictingKeys`].
    fn from_wire_map(map: Value) -> Result<Self> {
        serde_json::from_value(map).map_err(Error::from_wire)
    }

    /// Flatten to a wire map; unset fields are omitted
    fn to_wire_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::Wire(<serde_json::Error as serde::ser::Error>::custom(format!(
                "expected a JSON object, got {}",
                other
            )))),
        }
    }
}

impl<T: Serialize + DeserializeOwned> WireModel for T {}

/// Hash the serialized form; equal models serialize identically once
/// `-0.0` is folded into `0.0`.
pub(crate) fn hash_wire<T: Serialize, H: Hasher>(value: &T, state: &mut H) {
    let mut value = serde_json::to_value(value).unwrap_or(Value::Null);
    fold_negative_zero(&mut value);
    value.to_string().hash(state)
}

fn fold_negative_zero(value: &mut Value) {
    match value {
        Value::Number(n) if n.as_f64() == Some(0.0) && n.is_f64() => {
            *value = Value::from(0.0);
        }
        Value::Array(items) => items.iter_mut().for_each(fold_negative_zero),
        Value::Object(map) => map.values_mut().for_each(fold_negative_zero),
        _ => {}
    }
}

/// Deserialize an optional array, dropping `null` elements
pub(crate) fn skip_nulls<'de, D, T>(deserializer: D) -> std::result::Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items.map(|items| items.into_iter().flatten().collect()))
}

/// Read the discriminator of a polymorphic payload.
///
/// Accepts the wire or the snake_case key, but not both.
pub(crate) fn discriminator<E: serde::de::Error>(
    map: &Map<String, Value>,
    wire: &'static str,
    alias: &'static str,
) -> std::result::Result<Option<String>, E> {
    match (map.get(wire), map.get(alias)) {
        (Some(_), Some(_)) => Err(E::duplicate_field(wire)),
        (Some(v), None) | (None, Some(v)) => Ok(v.as_str().map(str::to_string)),
        (None, None) => Ok(None),
    }
}

/// Deserialize one variant of a polymorphic payload from its map
pub(crate) fn variant<T: DeserializeOwned, E: serde::de::Error>(
    map: Map<String, Value>,
) -> std::result::Result<T, E> {
    serde_json::from_value(Value::Object(map)).map_err(E::custom)
}

/// Serialize `inner` with the discriminator field added
pub(crate) fn serialize_tagged<S, T>(
    serializer: S,
    field: &str,
    tag: &str,
    inner: &T,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut map = match serde_json::to_value(inner).map_err(S::Error::custom)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    map.insert(field.to_string(), Value::String(tag.to_string()));
    map.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "skip_nulls", skip_serializing_if = "Option::is_none")]
        items: Option<Vec<String>>,
    }

    #[test]
    fn test_skip_nulls_drops_null_elements() {
        let holder = Holder::from_wire_map(json!({"items": ["a", null, "b"]})).unwrap();
        assert_eq!(holder.items, Some(vec!["a".to_string(), "b".to_string()]));

        let empty = Holder::from_wire_map(json!({})).unwrap();
        assert_eq!(empty.items, None);
        assert!(empty.to_wire_map().unwrap().is_empty());
    }

    #[test]
    fn test_discriminator_rejects_both_spellings() {
        let map = json!({"jobType": "DEFAULT", "job_type": "DEFAULT"});
        let result: std::result::Result<Option<String>, serde_json::Error> =
            discriminator(map.as_object().unwrap(), "jobType", "job_type");
        assert!(result.unwrap_err().to_string().starts_with("duplicate field"));
    }

    #[test]
    fn test_hash_folds_negative_zero() {
        use std::collections::hash_map::DefaultHasher;

        let hash = |v: Value| {
            let mut hasher = DefaultHasher::new();
            hash_wire(&v, &mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(json!({"x": [-0.0]})), hash(json!({"x": [0.0]})));
        assert_ne!(hash(json!({"x": 1.5})), hash(json!({"x": -1.5})));
    }

    #[test]
    fn test_to_wire_map_requires_object() {
        assert!(matches!("text".to_string().to_wire_map(), Err(Error::Wire(_))));
    }
}
