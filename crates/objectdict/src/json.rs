//! serde support and JSON text conversion

use std::fmt;
use std::sync::Arc;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::dict::ObjectDict;
use crate::error::{ObjectDictError, Result};
use crate::value::Value;

// ═══════════════════════════════════════════════════════════════════
// Serialize
// ═══════════════════════════════════════════════════════════════════

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => serializer.collect_seq(items.iter()),
            Value::Dict(d) => d.serialize(serializer),
        }
    }
}

impl Serialize for ObjectDict {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// ═══════════════════════════════════════════════════════════════════
// Deserialize
// ═══════════════════════════════════════════════════════════════════

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON-like value")
    }

    fn visit_unit<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Value, D::Error> {
        Deserialize::deserialize(d)
    }

    fn visit_bool<E>(self, b: bool) -> std::result::Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E>(self, n: i64) -> std::result::Result<Value, E> {
        Ok(Value::Int(n))
    }

    fn visit_u64<E>(self, n: u64) -> std::result::Result<Value, E> {
        // Integers beyond i64 degrade to floats
        Ok(i64::try_from(n).map_or(Value::Float(n as f64), Value::Int))
    }

    fn visit_f64<E>(self, n: f64) -> std::result::Result<Value, E> {
        Ok(Value::Float(n))
    }

    fn visit_str<E>(self, s: &str) -> std::result::Result<Value, E> {
        Ok(Value::string(s))
    }

    fn visit_string<E>(self, s: String) -> std::result::Result<Value, E> {
        Ok(Value::string(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(Arc::new(items)))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<Value, A::Error> {
        DictVisitor.visit_map(map).map(Value::Dict)
    }
}

struct DictVisitor;

impl<'de> Visitor<'de> for DictVisitor {
    type Value = ObjectDict;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<ObjectDict, A::Error> {
        let mut dict = ObjectDict::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            dict.insert(key, value);
        }
        Ok(dict)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        d.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for ObjectDict {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        d.deserialize_map(DictVisitor)
    }
}

// ═══════════════════════════════════════════════════════════════════
// serde_json Interop
// ═══════════════════════════════════════════════════════════════════

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::string(s),
            serde_json::Value::Array(items) => {
                Value::list(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Dict(map.into_iter().collect()),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(n) => serde_json::Value::from(n),
            // NaN and infinities have no JSON form
            Value::Float(n) => serde_json::Number::from_f64(n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s.as_ref().clone()),
            Value::List(items) => serde_json::Value::Array(
                items.iter().cloned().map(serde_json::Value::from).collect(),
            ),
            Value::Dict(d) => serde_json::Value::Object(
                d.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl ObjectDict {
    /// Parse a JSON object into a dict. Nested objects become nested dicts.
    ///
    /// # Example
    ///
    /// ```
    /// use objectdict::{ObjectDict, Value};
    ///
    /// let d = ObjectDict::from_json(r#"{"user": {"name": "ada"}}"#).unwrap();
    /// assert_eq!(d.get_path("user.name").unwrap(), &Value::from("ada"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Json` for malformed text and `TypeMismatch` when the top-level
    /// value is not an object.
    pub fn from_json(text: &str) -> Result<ObjectDict> {
        let value: Value = serde_json::from_str(text)?;
        debug!(bytes = text.len(), "parsed JSON");
        match value {
            Value::Dict(d) => Ok(d),
            other => Err(ObjectDictError::type_mismatch("dict", &other)),
        }
    }

    /// Serialize to compact JSON text, keys in insertion order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON text, keys in insertion order.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_nested() {
        let d = ObjectDict::from_json(r#"{"a": 1, "b": {"c": [true, null, 2.5]}}"#).unwrap();
        assert_eq!(d.get("a"), Some(&Value::Int(1)));
        let c = d.get_path("b.c").unwrap();
        assert_eq!(
            c.as_list(),
            Some(&[Value::Bool(true), Value::Null, Value::Float(2.5)][..])
        );
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = ObjectDict::from_json("[1, 2]").unwrap_err();
        assert!(matches!(
            err,
            ObjectDictError::TypeMismatch {
                expected: "dict",
                found: "list"
            }
        ));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = ObjectDict::from_json("{").unwrap_err();
        assert!(matches!(err, ObjectDictError::Json(_)));
    }

    #[test]
    fn test_large_u64_becomes_float() {
        let d = ObjectDict::from_json(r#"{"big": 18446744073709551615}"#).unwrap();
        assert!(d["big"].is_float());
    }

    #[test]
    fn test_to_json_keeps_order() {
        let d = ObjectDict::from_map([("z", 1), ("a", 2)]);
        assert_eq!(d.to_json().unwrap(), r#"{"z":1,"a":2}"#);
    }

    #[test]
    fn test_serde_json_value_interop() {
        let json = serde_json::json!({"n": 1, "list": ["x"], "obj": {"k": false}});
        let value = Value::from(json.clone());
        assert!(value.as_dict().unwrap().get_path("obj.k").is_ok());
        assert_eq!(serde_json::Value::from(value), json);
    }

    #[test]
    fn test_serde_json_value_keeps_insertion_order() {
        let json = serde_json::Value::from(Value::Dict(crate::objdict! { "z" => 1, "a" => 2 }));
        let json_keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(json_keys, vec!["z", "a"]);

        let back = Value::from(json).into_dict().unwrap();
        let keys: Vec<_> = back.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_nan_becomes_null() {
        assert_eq!(
            serde_json::Value::from(Value::Float(f64::NAN)),
            serde_json::Value::Null
        );
    }
}
