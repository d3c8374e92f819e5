//! Value trait implementations: constructors, predicates, extractors, From traits

use std::sync::Arc;

use super::*;
use crate::error::{ObjectDictError, Result};

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::new(s.into()))
    }

    /// Create a list value
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::new(items))
    }

    /// Create a nested dict value
    pub fn dict(d: ObjectDict) -> Self {
        Value::Dict(d)
    }

    /// Create an empty nested dict value
    pub fn empty_dict() -> Self {
        Value::Dict(ObjectDict::new())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if value is an integer
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if value is a float
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if value is numeric (integer or float)
    pub fn is_numeric(&self) -> bool {
        self.is_int() || self.is_float()
    }

    /// Check if value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if value is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Check if value is a nested dict
    pub fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════
    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract integer value
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract as f64 (widens integers)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extract list as slice
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Extract nested dict
    pub fn as_dict(&self) -> Option<&ObjectDict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Extract nested dict mutably
    pub fn as_dict_mut(&mut self) -> Option<&mut ObjectDict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Extract nested dict, or fail with a type error.
    ///
    /// Convenient for js-like chains: `d.attr("a")?.try_dict()?.attr("b")`.
    pub fn try_dict(&self) -> Result<&ObjectDict> {
        self.as_dict()
            .ok_or_else(|| ObjectDictError::type_mismatch("dict", self))
    }

    /// Mutable counterpart of [`Value::try_dict`].
    pub fn try_dict_mut(&mut self) -> Result<&mut ObjectDict> {
        match self {
            Value::Dict(d) => Ok(d),
            other => Err(ObjectDictError::type_mismatch("dict", other)),
        }
    }

    /// Consume the value and take the nested dict out of it
    pub fn into_dict(self) -> Result<ObjectDict> {
        match self {
            Value::Dict(d) => Ok(d),
            other => Err(ObjectDictError::type_mismatch("dict", &other)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<ObjectDict> for Value {
    fn from(d: ObjectDict) -> Self {
        Value::Dict(d)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::list(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
