//! Error types for ObjectDict operations

use thiserror::Error;

use crate::value::Value;

/// Main error type for ObjectDict operations
#[derive(Error, Debug)]
pub enum ObjectDictError {
    /// Lookup of an absent entry, through either item or attribute access
    #[error("Key not found: {key:?}")]
    KeyNotFound {
        /// The missing key (or dotted path prefix)
        key: String,
    },

    /// Attribute access with a name that is not an identifier
    #[error("Invalid attribute name: {name:?} is not an identifier")]
    InvalidAttribute {
        /// The offending name
        name: String,
    },

    /// Attribute access with a name that denotes a mapping method
    #[error("Reserved attribute name: {name:?} is a mapping method")]
    ReservedAttribute {
        /// The offending name
        name: String,
    },

    /// Malformed dotted path
    #[error("Invalid path: {path:?}")]
    InvalidPath {
        /// The offending path
        path: String,
    },

    /// Path traversal hit a value that is not a dict
    #[error("Cannot traverse {key:?}: expected dict, found {found}")]
    NotADict {
        /// The key holding the non-dict value
        key: String,
        /// Type name of the value found there
        found: &'static str,
    },

    /// Type mismatch error
    #[error("Type error: expected {expected}, found {found}")]
    TypeMismatch {
        /// Expected type
        expected: &'static str,
        /// Actual type received
        found: &'static str,
    },

    /// Removal from an empty dict
    #[error("ObjectDict is empty")]
    Empty,

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ObjectDictError {
    pub(crate) fn not_found(key: impl Into<String>) -> Self {
        ObjectDictError::KeyNotFound { key: key.into() }
    }

    pub(crate) fn type_mismatch(expected: &'static str, found: &Value) -> Self {
        ObjectDictError::TypeMismatch {
            expected,
            found: type_name(found),
        }
    }

    /// True for lookup failures, regardless of access style.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ObjectDictError::KeyNotFound { .. })
    }
}

/// Result type alias for ObjectDict operations
pub type Result<T> = std::result::Result<T, ObjectDictError>;

/// Get a human-readable type name for a value
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Int(_) => "int",
        Value::Float(_) => "float",
        Value::String(_) => "string",
        Value::List(_) => "list",
        Value::Dict(_) => "dict",
    }
}
