//! # ObjectDict
//!
//! A js-like dictionary: an insertion-ordered `String -> Value` mapping whose
//! entries can be reached both by key and by attribute name.
//!
//! Rust has no dynamic attribute resolution, so "dot syntax" is spelled as
//! the `attr` method family (`attr`, `set_attr`, `del_attr`, `has_attr`),
//! backed by the same storage as the item methods. Dotted paths
//! (`"a.b.c"`) walk nested dicts.
//!
//! ## Architecture
//!
//! - **Value**: dynamically typed payload (`Null`, `Bool`, `Int`, `Float`,
//!   `String`, `List`, `Dict`)
//! - **ObjectDict**: item access, attribute access, paths, merge operators
//! - **JSON**: serde impls and text conversion
//!
//! ```
//! use objectdict::{objdict, Value};
//!
//! let mut d = objdict! { "a" => 1, "b" => 2 };
//! d.set_attr("c", 3).unwrap();
//!
//! assert_eq!(d["c"], Value::Int(3));
//! assert!(d.attr("missing").unwrap_err().is_not_found());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dict;
pub mod error;
pub mod json;
mod macros;
pub mod value;

// Re-export main types
pub use dict::{is_identifier, is_reserved, ObjectDict, RESERVED_NAMES};
pub use error::{type_name, ObjectDictError, Result};
pub use value::Value;

/// ObjectDict version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
