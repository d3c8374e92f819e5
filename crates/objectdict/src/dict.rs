//! The `ObjectDict` container: an ordered string-keyed mapping

mod attr;
mod ops;
mod path;

pub use attr::{is_identifier, is_reserved, RESERVED_NAMES};

use indexmap::map::{Entry, Iter, IterMut, Keys, Values, ValuesMut};
use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ObjectDictError, Result};
use crate::value::Value;

/// A dictionary with attribute-style access to its keys.
///
/// Entries live in a single insertion-ordered map. The item API
/// (`get_item`, `insert`, `del_item` ...) and the attribute API
/// (`attr`, `set_attr`, `del_attr` ...) are two views of that storage, so a
/// value written through one is visible through the other.
///
/// # Example
///
/// ```
/// use objectdict::{ObjectDict, Value};
///
/// let mut d = ObjectDict::from_map([("a", 1), ("b", 2)]);
///
/// assert_eq!(d.attr("a").unwrap(), &Value::Int(1));
/// assert_eq!(d.get_item("b").unwrap(), &Value::Int(2));
///
/// d.set_attr("c", "three").unwrap();
/// assert_eq!(d["c"], Value::from("three"));
///
/// d.del_item("a").unwrap();
/// assert!(!d.has_attr("a"));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct ObjectDict {
    entries: IndexMap<String, Value>,
}

impl ObjectDict {
    /// Create a new empty dict.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create an empty dict with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Build a dict from an existing mapping or any sequence of pairs.
    ///
    /// Later duplicates overwrite earlier ones.
    pub fn from_map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        pairs.into_iter().collect()
    }

    /// Build a dict mapping every key to a clone of `value`.
    pub fn from_keys<I, K>(keys: I, value: impl Into<Value>) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let value = value.into();
        keys.into_iter().map(|k| (k, value.clone())).collect()
    }

    /// Consume the dict and return the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.entries
    }

    // ═══════════════════════════════════════════════════════════════════
    // Item Access
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a key mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Look up a key, failing with `KeyNotFound` when absent.
    pub fn get_item(&self, key: &str) -> Result<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| ObjectDictError::not_found(key))
    }

    /// Mutable counterpart of [`ObjectDict::get_item`].
    pub fn get_item_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| ObjectDictError::not_found(key))
    }

    /// Look up a key, falling back to `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.entries.get(key).unwrap_or(default)
    }

    /// Insert or replace an entry, returning the previous value.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Assign an entry (item-style assignment).
    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.insert(key, value);
    }

    /// Remove an entry if present, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Remove an entry, failing with `KeyNotFound` when absent.
    pub fn del_item(&mut self, key: &str) -> Result<Value> {
        self.remove(key).ok_or_else(|| ObjectDictError::not_found(key))
    }

    /// Remove and return an entry, failing with `KeyNotFound` when absent.
    pub fn pop(&mut self, key: &str) -> Result<Value> {
        self.del_item(key)
    }

    /// Remove and return an entry, or return `default` when absent.
    pub fn pop_or(&mut self, key: &str, default: impl Into<Value>) -> Value {
        self.remove(key).unwrap_or_else(|| default.into())
    }

    /// Remove and return the most recently inserted entry.
    pub fn pop_item(&mut self) -> Result<(String, Value)> {
        self.entries.pop().ok_or(ObjectDictError::Empty)
    }

    /// Return the entry for `key`, inserting `default` first if absent.
    pub fn set_default(&mut self, key: impl Into<String>, default: impl Into<Value>) -> &mut Value {
        match self.entries.entry(key.into()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default.into()),
        }
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dict has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration
    // ═══════════════════════════════════════════════════════════════════

    /// Keys in insertion order.
    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.entries.keys()
    }

    /// Values in insertion order.
    pub fn values(&self) -> Values<'_, String, Value> {
        self.entries.values()
    }

    /// Mutable values in insertion order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, String, Value> {
        self.entries.values_mut()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Mutable entries in insertion order.
    pub fn iter_mut(&mut self) -> IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Merging
    // ═══════════════════════════════════════════════════════════════════

    /// Insert every pair from `pairs`, overwriting existing keys.
    pub fn update<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    /// Merge `other` into this dict.
    ///
    /// Keys of `other` are inserted in `other`'s order; overlapping keys take
    /// `other`'s value and keep their position here.
    pub fn merge(&mut self, other: ObjectDict) {
        debug!(into = self.len(), from = other.len(), "merging dicts");
        self.entries.extend(other.entries);
    }

    /// Non-mutating merge: a copy of this dict with `other` merged in.
    pub fn merged(&self, other: &ObjectDict) -> ObjectDict {
        let mut out = self.clone();
        out.merge(other.clone());
        out
    }

    /// Merge `other` into this dict, recursing where both sides hold a dict.
    pub fn deep_merge(&mut self, other: ObjectDict) {
        debug!(into = self.len(), from = other.len(), "deep merging dicts");
        for (key, value) in other.entries {
            if let Value::Dict(theirs) = value {
                if let Some(Value::Dict(mine)) = self.entries.get_mut(&key) {
                    mine.deep_merge(theirs);
                    continue;
                }
                self.entries.insert(key, Value::Dict(theirs));
            } else {
                self.entries.insert(key, value);
            }
        }
    }
}
