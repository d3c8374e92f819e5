//! Attribute-style access over the same storage as item access

use unicode_ident::{is_xid_continue, is_xid_start};

use super::ObjectDict;
use crate::error::{ObjectDictError, Result};
use crate::value::Value;

/// Names that denote mapping methods in the attribute namespace.
///
/// These can still be used as keys through the item API.
pub const RESERVED_NAMES: &[&str] = &[
    "clear",
    "copy",
    "fromkeys",
    "get",
    "items",
    "keys",
    "merge",
    "pop",
    "popitem",
    "setdefault",
    "to_dict",
    "update",
    "values",
];

/// Check whether `name` is usable as an attribute name.
///
/// Follows Unicode identifier syntax: the first character is `XID_Start`
/// or `_`, the rest are `XID_Continue`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_xid_start(c) || c == '_' => {}
        _ => return false,
    }
    chars.all(is_xid_continue)
}

/// Check whether `name` is reserved for a mapping method.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

fn check_attr(name: &str) -> Result<()> {
    if !is_identifier(name) {
        return Err(ObjectDictError::InvalidAttribute {
            name: name.to_string(),
        });
    }
    if is_reserved(name) {
        return Err(ObjectDictError::ReservedAttribute {
            name: name.to_string(),
        });
    }
    Ok(())
}

impl ObjectDict {
    /// Read an attribute (`obj.name`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidAttribute` or `ReservedAttribute` for names outside the
    /// attribute namespace, and `KeyNotFound` if the entry is absent.
    pub fn attr(&self, name: &str) -> Result<&Value> {
        check_attr(name)?;
        self.get_item(name)
    }

    /// Mutable counterpart of [`ObjectDict::attr`].
    pub fn attr_mut(&mut self, name: &str) -> Result<&mut Value> {
        check_attr(name)?;
        self.get_item_mut(name)
    }

    /// Assign an attribute (`obj.name = value`), returning the previous value.
    pub fn set_attr(&mut self, name: &str, value: impl Into<Value>) -> Result<Option<Value>> {
        check_attr(name)?;
        Ok(self.insert(name, value))
    }

    /// Delete an attribute (`del obj.name`), returning the removed value.
    pub fn del_attr(&mut self, name: &str) -> Result<Value> {
        check_attr(name)?;
        self.del_item(name)
    }

    /// Check whether `name` is a readable attribute.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_ok()
    }

    /// Keys reachable through the attribute API, in insertion order.
    pub fn attr_names(&self) -> impl Iterator<Item = &str> {
        self.keys()
            .map(String::as_str)
            .filter(|k| check_attr(k).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("name"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("x1"));
        assert!(is_identifier("café"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("with-dash"));
        assert!(!is_identifier("with space"));
        assert!(!is_identifier("a.b"));
    }

    #[test]
    fn test_is_identifier_rejects_non_xid_numerics() {
        assert!(is_identifier("a1"));
        assert!(is_identifier("_"));
        assert!(!is_identifier("a²"));
        assert!(!is_identifier("half½"));
        assert!(!is_identifier("²a"));
    }

    #[test]
    fn test_reserved() {
        assert!(is_reserved("keys"));
        assert!(is_reserved("update"));
        assert!(!is_reserved("name"));
    }

    #[test]
    fn test_set_attr_visible_as_item() {
        let mut d = ObjectDict::new();
        assert_eq!(d.set_attr("a", 1).unwrap(), None);
        assert_eq!(d.get_item("a").unwrap(), &Value::Int(1));
        assert_eq!(d.set_attr("a", 2).unwrap(), Some(Value::Int(1)));
    }

    #[test]
    fn test_attr_mut() {
        let mut d = ObjectDict::from_map([("n", 1)]);
        *d.attr_mut("n").unwrap() = Value::Int(2);
        assert_eq!(d.get("n"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_invalid_attribute_keeps_item_access() {
        let mut d = ObjectDict::new();
        d.insert("not valid", 1);
        assert!(matches!(
            d.attr("not valid"),
            Err(ObjectDictError::InvalidAttribute { .. })
        ));
        assert!(d.get_item("not valid").is_ok());
    }

    #[test]
    fn test_reserved_attribute_keeps_item_access() {
        let mut d = ObjectDict::new();
        assert!(matches!(
            d.set_attr("keys", 1),
            Err(ObjectDictError::ReservedAttribute { .. })
        ));
        d.insert("keys", 1);
        assert!(matches!(
            d.del_attr("keys"),
            Err(ObjectDictError::ReservedAttribute { .. })
        ));
        assert_eq!(d.get_item("keys").unwrap(), &Value::Int(1));
    }

    #[test]
    fn test_attr_names() {
        let mut d = ObjectDict::new();
        d.insert("ok", 1);
        d.insert("9bad", 2);
        d.insert("items", 3);
        d.insert("_also_ok", 4);
        let names: Vec<_> = d.attr_names().collect();
        assert_eq!(names, vec!["ok", "_also_ok"]);
    }
}
