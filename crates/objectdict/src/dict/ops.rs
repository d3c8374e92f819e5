//! Standard trait implementations for ObjectDict

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::ops::{BitOr, BitOrAssign, Index, IndexMut};

use indexmap::IndexMap;

use super::ObjectDict;
use crate::value::Value;

// ═══════════════════════════════════════════════════════════════════
// Indexing
// ═══════════════════════════════════════════════════════════════════

/// Panics if the key is absent, like the standard maps.
/// Use [`ObjectDict::get_item`] for a fallible lookup.
impl Index<&str> for ObjectDict {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.entries.get(key) {
            Some(value) => value,
            None => panic!("key not found in ObjectDict: {:?}", key),
        }
    }
}

impl IndexMut<&str> for ObjectDict {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.entries.get_mut(key) {
            Some(value) => value,
            None => panic!("key not found in ObjectDict: {:?}", key),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Merge Operators
// ═══════════════════════════════════════════════════════════════════

impl BitOr for ObjectDict {
    type Output = ObjectDict;

    fn bitor(mut self, rhs: ObjectDict) -> ObjectDict {
        self.merge(rhs);
        self
    }
}

impl BitOr<&ObjectDict> for &ObjectDict {
    type Output = ObjectDict;

    fn bitor(self, rhs: &ObjectDict) -> ObjectDict {
        self.merged(rhs)
    }
}

impl BitOrAssign for ObjectDict {
    fn bitor_assign(&mut self, rhs: ObjectDict) {
        self.merge(rhs);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Collection Traits
// ═══════════════════════════════════════════════════════════════════

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ObjectDict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = ObjectDict::new();
        dict.update(iter);
        dict
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for ObjectDict {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.update(iter);
    }
}

impl IntoIterator for ObjectDict {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjectDict {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a mut ObjectDict {
    type Item = (&'a String, &'a mut Value);
    type IntoIter = indexmap::map::IterMut<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}

// ═══════════════════════════════════════════════════════════════════
// Conversions From Other Maps
// ═══════════════════════════════════════════════════════════════════

impl From<IndexMap<String, Value>> for ObjectDict {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<Value>> From<HashMap<K, V>> for ObjectDict {
    fn from(map: HashMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for ObjectDict {
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

// ═══════════════════════════════════════════════════════════════════
// Formatting
// ═══════════════════════════════════════════════════════════════════

impl fmt::Debug for ObjectDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", k, v)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for ObjectDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
