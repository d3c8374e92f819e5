//! Dotted-path access through nested dicts (`"server.http.port"`)

use indexmap::map::Entry;
use tracing::trace;

use super::ObjectDict;
use crate::error::{type_name, ObjectDictError, Result};
use crate::value::Value;

/// A validated dotted path split into its segments.
struct Path<'p> {
    raw: &'p str,
    segments: Vec<&'p str>,
}

impl<'p> Path<'p> {
    fn parse(raw: &'p str) -> Result<Self> {
        let segments: Vec<&str> = raw.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ObjectDictError::InvalidPath {
                path: raw.to_string(),
            });
        }
        Ok(Self { raw, segments })
    }

    /// Segments leading to the parent dict, and the final key.
    fn split(&self) -> (&[&'p str], &'p str) {
        let last = self.segments.len() - 1;
        (&self.segments[..last], self.segments[last])
    }

    /// The path up to and including segment `index`.
    fn prefix(&self, index: usize) -> String {
        self.segments[..=index].join(".")
    }

    fn not_a_dict(&self, index: usize, found: &Value) -> ObjectDictError {
        ObjectDictError::NotADict {
            key: self.prefix(index),
            found: type_name(found),
        }
    }

    fn walk<'d>(&self, mut dict: &'d ObjectDict) -> Result<&'d ObjectDict> {
        let (parents, _) = self.split();
        for (i, seg) in parents.iter().enumerate() {
            dict = match dict.get(seg) {
                Some(Value::Dict(d)) => d,
                Some(other) => return Err(self.not_a_dict(i, other)),
                None => return Err(ObjectDictError::not_found(self.prefix(i))),
            };
        }
        Ok(dict)
    }

    fn walk_mut<'d>(&self, mut dict: &'d mut ObjectDict) -> Result<&'d mut ObjectDict> {
        let (parents, _) = self.split();
        for (i, seg) in parents.iter().enumerate() {
            dict = match dict.get_mut(seg) {
                Some(Value::Dict(d)) => d,
                Some(other) => return Err(self.not_a_dict(i, other)),
                None => return Err(ObjectDictError::not_found(self.prefix(i))),
            };
        }
        Ok(dict)
    }
}

impl ObjectDict {
    /// Read a value through nested dicts.
    ///
    /// # Example
    ///
    /// ```
    /// use objectdict::{ObjectDict, Value};
    ///
    /// let mut d = ObjectDict::new();
    /// d.set_path("server.http.port", 8080).unwrap();
    ///
    /// assert_eq!(d.get_path("server.http.port").unwrap(), &Value::Int(8080));
    /// assert!(d.get_path("server.grpc").unwrap_err().is_not_found());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` for an empty path or segment, `KeyNotFound` naming
    /// the missing prefix, and `NotADict` when an intermediate value is not a
    /// dict.
    pub fn get_path(&self, path: &str) -> Result<&Value> {
        let path = Path::parse(path)?;
        let (_, last) = path.split();
        path.walk(self)?
            .get(last)
            .ok_or_else(|| ObjectDictError::not_found(path.raw))
    }

    /// Mutable counterpart of [`ObjectDict::get_path`].
    pub fn get_path_mut(&mut self, path: &str) -> Result<&mut Value> {
        let path = Path::parse(path)?;
        let (_, last) = path.split();
        path.walk_mut(self)?
            .get_mut(last)
            .ok_or_else(|| ObjectDictError::not_found(path.raw))
    }

    /// Write a value through nested dicts, creating missing intermediates.
    ///
    /// Returns the value previously stored at the path, if any.
    pub fn set_path(&mut self, path: &str, value: impl Into<Value>) -> Result<Option<Value>> {
        let path = Path::parse(path)?;
        let (parents, last) = path.split();

        let mut dict = self;
        for (i, seg) in parents.iter().enumerate() {
            let slot = match dict.entries.entry((*seg).to_string()) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => {
                    trace!(path = %path.prefix(i), "creating intermediate dict");
                    e.insert(Value::empty_dict())
                }
            };
            dict = match slot {
                Value::Dict(d) => d,
                other => return Err(path.not_a_dict(i, other)),
            };
        }
        Ok(dict.insert(last, value))
    }

    /// Remove the value at a dotted path, returning it.
    pub fn del_path(&mut self, path: &str) -> Result<Value> {
        let path = Path::parse(path)?;
        let (_, last) = path.split();
        path.walk_mut(self)?
            .remove(last)
            .ok_or_else(|| ObjectDictError::not_found(path.raw))
    }

    /// Check whether a dotted path resolves to a value.
    pub fn has_path(&self, path: &str) -> bool {
        self.get_path(path).is_ok()
    }
}
