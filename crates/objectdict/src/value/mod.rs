//! Value representation for dict entries

mod display;
mod impls;

use std::sync::Arc;

use crate::dict::ObjectDict;

/// A dynamically typed value stored in an [`ObjectDict`].
///
/// Values are organized into two tiers:
/// - Tier 1: Inline scalars (no allocation)
/// - Tier 2: Heap-allocated compound types
///
/// `String` and `List` payloads are `Arc`-wrapped, so cloning a value shares
/// them. Nested dicts are owned so they can be mutated in place.
#[derive(Clone, Default, PartialEq)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Inline Scalars
    // ═══════════════════════════════════════════════════════════════════
    /// Absence of a value (`null` in JSON)
    #[default]
    Null,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Heap-Allocated Compound Types
    // ═══════════════════════════════════════════════════════════════════
    /// Shared string
    String(Arc<String>),

    /// Shared, heterogeneous list
    List(Arc<Vec<Value>>),

    /// Nested dict
    Dict(ObjectDict),
}
