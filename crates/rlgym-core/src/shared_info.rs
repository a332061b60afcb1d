//! Per-episode shared context threaded through every condition call.

use indexmap::IndexMap;

/// A value stored in [`SharedInfo`].
#[derive(Clone, Debug, PartialEq)]
pub enum SharedValue {
    /// Boolean flag.
    Bool(bool),
    /// Signed integer, e.g. a counter.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Free-form text.
    Text(String),
}

/// String-keyed mutable context owned by the harness.
///
/// Passed by `&mut` into every `reset` and `is_done` call of a step so that
/// conditions can exchange state or keep per-episode counters. Each
/// environment instance owns its own `SharedInfo`; nothing here is global.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SharedInfo {
    entries: IndexMap<String, SharedValue>,
}

impl SharedInfo {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry.
    pub fn get(&self, key: &str) -> Option<&SharedValue> {
        self.entries.get(key)
    }

    /// Insert or replace an entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: SharedValue) -> Option<SharedValue> {
        self.entries.insert(key.into(), value)
    }

    /// Remove an entry, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<SharedValue> {
        self.entries.shift_remove(key)
    }

    /// Whether an entry exists for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Read an integer entry. Returns `None` if absent or of another kind.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(SharedValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Add `delta` to an integer entry, creating it at zero first.
    ///
    /// An existing non-integer entry under `key` is replaced. The counter
    /// saturates at the `i64` limits.
    pub fn increment(&mut self, key: &str, delta: i64) -> i64 {
        let next = self.get_int(key).unwrap_or(0).saturating_add(delta);
        self.entries.insert(key.to_string(), SharedValue::Int(next));
        next
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the context is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SharedValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
