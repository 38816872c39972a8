//! Three-state value wrapper distinguishing explicit null from absence.
//!
//! JSON has no way to say "this key was never set" — a lookup either finds a
//! value (possibly `null`) or nothing. Mapping pipelines need the difference:
//! an explicit null may be forwarded or skipped by policy, while an absent
//! key is a different condition entirely. `Slot` carries that distinction
//! across every read result and write input.

use serde_json::Value;

/// A resolved value, an explicit null, or nothing at all.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    /// A concrete value. Never holds `Value::Null`; constructors normalize
    /// nulls into [`Slot::Null`].
    Present(Value),
    /// The key exists and is set to `null`.
    Null,
    /// The key was never set.
    Missing,
}

impl Slot {
    /// Wrap a JSON value, normalizing `null` into [`Slot::Null`].
    #[inline]
    pub fn from_value(value: Value) -> Self {
        if value.is_null() {
            Slot::Null
        } else {
            Slot::Present(value)
        }
    }

    /// Wrap an optional value: `None` becomes [`Slot::Missing`].
    #[inline]
    pub fn from_option(value: Option<Value>) -> Self {
        match value {
            Some(v) => Slot::from_value(v),
            None => Slot::Missing,
        }
    }

    /// Wrap the result of a key lookup.
    #[inline]
    pub fn from_lookup(found: Option<&Value>) -> Self {
        Slot::from_option(found.cloned())
    }

    /// Returns true if this slot holds a concrete value.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }

    /// Returns true if this slot is an explicit null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Slot::Null)
    }

    /// Returns true if this slot is absent.
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Slot::Missing)
    }

    /// Borrow the concrete value, if any.
    #[inline]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Slot::Present(v) => Some(v),
            Slot::Null | Slot::Missing => None,
        }
    }

    /// Convert into the value a key should store: explicit null stores
    /// `null`, absence stores nothing.
    #[inline]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Slot::Present(v) => Some(v),
            Slot::Null => Some(Value::Null),
            Slot::Missing => None,
        }
    }

    /// Render into a JSON value, collapsing both absence states to `null`.
    ///
    /// Used where a value must occupy a position unconditionally, such as an
    /// element of an assembled sequence.
    #[inline]
    pub fn into_json(self) -> Value {
        self.into_value().unwrap_or(Value::Null)
    }

    /// Short name of what this slot holds, for diagnostics.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Slot::Present(v) => value_kind(v),
            Slot::Null => "null",
            Slot::Missing => "missing",
        }
    }
}

impl From<Value> for Slot {
    fn from(value: Value) -> Self {
        Slot::from_value(value)
    }
}

/// Get the type name of a JSON value.
#[inline]
pub fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
