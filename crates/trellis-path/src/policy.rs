//! Write-acceptance policy.
//!
//! The policy is evaluated before any mutation: a rejected value leaves the
//! target tree untouched and the write reports `false`, at which point the
//! host runs [`cleanup`](crate::cleanup).

use crate::Slot;
use serde::{Deserialize, Serialize};

/// Governs whether a resolved value is actually written.
///
/// The default policy accepts everything, including explicit nulls and
/// absent values. `preserve_null` is a per-write override that defeats
/// `skip_null` and `strict` for explicit nulls only — an absent value is
/// still rejected by `skip_missing` or `strict`.
///
/// # Examples
///
/// ```
/// use trellis_path::{Slot, WritePolicy};
///
/// let policy = WritePolicy::new().with_skip_null(true);
/// assert!(!policy.accepts(&Slot::Null));
/// assert!(policy.with_preserve_null(true).accepts(&Slot::Null));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WritePolicy {
    /// Reject explicit nulls.
    pub skip_null: bool,
    /// Reject absent values.
    pub skip_missing: bool,
    /// Reject both absence states.
    pub strict: bool,
    /// Accept explicit nulls even under `skip_null` or `strict`.
    pub preserve_null: bool,
}

impl WritePolicy {
    /// The permissive default: everything is written.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `skip_null` (builder pattern).
    #[inline]
    pub fn with_skip_null(mut self, skip: bool) -> Self {
        self.skip_null = skip;
        self
    }

    /// Set `skip_missing` (builder pattern).
    #[inline]
    pub fn with_skip_missing(mut self, skip: bool) -> Self {
        self.skip_missing = skip;
        self
    }

    /// Set `strict` (builder pattern).
    #[inline]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set `preserve_null` (builder pattern).
    #[inline]
    pub fn with_preserve_null(mut self, preserve: bool) -> Self {
        self.preserve_null = preserve;
        self
    }

    /// Decide whether `value` should be written.
    pub fn accepts(&self, value: &Slot) -> bool {
        match value {
            Slot::Present(_) => true,
            Slot::Null => self.preserve_null || !(self.skip_null || self.strict),
            Slot::Missing => !(self.skip_missing || self.strict),
        }
    }
}
