//! Dotted path grammar for navigating nested documents.
//!
//! A path is a sequence of `.`-separated field names. A segment may carry a
//! trailing `[*]` marker, meaning "every element of the sequence stored under
//! this field". Paths are parsed once at the mapping boundary and reused for
//! every document that flows through it.

use crate::error::{PathError, PathResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A single segment of a path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Seg {
    /// Plain field access: `name`.
    Field(String),
    /// Field holding a sequence, visited element-wise: `name[*]`.
    Every(String),
}

impl Seg {
    /// Create a plain field segment.
    #[inline]
    pub fn field(name: impl Into<String>) -> Self {
        Seg::Field(name.into())
    }

    /// Create a wildcard segment.
    #[inline]
    pub fn every(name: impl Into<String>) -> Self {
        Seg::Every(name.into())
    }

    /// The field name, with any marker stripped.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Seg::Field(name) | Seg::Every(name) => name,
        }
    }

    /// Returns true if this segment carries the `[*]` marker.
    #[inline]
    pub fn is_every(&self) -> bool {
        matches!(self, Seg::Every(_))
    }
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Field(name) => write!(f, "{name}"),
            Seg::Every(name) => write!(f, "{name}[*]"),
        }
    }
}

/// A parsed path into a JSON document.
///
/// Paths are immutable once parsed. `Display` renders the original dotted
/// form, so a path survives a serialize/deserialize round trip unchanged.
///
/// # Examples
///
/// ```
/// use trellis_path::Path;
///
/// let path = Path::parse("user.tags[*].name").unwrap();
/// assert_eq!(path.len(), 3);
/// assert!(path.has_wildcard());
/// assert_eq!(path.to_string(), "user.tags[*].name");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Seg>);

impl Path {
    /// Parse a dotted path string.
    ///
    /// Accepted syntax: field names joined by `.`, where a name may end with
    /// the literal `[*]` wildcard marker. Numeric indices, filters, and
    /// escape sequences are not recognized.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] for an empty path, an empty segment, or a
    /// segment with brackets anywhere but the trailing marker.
    pub fn parse(input: &str) -> PathResult<Path> {
        if input.is_empty() {
            return Err(PathError::empty());
        }

        let mut segs = Vec::new();
        for (index, token) in input.split('.').enumerate() {
            if token.is_empty() {
                return Err(PathError::empty_segment(index));
            }
            let (name, every) = match token.strip_suffix("[*]") {
                Some(name) => (name, true),
                None => (token, false),
            };
            if name.is_empty() || name.contains('[') || name.contains(']') {
                return Err(PathError::invalid_segment(token));
            }
            segs.push(if every {
                Seg::every(name)
            } else {
                Seg::field(name)
            });
        }
        Ok(Path(segs))
    }

    /// Create a path from a vector of segments.
    #[inline]
    pub fn from_segments(segments: Vec<Seg>) -> Self {
        Self(segments)
    }

    /// Get the segments of this path.
    #[inline]
    pub fn segments(&self) -> &[Seg] {
        &self.0
    }

    /// Check if this path has no segments.
    ///
    /// Parsed paths are never empty; empty paths only arise as the trailing
    /// sub-path of [`split_at_wildcards`](Self::split_at_wildcards).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of segments in this path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the first segment.
    #[inline]
    pub fn first(&self) -> Option<&Seg> {
        self.0.first()
    }

    /// Get the last segment.
    #[inline]
    pub fn last(&self) -> Option<&Seg> {
        self.0.last()
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Seg> {
        self.0.iter()
    }

    /// Returns true if any segment carries the wildcard marker.
    #[inline]
    pub fn has_wildcard(&self) -> bool {
        self.0.iter().any(Seg::is_every)
    }

    /// Count the wildcard markers in this path.
    #[inline]
    pub fn wildcard_count(&self) -> usize {
        self.0.iter().filter(|s| s.is_every()).count()
    }

    /// Split this path at its wildcard markers into plain sub-paths.
    ///
    /// A path with `n` markers yields `n + 1` pieces. Piece 0 runs up to and
    /// including the first marked field (marker stripped), pieces `1..n`
    /// likewise cover the stretch between consecutive markers, and piece `n`
    /// is the suffix after the last marker — possibly empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_path::Path;
    ///
    /// let path = Path::parse("a.b[*].c[*].d").unwrap();
    /// let parts = path.split_at_wildcards();
    /// assert_eq!(parts.len(), 3);
    /// assert_eq!(parts[0].to_string(), "a.b");
    /// assert_eq!(parts[1].to_string(), "c");
    /// assert_eq!(parts[2].to_string(), "d");
    /// ```
    pub fn split_at_wildcards(&self) -> Vec<Path> {
        let mut parts = Vec::with_capacity(self.wildcard_count() + 1);
        let mut current = Vec::new();
        for seg in &self.0 {
            current.push(Seg::field(seg.name()));
            if seg.is_every() {
                parts.push(Path(std::mem::take(&mut current)));
            }
        }
        parts.push(Path(current));
        parts
    }

    /// For a path with a marker: the plain prefix up to the first marked
    /// field, split into the path to its parent container and the sequence
    /// field name. `None` when the path is plain.
    pub fn before_wildcard(&self) -> Option<(Path, &str)> {
        let at = self.0.iter().position(Seg::is_every)?;
        let prefix = self.0[..at].iter().map(|s| Seg::field(s.name())).collect();
        Some((Path(prefix), self.0[at].name()))
    }

    /// Everything after the first marker. `None` when the path is plain;
    /// empty when the marker ends the path. May itself contain markers.
    pub fn after_wildcard(&self) -> Option<Path> {
        let at = self.0.iter().position(Seg::is_every)?;
        Some(Path(self.0[at + 1..].to_vec()))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segs = self.0.iter();
        if let Some(first) = segs.next() {
            write!(f, "{first}")?;
            for seg in segs {
                write!(f, ".{seg}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl FromIterator<Seg> for Path {
    fn from_iter<I: IntoIterator<Item = Seg>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Seg;
    type IntoIter = std::slice::Iter<'a, Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Seg;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Path::parse(&s).map_err(serde::de::Error::custom)
    }
}
