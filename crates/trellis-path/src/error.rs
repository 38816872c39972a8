//! Error types for path parsing.

use thiserror::Error;

/// Result type alias for path parsing.
pub type PathResult<T> = Result<T, PathError>;

/// Errors produced while parsing a dotted path string.
///
/// These are the only errors this crate surfaces. Resolution, placement, and
/// cleanup communicate every anomaly through their return values instead.
#[derive(Debug, Error)]
pub enum PathError {
    /// The path string was empty.
    #[error("empty path")]
    Empty,

    /// A dot-delimited segment was empty (leading, trailing, or doubled dot).
    #[error("empty segment at position {index}")]
    EmptySegment {
        /// Zero-based position of the offending segment.
        index: usize,
    },

    /// A segment contained bracket characters outside the trailing `[*]` marker.
    #[error("invalid segment `{segment}`: brackets are only valid as a trailing [*] marker")]
    InvalidSegment {
        /// The offending segment text.
        segment: String,
    },
}

impl PathError {
    /// Create an empty path error.
    #[inline]
    pub fn empty() -> Self {
        PathError::Empty
    }

    /// Create an empty segment error.
    #[inline]
    pub fn empty_segment(index: usize) -> Self {
        PathError::EmptySegment { index }
    }

    /// Create an invalid segment error.
    #[inline]
    pub fn invalid_segment(segment: impl Into<String>) -> Self {
        PathError::InvalidSegment {
            segment: segment.into(),
        }
    }
}
