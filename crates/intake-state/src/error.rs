//! Error types for tree resolution and updates

use crate::path::{Path, PathError};

/// Errors raised while resolving or writing a path
///
/// Every variant rejects the write as a whole: the root passed in is left
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Intermediate segment missing, or a segment of the wrong shape
    /// (a field on a list, an index on a map, anything on a scalar)
    #[error("path not found: '{path}' (failed at segment {depth})")]
    PathNotFound {
        /// Full path that was requested
        path: Path,
        /// Zero-based position of the failing segment
        depth: usize,
    },

    /// Final index more than one past the end of the list
    #[error("index {index} out of bounds for '{path}' (len {len})")]
    IndexOutOfBounds {
        /// Full path that was requested
        path: Path,
        /// Requested index
        index: usize,
        /// Current list length
        len: usize,
    },

    /// The root itself cannot be addressed as a slot
    #[error("empty path does not address a slot")]
    EmptyPath,

    /// Path string could not be parsed
    #[error("invalid path: {0}")]
    InvalidPath(#[from] PathError),
}

impl TreeError {
    /// Create a not-found error for the segment at `depth`
    #[inline]
    #[must_use]
    pub fn not_found(path: &Path, depth: usize) -> Self {
        Self::PathNotFound {
            path: path.clone(),
            depth,
        }
    }

    /// Check if the error points at a schema or caller bug
    ///
    /// Out-of-bounds writes can come from a stale snapshot; everything else
    /// means the caller addressed structure that does not exist.
    #[inline]
    #[must_use]
    pub fn is_caller_bug(&self) -> bool {
        !matches!(self, Self::IndexOutOfBounds { .. })
    }
}
