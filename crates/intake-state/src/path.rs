//! Slash-separated paths for addressing within a client tree
//!
//! Provides [`Path`] and [`Segment`]. A path is parsed once into typed
//! segments so that resolution never re-inspects raw strings.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Separator between segments in the string encoding
pub const SEPARATOR: char = '/';

/// A single step of a [`Path`]
///
/// # Examples
/// - `household` → `Segment::Field("household")`
/// - `2` → `Segment::Index(2)`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// Named field of a map
    Field(String),
    /// Position in a list
    Index(usize),
}

impl Segment {
    /// Parse one raw segment
    ///
    /// A segment made only of ASCII digits is an index, anything else is a
    /// field name.
    ///
    /// # Errors
    /// Returns error if the segment is empty, not ASCII, contains the
    /// separator, or is an index too large for `usize`.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        if raw.is_empty() {
            return Err(PathError::EmptySegment);
        }
        if !raw.is_ascii() {
            return Err(PathError::NonAscii(raw.to_string()));
        }
        if raw.contains(SEPARATOR) {
            return Err(PathError::InvalidSegment(raw.to_string()));
        }
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw
                .parse::<usize>()
                .map(Self::Index)
                .map_err(|_| PathError::IndexOverflow(raw.to_string()));
        }
        Ok(Self::Field(raw.to_string()))
    }

    /// Field name, if this is a field segment
    #[inline]
    #[must_use]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(name),
            Self::Index(_) => None,
        }
    }

    /// List position, if this is an index segment
    #[inline]
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Field(_) => None,
            Self::Index(index) => Some(*index),
        }
    }

    /// Check if segment is a list index
    #[inline]
    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Path within a client tree
///
/// Ordered sequence of [`Segment`]s from the root to a slot. Encodes to and
/// from `household/2/m_age` style strings.
///
/// Field names consisting only of digits cannot be encoded: they read back as
/// indices. Indices display without leading zeros (`07` reads back as `7`),
/// so a path always equals the parse of its own display.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Path(Vec<Segment>);

impl Path {
    /// Create new path from segments
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    /// Empty path (root)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Append a field segment (builder)
    #[inline]
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.0.push(Segment::Field(name.into()));
        self
    }

    /// Append an index segment (builder)
    #[inline]
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(Segment::Index(index));
        self
    }

    /// Append a segment, returning new path
    #[inline]
    #[must_use]
    pub fn child(&self, segment: impl Into<Segment>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Get number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if path is empty (root)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get parent path (if not root)
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0
            .split_last()
            .map(|(_, spine)| Self(spine.to_vec()))
    }

    /// Get last segment (if not root)
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Segment> {
        self.0.last()
    }

    /// Check if this path is a prefix of another (or equal)
    #[inline]
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        other.0.starts_with(&self.0)
    }

    /// Iterator over segments from root to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.0.iter()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }

        let segments = s
            .split(SEPARATOR)
            .map(Segment::parse)
            .collect::<Result<_, _>>()?;

        Ok(Self(segments))
    }
}

impl TryFrom<String> for Path {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.to_string()
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

/// Parse a path string
///
/// # Errors
/// Returns error if any segment is malformed
pub fn parse_path(s: &str) -> Result<Path, PathError> {
    s.parse()
}

/// Errors related to path encoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Empty segment in path (`a//b`, leading or trailing separator)
    #[error("path contains empty segment")]
    EmptySegment,

    /// Segment is not ASCII
    #[error("non-ASCII segment: {0}")]
    NonAscii(String),

    /// Segment contains the separator
    #[error("invalid segment: {0}")]
    InvalidSegment(String),

    /// Index does not fit in `usize`
    #[error("index out of range: {0}")]
    IndexOverflow(String),
}
