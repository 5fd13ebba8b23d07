//! Write channel
//!
//! The single designated way to replace the shared client root. Leaf
//! controls and editors receive a channel explicitly instead of reaching for
//! shared state.

use crate::error::TreeError;
use crate::node::Node;
use crate::path::Path;

/// Accepts `(path, value)` writes against the externally held root
pub trait WriteChannel {
    /// Apply a write and replace the held root
    ///
    /// # Errors
    /// Returns error if the path cannot be written; the held root must be
    /// left unchanged in that case.
    fn write(&mut self, path: &Path, value: Node) -> Result<(), TreeError>;

    /// Write using a path string
    ///
    /// # Errors
    /// Returns error if the path does not parse or cannot be written
    fn write_str(&mut self, path: &str, value: Node) -> Result<(), TreeError> {
        let path: Path = path.parse()?;
        self.write(&path, value)
    }
}

impl<F> WriteChannel for F
where
    F: FnMut(&Path, Node) -> Result<(), TreeError>,
{
    fn write(&mut self, path: &Path, value: Node) -> Result<(), TreeError> {
        self(path, value)
    }
}
