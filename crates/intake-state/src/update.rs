//! Copy-on-write spine updates
//!
//! [`set_at_path`] copies only the containers from the root to the edited
//! slot. Every container off that spine is carried over by reference, so a
//! write costs O(depth) container copies rather than O(tree size).

use crate::error::TreeError;
use crate::node::Node;
use crate::path::{Path, Segment};
use crate::resolve::{check_slot, step};
use std::sync::Arc;

/// Write `value` at `path`, returning a new root
///
/// `value` is stored as given; a composite value is not re-copied.
/// A final index equal to the list length appends, a smaller one replaces.
///
/// # Errors
/// Same as [`crate::resolve`]. On error no new root is produced and `root`
/// is unchanged.
pub fn set_at_path(root: &Node, path: &Path, value: Node) -> Result<Node, TreeError> {
    if path.is_empty() {
        return Err(TreeError::EmptyPath);
    }
    rebuild(root, path.segments(), value, path, 0)
}

fn rebuild(
    node: &Node,
    segments: &[Segment],
    value: Node,
    path: &Path,
    depth: usize,
) -> Result<Node, TreeError> {
    let Some((head, rest)) = segments.split_first() else {
        return Err(TreeError::EmptyPath);
    };

    let child = if rest.is_empty() {
        check_slot(node, head, path, depth)?;
        value
    } else {
        let existing = step(node, head).ok_or_else(|| TreeError::not_found(path, depth))?;
        rebuild(existing, rest, value, path, depth + 1)?
    };

    match (node, head) {
        (Node::Map(map), Segment::Field(name)) => {
            let mut copy = (**map).clone();
            copy.insert(name.clone(), child);
            Ok(Node::Map(Arc::new(copy)))
        }
        (Node::List(list), Segment::Index(index)) => {
            let mut copy = (**list).clone();
            if *index == copy.len() {
                copy.push_back(child);
            } else {
                copy.set(*index, child);
            }
            Ok(Node::List(Arc::new(copy)))
        }
        _ => Err(TreeError::not_found(path, depth)),
    }
}

/// A single write: target path plus the value to store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEdit {
    /// Target slot
    path: Path,

    /// Value to store
    value: Node,

    /// Human-readable description
    description: String,
}

impl TreeEdit {
    /// Create new edit
    #[inline]
    #[must_use]
    pub fn new(path: Path, value: Node) -> Self {
        let description = format!("set {path}");
        Self {
            path,
            value,
            description,
        }
    }

    /// Create edit from a path string
    ///
    /// # Errors
    /// Returns error if the path does not parse
    pub fn parse(path: &str, value: impl Into<Node>) -> Result<Self, TreeError> {
        Ok(Self::new(path.parse()?, value.into()))
    }

    /// Attach a description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Target path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value to store
    #[inline]
    #[must_use]
    pub fn value(&self) -> &Node {
        &self.value
    }

    /// Description
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Apply this edit to `root`
    ///
    /// # Errors
    /// Same as [`set_at_path`]
    pub fn apply(&self, root: &Node) -> Result<Node, TreeError> {
        set_at_path(root, &self.path, self.value.clone())
    }
}

/// Apply edits in order, all or nothing
///
/// Later edits see the result of earlier ones. If any edit fails the error
/// is returned and no intermediate root escapes.
///
/// # Errors
/// The first error raised by an edit
pub fn apply_edits(root: &Node, edits: &[TreeEdit]) -> Result<Node, TreeError> {
    edits
        .iter()
        .try_fold(root.clone(), |acc, edit| edit.apply(&acc))
}
