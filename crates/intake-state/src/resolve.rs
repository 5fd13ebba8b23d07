//! Path resolution
//!
//! Walks a [`Node`] tree one [`Segment`] at a time. Every segment but the
//! last must land on an existing container; nothing is created on the way.

use crate::error::TreeError;
use crate::node::Node;
use crate::path::{Path, Segment};

/// Resolved location of a path's final segment
///
/// The slot may be vacant: a missing map field, or the list index equal to
/// the list length (the append position).
#[derive(Debug, Clone, Copy)]
pub struct Slot<'a> {
    container: &'a Node,
    segment: &'a Segment,
}

impl<'a> Slot<'a> {
    /// Container holding the slot
    #[inline]
    #[must_use]
    pub fn container(&self) -> &'a Node {
        self.container
    }

    /// Final segment of the path
    #[inline]
    #[must_use]
    pub fn segment(&self) -> &'a Segment {
        self.segment
    }

    /// Current value in the slot, if any
    #[must_use]
    pub fn value(&self) -> Option<&'a Node> {
        match (self.container, self.segment) {
            (Node::Map(map), Segment::Field(name)) => map.get(name.as_str()),
            (Node::List(list), Segment::Index(index)) => list.get(*index),
            _ => None,
        }
    }

    /// Check if slot holds no value yet
    #[inline]
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        self.value().is_none()
    }
}

/// Child of `node` addressed by `segment`, if present
#[inline]
pub(crate) fn step<'a>(node: &'a Node, segment: &Segment) -> Option<&'a Node> {
    match (node, segment) {
        (Node::Map(map), Segment::Field(name)) => map.get(name.as_str()),
        (Node::List(list), Segment::Index(index)) => list.get(*index),
        _ => None,
    }
}

/// Check that `segment` can address a slot inside `container`
pub(crate) fn check_slot(
    container: &Node,
    segment: &Segment,
    path: &Path,
    depth: usize,
) -> Result<(), TreeError> {
    match (container, segment) {
        (Node::Map(_), Segment::Field(_)) => Ok(()),
        (Node::List(list), Segment::Index(index)) => {
            if *index <= list.len() {
                Ok(())
            } else {
                Err(TreeError::IndexOutOfBounds {
                    path: path.clone(),
                    index: *index,
                    len: list.len(),
                })
            }
        }
        _ => Err(TreeError::not_found(path, depth)),
    }
}

/// Resolve `path` to the slot its final segment names
///
/// # Errors
/// - [`TreeError::EmptyPath`] for the root path
/// - [`TreeError::PathNotFound`] if an intermediate container is missing or
///   a segment does not match the container shape
/// - [`TreeError::IndexOutOfBounds`] if the final index is more than one
///   past the end of its list
pub fn resolve<'a>(root: &'a Node, path: &'a Path) -> Result<Slot<'a>, TreeError> {
    let (last, spine) = path.segments().split_last().ok_or(TreeError::EmptyPath)?;

    let mut container = root;
    for (depth, segment) in spine.iter().enumerate() {
        container = step(container, segment).ok_or_else(|| TreeError::not_found(path, depth))?;
    }

    check_slot(container, last, path, spine.len())?;
    Ok(Slot {
        container,
        segment: last,
    })
}

/// Read the value at `path`
///
/// Returns `Ok(None)` for a vacant slot.
///
/// # Errors
/// Same as [`resolve`]
pub fn get<'a>(root: &'a Node, path: &'a Path) -> Result<Option<&'a Node>, TreeError> {
    resolve(root, path).map(|slot| slot.value())
}
