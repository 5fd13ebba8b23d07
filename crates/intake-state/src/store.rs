//! In-memory holder of the client root
//!
//! [`ClientStore`] owns the current root and swaps it on every successful
//! write. Old roots handed out through [`ClientStore::snapshot`] stay valid
//! and unchanged.

use crate::channel::WriteChannel;
use crate::error::TreeError;
use crate::node::Node;
use crate::path::Path;
use crate::update::{apply_edits, set_at_path, TreeEdit};
use std::collections::VecDeque;

/// Default number of previous roots kept for undo
pub const DEFAULT_HISTORY_LIMIT: usize = 32;

/// Single-writer store for the client tree
///
/// # Invariants
/// - `revision` increases by one per successful write or batch
/// - A failed write changes nothing (root, revision, history)
#[derive(Debug, Clone)]
pub struct ClientStore {
    root: Node,
    revision: u64,
    history: VecDeque<Node>,
    history_limit: usize,
}

impl ClientStore {
    /// Create store around an initial root
    #[inline]
    #[must_use]
    pub fn new(root: Node) -> Self {
        Self {
            root,
            revision: 0,
            history: VecDeque::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// With bounded history (0 disables undo)
    #[inline]
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self.history.truncate(limit);
        self
    }

    /// Current root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Cheap handle to the current root
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Node {
        self.root.clone()
    }

    /// Number of successful writes so far
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Previous roots, most recent first
    pub fn history(&self) -> impl Iterator<Item = &Node> {
        self.history.iter()
    }

    /// Apply a batch of edits as one revision
    ///
    /// # Errors
    /// The first failing edit; nothing is applied in that case
    pub fn apply(&mut self, edits: &[TreeEdit]) -> Result<(), TreeError> {
        let next = apply_edits(&self.root, edits).map_err(|e| {
            tracing::warn!("Rejected batch of {} edits: {}", edits.len(), e);
            e
        })?;
        self.replace(next);
        tracing::debug!("Applied {} edits at revision {}", edits.len(), self.revision);
        Ok(())
    }

    /// Restore the previous root
    ///
    /// Returns false if there is no history. Counts as a revision.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_front() {
            Some(previous) => {
                self.root = previous;
                self.revision += 1;
                tracing::debug!("Undo to revision {}", self.revision);
                true
            }
            None => false,
        }
    }

    fn replace(&mut self, next: Node) {
        let previous = std::mem::replace(&mut self.root, next);
        if self.history_limit > 0 {
            self.history.push_front(previous);
            self.history.truncate(self.history_limit);
        }
        self.revision += 1;
    }
}

impl WriteChannel for ClientStore {
    fn write(&mut self, path: &Path, value: Node) -> Result<(), TreeError> {
        let next = set_at_path(&self.root, path, value).map_err(|e| {
            tracing::warn!("Rejected write to {}: {}", path, e);
            e
        })?;
        self.replace(next);
        tracing::debug!("Wrote {} at revision {}", path, self.revision);
        Ok(())
    }
}

impl Default for ClientStore {
    fn default() -> Self {
        Self::new(Node::map())
    }
}
