//! Managed input control
//!
//! [`ManagedField`] is the stateful half of the two-tier validator: it keeps
//! the text currently shown in the box apart from the last value that made
//! it into the tree.

use crate::error::FieldError;
use crate::spec::{FieldSpec, Rejection};
use intake_state::{get, Node, Path, WriteChannel};

/// Result of a raw input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Display text updated
    Accepted,
    /// Keystroke refused; display text unchanged
    Rejected,
}

/// Result of a commit (blur)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Value written through the channel
    Committed(Node),
    /// Store gate refused; display reverted to the stored value
    Reverted,
}

impl CommitOutcome {
    /// Check if a write happened
    #[inline]
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

/// A leaf control bound to one path
///
/// # Invariants
/// - `stored` is always a value that passed the store gate, or the value the
///   control was created/synced with
/// - Nothing reaches the write channel without passing the store gate
#[derive(Debug, Clone)]
pub struct ManagedField {
    path: Path,
    spec: FieldSpec,
    stored: Node,
    display: String,
}

impl ManagedField {
    /// Create control showing `stored`
    #[must_use]
    pub fn new(path: Path, spec: FieldSpec, stored: Node) -> Self {
        let display = spec.format(&stored);
        Self {
            path,
            spec,
            stored,
            display,
        }
    }

    /// Create control reading its value from `root`
    ///
    /// A vacant slot starts as [`Node::Null`].
    ///
    /// # Errors
    /// Returns error if `path` does not resolve in `root`
    pub fn bind(root: &Node, path: Path, spec: FieldSpec) -> Result<Self, FieldError> {
        let stored = get(root, &path)?.cloned().unwrap_or_default();
        Ok(Self::new(path, spec, stored))
    }

    /// Bound path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Text currently shown
    #[inline]
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Last known-good stored value
    #[inline]
    #[must_use]
    pub fn stored(&self) -> &Node {
        &self.stored
    }

    /// Raw input event: run the display gate
    pub fn input(&mut self, raw: &str) -> InputOutcome {
        if self.spec.admits_input(raw) {
            self.display = raw.to_string();
            InputOutcome::Accepted
        } else {
            tracing::trace!("Display gate refused {:?} for {}", raw, self.path);
            InputOutcome::Rejected
        }
    }

    /// Commit event: run the store gate and write on success
    ///
    /// # Errors
    /// Returns error if the channel refuses the write; the control keeps its
    /// previous stored value in that case.
    pub fn commit<W>(&mut self, channel: &mut W) -> Result<CommitOutcome, FieldError>
    where
        W: WriteChannel + ?Sized,
    {
        match self.spec.check_input(&self.display) {
            Ok(value) => {
                channel.write(&self.path, value.clone())?;
                self.display = self.spec.format(&value);
                self.stored = value.clone();
                Ok(CommitOutcome::Committed(value))
            }
            Err(Rejection::Display | Rejection::Store) => {
                tracing::debug!("Store gate refused {:?} for {}", self.display, self.path);
                self.display = self.spec.format(&self.stored);
                Ok(CommitOutcome::Reverted)
            }
        }
    }

    /// Re-render from a newer root
    ///
    /// Idempotent: syncing twice against the same root changes nothing.
    ///
    /// # Errors
    /// Returns error if the bound path no longer resolves
    pub fn sync(&mut self, root: &Node) -> Result<(), FieldError> {
        let current = get(root, &self.path)?.cloned().unwrap_or_default();
        if current != self.stored {
            self.display = self.spec.format(&current);
            self.stored = current;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_state::{ClientStore, TreeError};
    use serde_json::json;

    fn store() -> ClientStore {
        ClientStore::new(Node::from(json!({
            "household": [{"m_age": 40, "m_role": "head", "m_disabled": false}]
        })))
    }

    fn age_field(store: &ClientStore) -> ManagedField {
        let path: Path = "household/0/m_age".parse().unwrap();
        ManagedField::bind(store.root(), path, FieldSpec::whole_number()).unwrap()
    }

    #[test]
    fn bind_formats_stored_value() {
        let store = store();
        let field = age_field(&store);
        assert_eq!(field.display(), "40");
        assert_eq!(field.stored(), &Node::from(40u64));
    }

    #[test]
    fn display_gate_rejects_keystroke() {
        let store = store();
        let mut field = age_field(&store);
        assert_eq!(field.input("3"), InputOutcome::Accepted);
        assert_eq!(field.input("3a"), InputOutcome::Rejected);
        assert_eq!(field.display(), "3");
    }

    #[test]
    fn commit_writes_store_valid_value() {
        let mut store = store();
        let mut field = age_field(&store);
        field.input("41");
        let outcome = field.commit(&mut store).unwrap();
        assert_eq!(outcome, CommitOutcome::Committed(Node::from(41u64)));
        assert_eq!(store.revision(), 1);
        assert_eq!(field.stored(), &Node::from(41u64));
    }

    #[test]
    fn store_gate_reverts_empty_commit() {
        let mut store = store();
        let mut field = age_field(&store);
        assert_eq!(field.input(""), InputOutcome::Accepted);

        let outcome = field.commit(&mut store).unwrap();

        assert_eq!(outcome, CommitOutcome::Reverted);
        assert_eq!(store.revision(), 0);
        assert_eq!(field.display(), "40");
        assert_eq!(field.stored(), &Node::from(40u64));
    }

    #[test]
    fn refused_write_keeps_stored_value() {
        let mut field = ManagedField::new(
            "household/0/m_age".parse().unwrap(),
            FieldSpec::whole_number(),
            Node::from(40u64),
        );
        let mut refusing = |path: &Path, _value: Node| -> Result<(), TreeError> {
            Err(TreeError::not_found(path, 0))
        };
        field.input("41");
        assert!(field.commit(&mut refusing).is_err());
        assert_eq!(field.stored(), &Node::from(40u64));
    }

    #[test]
    fn sync_is_idempotent() {
        let mut store = store();
        let mut field = age_field(&store);
        store
            .write_str("household/0/m_age", Node::from(45u64))
            .unwrap();

        field.sync(store.root()).unwrap();
        assert_eq!(field.display(), "45");
        field.input("4");
        field.sync(store.root()).unwrap();
        // an unchanged root leaves in-progress input alone
        assert_eq!(field.display(), "4");
    }

    #[test]
    fn bind_vacant_slot_is_null() {
        let store = store();
        let path: Path = "household/0/m_income".parse().unwrap();
        let field = ManagedField::bind(store.root(), path, FieldSpec::non_neg_number()).unwrap();
        assert!(field.stored().is_null());
        assert_eq!(field.display(), "");
    }
}
