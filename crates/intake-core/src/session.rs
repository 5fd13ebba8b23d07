//! Intake session
//!
//! Wires the client store, the household editor and the acceptance gate.
//! The session owns the only [`ClientStore`]; every write goes through it.

use crate::config::IntakeConfig;
use crate::error::IntakeError;
use intake_fields::{CommitOutcome, ManagedField};
use intake_gate::{AcceptanceGate, GateEffect, GateEvent};
use intake_household::{FieldWrite, HouseholdEditor, MemberRecord, MemberRow};
use intake_state::{ClientStore, Node, Path, TreeEdit, WriteChannel};

/// One user's pass through the intake flow
#[derive(Debug, Clone)]
pub struct IntakeSession {
    config: IntakeConfig,
    store: ClientStore,
    editor: HouseholdEditor,
    gate: AcceptanceGate,
}

impl IntakeSession {
    /// Create session around an existing client tree
    ///
    /// # Errors
    /// Returns error if the configuration is invalid
    pub fn new(config: IntakeConfig, root: Node) -> Result<Self, IntakeError> {
        config.validate()?;
        let editor = HouseholdEditor::new(config.household.clone())?;
        let store = ClientStore::new(root).with_history_limit(config.history_limit);
        let gate = AcceptanceGate::new(config.gate.clone());

        tracing::info!(
            "Intake session started (household at {}, gate required: {})",
            editor.base_path(),
            config.gate.required
        );

        Ok(Self {
            config,
            store,
            editor,
            gate,
        })
    }

    /// Session configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Current client root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Node {
        self.store.root()
    }

    /// Cheap handle to the current root
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Node {
        self.store.snapshot()
    }

    /// Number of successful writes so far
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// Acceptance gate
    #[inline]
    #[must_use]
    pub fn gate(&self) -> &AcceptanceGate {
        &self.gate
    }

    /// Household editor
    #[inline]
    #[must_use]
    pub fn editor(&self) -> &HouseholdEditor {
        &self.editor
    }

    /// Forward a user action to the acceptance gate
    ///
    /// # Errors
    /// Returns error if the gate refuses the action
    pub fn handle_gate(&mut self, event: GateEvent) -> Result<GateEffect, IntakeError> {
        Ok(self.gate.handle(event)?)
    }

    /// Render rows for the household step
    ///
    /// # Errors
    /// Returns error if the stored list is missing or malformed
    pub fn household_rows(&self) -> Result<Vec<MemberRow>, IntakeError> {
        Ok(self.editor.rows(self.store.root())?)
    }

    /// Append a household member
    ///
    /// # Errors
    /// [`IntakeError::TermsNotAccepted`] while the gate blocks, or any
    /// household error
    pub fn append_member(&mut self) -> Result<usize, IntakeError> {
        self.ensure_open()?;
        let root = self.store.snapshot();
        Ok(self.editor.append(&root, &mut self.store)?)
    }

    /// Remove a household member
    ///
    /// # Errors
    /// [`IntakeError::TermsNotAccepted`] while the gate blocks, or any
    /// household error (including removal of the head)
    pub fn remove_member(&mut self, index: usize) -> Result<MemberRecord, IntakeError> {
        self.ensure_open()?;
        let root = self.store.snapshot();
        Ok(self.editor.remove_at(&root, index, &mut self.store)?)
    }

    /// Write a semantic value to a member field
    ///
    /// # Errors
    /// [`IntakeError::TermsNotAccepted`] while the gate blocks, or any
    /// household error
    pub fn set_member_field(
        &mut self,
        index: usize,
        field: &str,
        value: Node,
    ) -> Result<FieldWrite, IntakeError> {
        self.ensure_open()?;
        let root = self.store.snapshot();
        Ok(self
            .editor
            .set_member_field(&root, index, field, value, &mut self.store)?)
    }

    /// Write raw input text to a member field
    ///
    /// # Errors
    /// [`IntakeError::TermsNotAccepted`] while the gate blocks, or any
    /// household error
    pub fn set_member_input(
        &mut self,
        index: usize,
        field: &str,
        raw: &str,
    ) -> Result<FieldWrite, IntakeError> {
        self.ensure_open()?;
        let root = self.store.snapshot();
        Ok(self
            .editor
            .set_member_input(&root, index, field, raw, &mut self.store)?)
    }

    /// Managed control for a member field, bound to the current root
    ///
    /// # Errors
    /// Returns error for an unknown field or a missing member
    pub fn member_field(&self, index: usize, field: &str) -> Result<ManagedField, IntakeError> {
        Ok(self
            .editor
            .bind_member_field(self.store.root(), index, field)?)
    }

    /// Commit a managed control
    ///
    /// # Errors
    /// [`IntakeError::TermsNotAccepted`] while the gate blocks, or a refused
    /// write
    pub fn commit(&mut self, field: &mut ManagedField) -> Result<CommitOutcome, IntakeError> {
        self.ensure_open()?;
        Ok(field.commit(&mut self.store)?)
    }

    /// Re-render a managed control from the current root
    ///
    /// # Errors
    /// Returns error if the control's path no longer resolves
    pub fn sync(&self, field: &mut ManagedField) -> Result<(), IntakeError> {
        Ok(field.sync(self.store.root())?)
    }

    /// Unvalidated write of any path outside the household list
    ///
    /// # Errors
    /// - [`IntakeError::TermsNotAccepted`] while the gate blocks
    /// - [`IntakeError::HouseholdPath`] if `path` is the household list, an
    ///   ancestor of it, or anything inside it
    /// - a refused tree write
    pub fn write(&mut self, path: &Path, value: Node) -> Result<(), IntakeError> {
        self.ensure_open()?;
        self.ensure_outside_household(path)?;
        Ok(self.store.write(path, value)?)
    }

    /// Apply a batch of edits as one revision
    ///
    /// Same path restriction as [`write`](Self::write), checked for every
    /// edit before any is applied.
    ///
    /// # Errors
    /// [`IntakeError::TermsNotAccepted`] while the gate blocks,
    /// [`IntakeError::HouseholdPath`] for an edit touching the household
    /// list, or the first failing edit (nothing is applied)
    pub fn apply(&mut self, edits: &[TreeEdit]) -> Result<(), IntakeError> {
        self.ensure_open()?;
        for edit in edits {
            self.ensure_outside_household(edit.path())?;
        }
        Ok(self.store.apply(edits)?)
    }

    /// Restore the previous root
    ///
    /// Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    fn ensure_outside_household(&self, path: &Path) -> Result<(), IntakeError> {
        let base = self.editor.base_path();
        if base.is_prefix_of(path) || path.is_prefix_of(base) {
            tracing::warn!("Raw write to {} refused: overlaps {}", path, base);
            return Err(IntakeError::HouseholdPath(path.clone()));
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), IntakeError> {
        if self.gate.blocks() {
            tracing::warn!("Write refused: terms not accepted");
            return Err(IntakeError::TermsNotAccepted);
        }
        Ok(())
    }
}
