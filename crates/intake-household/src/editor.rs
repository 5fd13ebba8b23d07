//! Household list editor
//!
//! Structural edits (append, remove) decode the stored list into a private
//! [`Household`] working copy, edit it, and write the whole list back in one
//! write to the base path. Field edits go through the member field's spec
//! and write a single leaf.

use crate::config::HouseholdConfig;
use crate::error::HouseholdError;
use crate::member::{Household, MemberRecord, AGE_FIELD, DISABLED_FIELD, ROLE_FIELD};
use crate::role::{Role, RoleChoice};
use intake_fields::{FieldRegistry, FieldSpec, ManagedField, Rejection};
use intake_state::{get, Node, Path, TreeError, WriteChannel};

/// Outcome of a member field write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldWrite {
    /// Value passed the gates and was written
    Written(Node),
    /// A gate turned the value away; nothing written
    Rejected(Rejection),
    /// Role is not user-settable at this index; nothing written
    RoleLocked,
}

impl FieldWrite {
    /// Check if a write happened
    #[inline]
    #[must_use]
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }
}

/// Render projection of one member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberRow {
    pub index: usize,
    pub role: Role,
    pub age: u64,
    pub disabled: bool,
    /// Remove button shown
    pub removable: bool,
    /// Role dropdown shown
    pub role_selectable: bool,
    /// Head row marker shown in place of the remove button
    pub shows_ban_marker: bool,
}

/// Editor for the household list at a configured path
#[derive(Debug, Clone)]
pub struct HouseholdEditor {
    config: HouseholdConfig,
    base: Path,
    fields: FieldRegistry,
}

impl HouseholdEditor {
    /// Create editor with the member field specs
    ///
    /// # Errors
    /// Returns error if the configured base path is invalid or empty
    pub fn new(config: HouseholdConfig) -> Result<Self, HouseholdError> {
        let base: Path = config.base_path.parse()?;
        if base.is_empty() {
            return Err(TreeError::EmptyPath.into());
        }
        let fields = FieldRegistry::new()
            .with(AGE_FIELD, FieldSpec::whole_number())
            .with(DISABLED_FIELD, FieldSpec::boolean())
            .with(ROLE_FIELD, FieldSpec::one_of(&RoleChoice::OPTIONS));

        Ok(Self {
            config,
            base,
            fields,
        })
    }

    /// Register an extra member field (builder)
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name, spec);
        self
    }

    /// Editor settings
    #[inline]
    #[must_use]
    pub fn config(&self) -> &HouseholdConfig {
        &self.config
    }

    /// Location of the member list
    #[inline]
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base
    }

    /// Path of one member field (`household/{index}/{field}`)
    #[must_use]
    pub fn member_path(&self, index: usize, field: &str) -> Path {
        self.base.clone().index(index).field(field)
    }

    /// Decode a private working copy of the stored list
    ///
    /// # Errors
    /// Returns error if the list is missing or malformed
    pub fn household(&self, root: &Node) -> Result<Household, HouseholdError> {
        let node = get(root, &self.base)?
            .ok_or_else(|| HouseholdError::Missing(self.base.clone()))?;
        Household::from_node(node, &self.base)
    }

    /// One render row per member
    ///
    /// # Errors
    /// Returns error if the list is missing or malformed
    pub fn rows(&self, root: &Node) -> Result<Vec<MemberRow>, HouseholdError> {
        let household = self.household(root)?;
        let len = household.len();
        Ok(household
            .members()
            .enumerate()
            .map(|(index, member)| MemberRow {
                index,
                role: Role::derive(index, member.choice),
                age: member.age,
                disabled: member.disabled,
                removable: index > 0,
                role_selectable: index == 1,
                shows_ban_marker: index == 0 && len > 1,
            })
            .collect())
    }

    /// Append a member with position-dependent defaults
    ///
    /// Returns the index of the new member.
    ///
    /// # Errors
    /// Returns error if the list cannot be read or written
    pub fn append<W>(&self, root: &Node, channel: &mut W) -> Result<usize, HouseholdError>
    where
        W: WriteChannel + ?Sized,
    {
        let mut household = self.household(root)?;
        let index = household.push_default(&self.config);
        channel.write(&self.base, household.to_node())?;
        tracing::debug!("Appended member {} at {}", index, self.base);
        Ok(index)
    }

    /// Remove the member at `index`
    ///
    /// Index 0 is refused with [`HouseholdError::HeadRemoval`] and the list
    /// is left untouched.
    ///
    /// # Errors
    /// Returns error for index 0, an index past the end, or a failed write
    pub fn remove_at<W>(
        &self,
        root: &Node,
        index: usize,
        channel: &mut W,
    ) -> Result<MemberRecord, HouseholdError>
    where
        W: WriteChannel + ?Sized,
    {
        let mut household = self.household(root)?;
        let removed = household.remove(index).map_err(|e| {
            tracing::warn!("Refused removal of member {} at {}: {}", index, self.base, e);
            e
        })?;
        channel.write(&self.base, household.to_node())?;
        tracing::debug!(
            "Removed member {} at {} ({} left)",
            index,
            self.base,
            household.len()
        );
        Ok(removed)
    }

    /// Write a semantic value to one member field
    ///
    /// The value must pass the field's store gate.
    ///
    /// # Errors
    /// Returns error for an unknown field, a missing member, or a failed write
    pub fn set_member_field<W>(
        &self,
        root: &Node,
        index: usize,
        field: &str,
        value: Node,
        channel: &mut W,
    ) -> Result<FieldWrite, HouseholdError>
    where
        W: WriteChannel + ?Sized,
    {
        self.write_member(root, index, field, channel, |spec| spec.check_value(value))
    }

    /// Write raw input text to one member field
    ///
    /// The text must pass the display gate, then the coerced value the store
    /// gate.
    ///
    /// # Errors
    /// Returns error for an unknown field, a missing member, or a failed write
    pub fn set_member_input<W>(
        &self,
        root: &Node,
        index: usize,
        field: &str,
        raw: &str,
        channel: &mut W,
    ) -> Result<FieldWrite, HouseholdError>
    where
        W: WriteChannel + ?Sized,
    {
        self.write_member(root, index, field, channel, |spec| spec.check_input(raw))
    }

    /// Managed control for one member field
    ///
    /// The role control only exists at index 1.
    ///
    /// # Errors
    /// Returns error for an unknown field, a missing member, or
    /// [`HouseholdError::RoleLocked`] for the role at any other index
    pub fn bind_member_field(
        &self,
        root: &Node,
        index: usize,
        field: &str,
    ) -> Result<ManagedField, HouseholdError> {
        self.check_member(root, index)?;
        let spec = self.fields.require(field)?.clone();
        if field == ROLE_FIELD && index != 1 {
            tracing::warn!("No role control for member {} at {}", index, self.base);
            return Err(HouseholdError::RoleLocked { index });
        }
        Ok(ManagedField::bind(root, self.member_path(index, field), spec)?)
    }

    fn check_member(&self, root: &Node, index: usize) -> Result<Household, HouseholdError> {
        let household = self.household(root)?;
        if index >= household.len() {
            return Err(HouseholdError::NoSuchMember {
                index,
                len: household.len(),
            });
        }
        Ok(household)
    }

    fn write_member<W, F>(
        &self,
        root: &Node,
        index: usize,
        field: &str,
        channel: &mut W,
        check: F,
    ) -> Result<FieldWrite, HouseholdError>
    where
        W: WriteChannel + ?Sized,
        F: FnOnce(&FieldSpec) -> Result<Node, Rejection>,
    {
        self.check_member(root, index)?;
        let spec = self.fields.require(field)?;

        if field == ROLE_FIELD && index != 1 {
            tracing::warn!("Role of member {} at {} is not settable", index, self.base);
            return Ok(FieldWrite::RoleLocked);
        }

        match check(spec) {
            Ok(value) => {
                channel.write(&self.member_path(index, field), value.clone())?;
                Ok(FieldWrite::Written(value))
            }
            Err(rejection) => {
                tracing::debug!(
                    "{:?} gate refused {} for member {}",
                    rejection,
                    field,
                    index
                );
                Ok(FieldWrite::Rejected(rejection))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_state::ClientStore;
    use serde_json::json;

    fn store() -> ClientStore {
        ClientStore::new(Node::from(json!({
            "household": [{"m_age": 40, "m_role": "head", "m_disabled": false}]
        })))
    }

    fn editor() -> HouseholdEditor {
        HouseholdEditor::new(HouseholdConfig::default()).unwrap()
    }

    #[test]
    fn new_rejects_empty_base_path() {
        let config = HouseholdConfig::default().with_base_path("");
        assert!(matches!(
            HouseholdEditor::new(config),
            Err(HouseholdError::Tree(TreeError::EmptyPath))
        ));
        let config = HouseholdConfig::default().with_base_path("current//household");
        assert!(matches!(
            HouseholdEditor::new(config),
            Err(HouseholdError::Path(_))
        ));
    }

    #[test]
    fn append_writes_whole_list_once() {
        let mut store = store();
        let editor = editor();
        let before = store.snapshot();

        let index = editor.append(&store.snapshot(), &mut store).unwrap();

        assert_eq!(index, 1);
        assert_eq!(store.revision(), 1);
        assert_eq!(before.get("household").unwrap().len(), 1);
        assert_eq!(store.root().get("household").unwrap().len(), 2);
    }

    #[test]
    fn remove_head_leaves_list_and_revision() {
        let mut store = store();
        let editor = editor();
        editor.append(&store.snapshot(), &mut store).unwrap();

        let result = editor.remove_at(&store.snapshot(), 0, &mut store);

        assert!(matches!(result, Err(HouseholdError::HeadRemoval)));
        assert_eq!(store.revision(), 1);
        assert_eq!(store.root().get("household").unwrap().len(), 2);
    }

    #[test]
    fn rows_project_controls() {
        let mut store = store();
        let editor = editor();
        assert!(!editor.rows(store.root()).unwrap()[0].shows_ban_marker);

        editor.append(&store.snapshot(), &mut store).unwrap();
        editor.append(&store.snapshot(), &mut store).unwrap();
        let rows = editor.rows(store.root()).unwrap();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].shows_ban_marker && !rows[0].removable);
        assert!(rows[1].role_selectable && rows[1].removable);
        assert_eq!(rows[1].role, Role::Spouse);
        assert!(!rows[2].role_selectable);
        assert_eq!(rows[2].role, Role::ChildOrOther);
    }

    #[test]
    fn set_member_field_writes_leaf() {
        let mut store = store();
        let editor = editor();

        let outcome = editor
            .set_member_field(&store.snapshot(), 0, DISABLED_FIELD, Node::Bool(true), &mut store)
            .unwrap();

        assert_eq!(outcome, FieldWrite::Written(Node::Bool(true)));
        assert!(editor.rows(store.root()).unwrap()[0].disabled);
    }

    #[test]
    fn set_member_input_runs_both_gates() {
        let mut store = store();
        let editor = editor();
        let root = store.snapshot();

        assert_eq!(
            editor.set_member_input(&root, 0, AGE_FIELD, "4a", &mut store).unwrap(),
            FieldWrite::Rejected(Rejection::Display)
        );
        assert_eq!(
            editor.set_member_input(&root, 0, AGE_FIELD, "", &mut store).unwrap(),
            FieldWrite::Rejected(Rejection::Store)
        );
        assert_eq!(store.revision(), 0);
        assert!(editor
            .set_member_input(&root, 0, AGE_FIELD, "41", &mut store)
            .unwrap()
            .is_written());
        assert_eq!(editor.rows(store.root()).unwrap()[0].age, 41);
    }

    #[test]
    fn role_only_settable_at_index_one() {
        let mut store = store();
        let editor = editor();
        editor.append(&store.snapshot(), &mut store).unwrap();
        editor.append(&store.snapshot(), &mut store).unwrap();
        let root = store.snapshot();

        for index in [0, 2] {
            assert_eq!(
                editor
                    .set_member_field(&root, index, ROLE_FIELD, Node::from("spouse"), &mut store)
                    .unwrap(),
                FieldWrite::RoleLocked
            );
        }
        assert_eq!(
            editor
                .set_member_field(&root, 1, ROLE_FIELD, Node::from("head"), &mut store)
                .unwrap(),
            FieldWrite::Rejected(Rejection::Store)
        );
        assert!(editor
            .set_member_field(&root, 1, ROLE_FIELD, Node::from("member"), &mut store)
            .unwrap()
            .is_written());
        assert_eq!(editor.rows(store.root()).unwrap()[1].role, Role::ChildOrOther);
    }

    #[test]
    fn unknown_field_and_member() {
        let mut store = store();
        let editor = editor();
        let root = store.snapshot();

        assert!(matches!(
            editor.set_member_field(&root, 0, "m_income", Node::from(1u64), &mut store),
            Err(HouseholdError::Field(_))
        ));
        assert!(matches!(
            editor.set_member_field(&root, 3, AGE_FIELD, Node::from(1u64), &mut store),
            Err(HouseholdError::NoSuchMember { index: 3, len: 1 })
        ));

        let editor = editor.with_field("m_income", FieldSpec::non_neg_number());
        assert!(editor
            .set_member_field(&root, 0, "m_income", Node::from(1200u64), &mut store)
            .unwrap()
            .is_written());
    }

    #[test]
    fn bind_member_field_shows_stored_age() {
        let store = store();
        let field = editor().bind_member_field(store.root(), 0, AGE_FIELD).unwrap();
        assert_eq!(field.display(), "40");
        assert_eq!(field.path().to_string(), "household/0/m_age");
    }

    #[test]
    fn bind_role_only_at_index_one() {
        let mut store = store();
        let editor = editor();
        editor.append(&store.snapshot(), &mut store).unwrap();
        editor.append(&store.snapshot(), &mut store).unwrap();

        for index in [0, 2] {
            assert!(matches!(
                editor.bind_member_field(store.root(), index, ROLE_FIELD),
                Err(HouseholdError::RoleLocked { index: i }) if i == index
            ));
        }
        let role = editor.bind_member_field(store.root(), 1, ROLE_FIELD).unwrap();
        assert_eq!(role.display(), "spouse");
    }

    #[test]
    fn nested_base_path() {
        let mut store = ClientStore::new(Node::from(json!({
            "current": {"household": [{"m_age": 40, "m_role": "head", "m_disabled": false}]},
            "future": {"household": [{"m_age": 41, "m_role": "head", "m_disabled": false}]}
        })));
        let editor =
            HouseholdEditor::new(HouseholdConfig::default().with_base_path("current/household"))
                .unwrap();
        let future_before = store.root().get("future").unwrap().clone();

        editor.append(&store.snapshot(), &mut store).unwrap();

        assert_eq!(store.root().get("current").unwrap().get("household").unwrap().len(), 2);
        assert!(store.root().get("future").unwrap().same_ref(&future_before));
    }

    #[test]
    fn missing_household() {
        let editor = editor();
        assert!(matches!(
            editor.rows(&Node::map()),
            Err(HouseholdError::Missing(_))
        ));
    }
}
