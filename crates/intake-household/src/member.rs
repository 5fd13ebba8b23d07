//! Member records and the household working copy

use crate::config::HouseholdConfig;
use crate::error::HouseholdError;
use crate::role::{Role, RoleChoice};
use intake_state::{Node, Path};
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Age field name
pub const AGE_FIELD: &str = "m_age";
/// Role field name
pub const ROLE_FIELD: &str = "m_role";
/// Disabled flag field name
pub const DISABLED_FIELD: &str = "m_disabled";

/// Stored shape of one member
#[derive(Serialize, Deserialize)]
struct MemberWire {
    m_age: u64,
    #[serde(default)]
    m_role: Option<Role>,
    #[serde(default)]
    m_disabled: bool,
    #[serde(flatten)]
    extra: JsonMap<String, JsonValue>,
}

/// One household member, without its position
///
/// The role is not part of the record; only the index-1 choice is kept.
/// Fields this crate does not know about are carried through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRecord {
    pub age: u64,
    pub disabled: bool,
    pub choice: RoleChoice,
    extra: JsonMap<String, JsonValue>,
}

impl MemberRecord {
    /// Create record with no extra fields
    #[must_use]
    pub fn new(age: u64, choice: RoleChoice) -> Self {
        Self {
            age,
            disabled: false,
            choice,
            extra: JsonMap::new(),
        }
    }

    /// With disabled flag
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Fields not managed by the editor
    #[inline]
    #[must_use]
    pub fn extra(&self) -> &JsonMap<String, JsonValue> {
        &self.extra
    }

    fn from_node(node: &Node, index: usize) -> Result<Self, HouseholdError> {
        let wire: MemberWire = serde_json::from_value(node.to_json())
            .map_err(|source| HouseholdError::MalformedMember { index, source })?;
        Ok(Self {
            age: wire.m_age,
            disabled: wire.m_disabled,
            choice: wire.m_role.map(RoleChoice::from).unwrap_or_default(),
            extra: wire.extra,
        })
    }

    fn to_node(&self, index: usize) -> Node {
        let wire = MemberWire {
            m_age: self.age,
            m_role: Some(Role::derive(index, self.choice)),
            m_disabled: self.disabled,
            extra: self.extra.clone(),
        };
        // Plain struct with a string-keyed map never fails to serialize
        serde_json::to_value(wire).map_or(Node::Null, Node::from)
    }
}

/// Private working copy of the member list
///
/// # Invariants
/// - Never empty; index 0 is the head
/// - Members at index 2 and beyond carry no spouse choice
#[derive(Debug, Clone, PartialEq)]
pub struct Household {
    members: Vec<MemberRecord>,
}

impl Household {
    /// Household with only a head
    #[must_use]
    pub fn with_head(head: MemberRecord) -> Self {
        Self {
            members: vec![head],
        }
    }

    /// Decode the list stored at `path`
    ///
    /// # Errors
    /// Returns error if `node` is not a non-empty list of well-formed members
    pub fn from_node(node: &Node, path: &Path) -> Result<Self, HouseholdError> {
        let list = node
            .as_list()
            .ok_or_else(|| HouseholdError::NotAList(path.clone()))?;
        if list.is_empty() {
            return Err(HouseholdError::Empty(path.clone()));
        }
        let members = list
            .iter()
            .enumerate()
            .map(|(index, member)| MemberRecord::from_node(member, index))
            .collect::<Result<Vec<_>, _>>()?;

        let mut household = Self { members };
        household.normalize();
        Ok(household)
    }

    /// Encode as a fresh list with roles derived from position
    #[must_use]
    pub fn to_node(&self) -> Node {
        Node::list_from(
            self.members
                .iter()
                .enumerate()
                .map(|(index, member)| member.to_node(index)),
        )
    }

    /// Number of members
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if there are no members (never true once decoded)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member at `index`
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MemberRecord> {
        self.members.get(index)
    }

    /// Iterate members in order
    pub fn members(&self) -> impl Iterator<Item = &MemberRecord> {
        self.members.iter()
    }

    /// Derived role of the member at `index`
    #[must_use]
    pub fn role_of(&self, index: usize) -> Option<Role> {
        self.get(index)
            .map(|member| Role::derive(index, member.choice))
    }

    /// Append a member with position-dependent defaults
    ///
    /// Returns the new member's index.
    pub fn push_default(&mut self, config: &HouseholdConfig) -> usize {
        let member = if self.members.len() == 1 {
            MemberRecord::new(config.spouse_age, RoleChoice::Spouse)
        } else {
            MemberRecord::new(config.child_age, RoleChoice::ChildOrOther)
        };
        self.members.push(member);
        self.members.len() - 1
    }

    /// Remove the member at `index`, re-deriving later roles
    ///
    /// # Errors
    /// [`HouseholdError::HeadRemoval`] for index 0,
    /// [`HouseholdError::NoSuchMember`] past the end
    pub fn remove(&mut self, index: usize) -> Result<MemberRecord, HouseholdError> {
        if index == 0 {
            return Err(HouseholdError::HeadRemoval);
        }
        if index >= self.members.len() {
            return Err(HouseholdError::NoSuchMember {
                index,
                len: self.members.len(),
            });
        }
        let removed = self.members.remove(index);
        self.normalize();
        Ok(removed)
    }

    /// Clear spouse choices outside index 1
    ///
    /// A member shifting into index 1 therefore arrives as child/other.
    pub fn normalize(&mut self) {
        if let Some(head) = self.members.first_mut() {
            head.choice = RoleChoice::ChildOrOther;
        }
        for member in self.members.iter_mut().skip(2) {
            member.choice = RoleChoice::ChildOrOther;
        }
    }
}
