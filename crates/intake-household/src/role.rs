//! Member roles
//!
//! A role is never an independent field of a member. It is computed from
//! the member's position, plus the stored choice for index 1.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal role of a household member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Index 0, always
    #[serde(rename = "head")]
    Head,
    /// Index 1 when chosen
    #[serde(rename = "spouse")]
    Spouse,
    /// Everyone else
    #[serde(rename = "member")]
    ChildOrOther,
}

impl Role {
    /// Role for the member at `index`
    ///
    /// `choice` only matters at index 1.
    #[must_use]
    pub fn derive(index: usize, choice: RoleChoice) -> Self {
        match (index, choice) {
            (0, _) => Self::Head,
            (1, RoleChoice::Spouse) => Self::Spouse,
            _ => Self::ChildOrOther,
        }
    }

    /// Wire tag
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Spouse => "spouse",
            Self::ChildOrOther => "member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user-settable part of a role (index 1 dropdown)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleChoice {
    #[serde(rename = "spouse")]
    Spouse,
    #[default]
    #[serde(rename = "member")]
    ChildOrOther,
}

impl RoleChoice {
    /// Dropdown option tags
    pub const OPTIONS: [&'static str; 2] = ["spouse", "member"];

    /// Parse a dropdown tag
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "spouse" => Some(Self::Spouse),
            "member" => Some(Self::ChildOrOther),
            _ => None,
        }
    }
}

impl From<Role> for RoleChoice {
    fn from(role: Role) -> Self {
        match role {
            Role::Spouse => Self::Spouse,
            Role::Head | Role::ChildOrOther => Self::ChildOrOther,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_derive_by_position() {
        assert_eq!(Role::derive(0, RoleChoice::Spouse), Role::Head);
        assert_eq!(Role::derive(1, RoleChoice::Spouse), Role::Spouse);
        assert_eq!(Role::derive(1, RoleChoice::ChildOrOther), Role::ChildOrOther);
        assert_eq!(Role::derive(2, RoleChoice::Spouse), Role::ChildOrOther);
        assert_eq!(Role::derive(7, RoleChoice::ChildOrOther), Role::ChildOrOther);
    }

    #[test]
    fn role_wire_tags() {
        assert_eq!(serde_json::to_string(&Role::ChildOrOther).unwrap(), "\"member\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"head\"").unwrap(),
            Role::Head
        );
        assert_eq!(Role::Spouse.to_string(), "spouse");
    }

    #[test]
    fn choice_from_tag() {
        assert_eq!(RoleChoice::from_tag("spouse"), Some(RoleChoice::Spouse));
        assert_eq!(RoleChoice::from_tag("member"), Some(RoleChoice::ChildOrOther));
        assert_eq!(RoleChoice::from_tag("head"), None);
        assert_eq!(RoleChoice::from(Role::Head), RoleChoice::ChildOrOther);
    }
}
