//! Error types for household editing

use intake_fields::FieldError;
use intake_state::{Path, PathError, TreeError};

/// Errors raised by the household editor
///
/// None of these leave a partial write behind: the list is written as a
/// whole or not at all.
#[derive(Debug, thiserror::Error)]
pub enum HouseholdError {
    /// Removal of index 0 was requested
    #[error("the head of household (index 0) cannot be removed")]
    HeadRemoval,

    /// Role control requested at an index whose role is derived
    #[error("role of member {index} is not user-settable")]
    RoleLocked {
        /// Member index
        index: usize,
    },

    /// Index past the end of the list
    #[error("no member at index {index} (household has {len})")]
    NoSuchMember {
        /// Requested index
        index: usize,
        /// Current member count
        len: usize,
    },

    /// Nothing stored at the household path
    #[error("no household list at '{0}'")]
    Missing(Path),

    /// Household path holds something other than a list
    #[error("value at '{0}' is not a list")]
    NotAList(Path),

    /// Household list has no members
    #[error("household at '{0}' has no members")]
    Empty(Path),

    /// Member record does not have the expected shape
    #[error("malformed member at index {index}: {source}")]
    MalformedMember {
        /// Member index
        index: usize,
        /// Decoding failure
        #[source]
        source: serde_json::Error,
    },

    /// Field-level failure (unknown field, refused write)
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Tree write failed
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Configured base path does not parse
    #[error("invalid household path: {0}")]
    Path(#[from] PathError),
}

impl HouseholdError {
    /// Check if the error came from the stored data rather than the request
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::Missing(_) | Self::NotAList(_) | Self::Empty(_) | Self::MalformedMember { .. }
        )
    }
}
