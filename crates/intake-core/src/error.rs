//! Error types for the intake session

use crate::config::ConfigError;
use intake_fields::FieldError;
use intake_gate::GateError;
use intake_household::HouseholdError;
use intake_state::{Path, TreeError};

/// Umbrella error for session operations
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Household edit failed
    #[error("household error: {0}")]
    Household(#[from] HouseholdError),

    /// Field write failed
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Tree write failed
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    /// Acceptance gate refused the action
    #[error("gate error: {0}")]
    Gate(#[from] GateError),

    /// Raw write aimed at the household list or one of its ancestors
    #[error("'{0}' overlaps the household list; use the household editor")]
    HouseholdPath(Path),

    /// Write attempted while the terms are still pending
    #[error("terms must be accepted before editing")]
    TermsNotAccepted,
}

impl IntakeError {
    /// Check if the user can continue from here
    ///
    /// False for configuration problems and for errors that point at a
    /// caller or schema bug; the session is consistent either way.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Config(_) => false,
            Self::Tree(e) | Self::Field(FieldError::Tree(e)) => !e.is_caller_bug(),
            Self::Field(FieldError::UnknownField(_)) => false,
            Self::Household(e) => match e {
                HouseholdError::HeadRemoval
                | HouseholdError::NoSuchMember { .. }
                | HouseholdError::RoleLocked { .. } => true,
                HouseholdError::Tree(e) => !e.is_caller_bug(),
                _ => false,
            },
            Self::Gate(_) | Self::HouseholdPath(_) | Self::TermsNotAccepted => true,
        }
    }
}
