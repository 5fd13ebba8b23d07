//! Error types for field validation

use intake_state::TreeError;

/// Errors raised by field controls
///
/// A value turned away by a gate is not an error; see
/// [`crate::Rejection`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// No spec registered for the field
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Write reached the tree and was refused there
    #[error("write failed: {0}")]
    Tree(#[from] TreeError),
}
