//! Error types for the acceptance gate

use crate::state_machine::GateState;

/// Errors raised by the acceptance gate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// Transition not in the table
    #[error("illegal gate transition: {from} -> {to}")]
    IllegalTransition {
        from: GateState,
        to: GateState,
    },

    /// Accept invoked before both acknowledgements were given
    #[error("both acknowledgements are required (first: {first}, second: {second})")]
    NotAcknowledged {
        first: bool,
        second: bool,
    },

    /// Decline invoked after the gate closed
    #[error("terms were already accepted")]
    AlreadyAccepted,
}
