use crate::error::GateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gate lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateState {
    /// Modal shown, flow blocked
    #[default]
    Pending,
    /// Terms accepted; terminal
    Accepted,
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Accepted => f.write_str("accepted"),
        }
    }
}

/// Validates a state transition.
///
/// # Errors
/// [`GateError::IllegalTransition`] if `to` is not reachable from `from`
pub fn validate_transition(from: GateState, to: GateState) -> Result<(), GateError> {
    if allowed(from, to) {
        Ok(())
    } else {
        Err(GateError::IllegalTransition { from, to })
    }
}

/// States reachable from `from` in one step
#[must_use]
pub fn allowed_transitions(from: GateState) -> Vec<GateState> {
    match from {
        GateState::Pending => vec![GateState::Accepted],
        GateState::Accepted => vec![],
    }
}

fn allowed(from: GateState, to: GateState) -> bool {
    allowed_transitions(from).into_iter().any(|s| s == to)
}
