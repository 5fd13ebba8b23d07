//! Intake Gate
//!
//! Terms-and-conditions acceptance for the intake flow.
//!
//! The gate has two states, `Pending` and `Accepted`. Moving to `Accepted`
//! requires both acknowledgements and an explicit accept; declining hands a
//! navigation effect back to the shell and leaves the state alone.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod gate;
pub mod state_machine;

// Re-exports
pub use error::GateError;
pub use gate::{
    AcceptanceGate, Acknowledgement, GateConfig, GateEffect, GateEvent, DEFAULT_DECLINE_ROUTE,
};
pub use state_machine::GateState;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
