//! Intake Core
//!
//! Session facade for the household intake form.
//!
//! # Core Concepts
//!
//! - [`IntakeConfig`]: TOML-loadable settings
//! - [`IntakeSession`]: Client store, household editor and acceptance gate
//!   behind one API
//! - [`IntakeError`]: Umbrella error with recoverability classification
//!
//! # Example
//!
//! ```rust
//! use intake_core::{IntakeConfig, IntakeSession};
//! use intake_gate::{Acknowledgement, GateEvent};
//! use intake_state::Node;
//!
//! let root = Node::from(serde_json::json!({
//!     "household": [{"m_age": 40, "m_role": "head", "m_disabled": false}]
//! }));
//! let mut session = IntakeSession::new(IntakeConfig::new(), root).unwrap();
//!
//! session.handle_gate(GateEvent::Toggle(Acknowledgement::First)).unwrap();
//! session.handle_gate(GateEvent::Toggle(Acknowledgement::Second)).unwrap();
//! session.handle_gate(GateEvent::Accept).unwrap();
//!
//! session.append_member().unwrap();
//! assert_eq!(session.household_rows().unwrap().len(), 2);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod config;
mod error;
mod session;

// Re-exports
pub use config::{ConfigError, IntakeConfig};
pub use error::IntakeError;
pub use session::IntakeSession;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
