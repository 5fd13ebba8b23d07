//! Intake Fields
//!
//! Two-tier validation for form controls bound to the client tree.
//!
//! # Core Concepts
//!
//! - Display gate: runs on every raw input event and decides whether the
//!   keystroke may land in the box
//! - Store gate: runs on commit and decides whether the coerced value may be
//!   written to the tree
//! - [`FieldSpec`]: One display/store pair plus coercion and format
//! - [`ManagedField`]: A control holding display text apart from the stored
//!   value
//! - [`FieldRegistry`]: Specs keyed by field name
//!
//! # Example
//!
//! ```rust
//! use intake_fields::{FieldSpec, Rejection};
//!
//! let age = FieldSpec::whole_number();
//! assert!(age.admits_input(""));
//! assert_eq!(age.check_input(""), Err(Rejection::Store));
//! assert_eq!(age.check_input("3a"), Err(Rejection::Display));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod managed;
mod registry;
mod spec;

pub mod predicates;

// Re-exports
pub use error::FieldError;
pub use managed::{CommitOutcome, InputOutcome, ManagedField};
pub use registry::FieldRegistry;
pub use spec::{FieldSpec, Rejection};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
