//! Intake Household
//!
//! Editor for the variable-length household member list.
//!
//! # Core Concepts
//!
//! - [`Role`]: Derived from position; only index 1 carries a user choice
//! - [`Household`]: Private working copy decoded from the stored list
//! - [`HouseholdEditor`]: Append, remove and per-field writes through a
//!   [`WriteChannel`](intake_state::WriteChannel)
//! - [`MemberRow`]: What one rendered row needs
//!
//! The head (index 0) is never removed, and every structural edit rewrites
//! the whole list in a single write.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod config;
mod editor;
mod error;
mod member;
mod role;

// Re-exports
pub use config::{HouseholdConfig, DEFAULT_BASE_PATH};
pub use editor::{FieldWrite, HouseholdEditor, MemberRow};
pub use error::HouseholdError;
pub use member::{Household, MemberRecord, AGE_FIELD, DISABLED_FIELD, ROLE_FIELD};
pub use role::{Role, RoleChoice};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
