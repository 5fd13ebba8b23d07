//! Testing utilities for the intake workspace
//!
//! Shared fixtures and tracing setup.

#![allow(missing_docs)]

use intake_state::{ClientStore, Node};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; later calls are no-ops
///
/// Honors `RUST_LOG`, defaulting to `debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// One stored member record
pub fn member(age: u64, role: &str, disabled: bool) -> Value {
    json!({"m_age": age, "m_role": role, "m_disabled": disabled})
}

/// Household with only the head
pub fn head_only() -> Vec<Value> {
    vec![member(40, "head", false)]
}

/// Head, spouse and one child
pub fn family_of_three() -> Vec<Value> {
    vec![
        member(40, "head", false),
        member(30, "spouse", false),
        member(12, "member", false),
    ]
}

/// Client tree with `household` at the top level
pub fn client_with(household: Vec<Value>) -> Node {
    Node::from(json!({
        "zip": "02139",
        "household": household,
        "income": {"earned": 1200, "unearned": 0},
    }))
}

/// Client tree with a head-only household
pub fn sample_client() -> Node {
    client_with(head_only())
}

/// Client tree split into `current` and `future`
pub fn timed_client(current: Vec<Value>, future: Vec<Value>) -> Node {
    Node::from(json!({
        "current": {"household": current},
        "future": {"household": future},
    }))
}

/// Store around [`sample_client`]
pub fn sample_store() -> ClientStore {
    ClientStore::new(sample_client())
}
