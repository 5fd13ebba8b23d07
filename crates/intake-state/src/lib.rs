//! Intake State
//!
//! Path-addressed client state with copy-on-write spine updates.
//!
//! # Core Concepts
//!
//! - [`Node`]: Immutable client tree (maps, lists, scalars)
//! - [`Path`]: Slash-separated addressing (`household/2/m_age`)
//! - [`resolve`]: Locate the slot a path names, without creating structure
//! - [`set_at_path`]: New root with one slot replaced, siblings shared
//! - [`WriteChannel`]: The single designated write entry point
//! - [`ClientStore`]: In-memory root holder with revisions and undo
//!
//! # Example
//!
//! ```rust
//! use intake_state::{set_at_path, get, Node, Path};
//!
//! let root = Node::from(serde_json::json!({
//!     "household": [{"m_age": 40, "m_role": "head", "m_disabled": false}]
//! }));
//! let path: Path = "household/0/m_age".parse().unwrap();
//!
//! let next = set_at_path(&root, &path, Node::from(41u64)).unwrap();
//! assert_eq!(get(&next, &path).unwrap(), Some(&Node::from(41u64)));
//! assert_eq!(get(&root, &path).unwrap(), Some(&Node::from(40u64)));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod channel;
mod error;
mod node;
mod path;
mod resolve;
mod store;
mod update;

// Re-exports
pub use channel::WriteChannel;
pub use error::TreeError;
pub use node::{Node, NodeList, NodeMap};
pub use path::{parse_path, Path, PathError, Segment, SEPARATOR};
pub use resolve::{get, resolve, Slot};
pub use store::{ClientStore, DEFAULT_HISTORY_LIMIT};
pub use update::{apply_edits, set_at_path, TreeEdit};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
