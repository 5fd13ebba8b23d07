//! Client state tree
//!
//! [`Node`] is the immutable value every form step reads from and writes to.
//! Containers sit behind [`Arc`] so a sibling subtree can be shared between
//! two roots, and so sharing can be observed with [`Node::same_ref`].

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

/// Map container
pub type NodeMap = OrdMap<String, Node>;

/// List container
pub type NodeList = Vector<Node>;

/// A value in the client tree
///
/// # Invariants
/// - Never mutated once shared; writes build new containers
/// - Cloning is O(1): containers are reference counted
///
/// Serializes as plain JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "JsonValue", into = "JsonValue")]
pub enum Node {
    /// Absent value
    #[default]
    Null,
    /// Boolean flag
    Bool(bool),
    /// Numeric value
    Number(serde_json::Number),
    /// Free text
    Text(String),
    /// Named fields
    Map(Arc<NodeMap>),
    /// Ordered entries
    List(Arc<NodeList>),
}

impl Node {
    /// Create an empty map
    #[inline]
    #[must_use]
    pub fn map() -> Self {
        Self::Map(Arc::new(NodeMap::new()))
    }

    /// Create an empty list
    #[inline]
    #[must_use]
    pub fn list() -> Self {
        Self::List(Arc::new(NodeList::new()))
    }

    /// Build a map from key/value pairs
    pub fn map_from<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Self::Map(Arc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Build a list from entries
    pub fn list_from<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        Self::List(Arc::new(entries.into_iter().collect()))
    }

    /// Check if node is a map or list
    #[inline]
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Map(_) | Self::List(_))
    }

    /// Check if node is null
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow as map
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&NodeMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow as list
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&NodeList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Boolean value
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whole non-negative number
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    /// Any number as float
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Text value
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Field of a map
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Entry of a list
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Node> {
        self.as_list().and_then(|list| list.get(index))
    }

    /// Number of children (0 for scalars)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Map(map) => map.len(),
            Self::List(list) => list.len(),
            _ => 0,
        }
    }

    /// Check if node has no children
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if two containers are the same allocation
    ///
    /// Scalars are copied on every clone and never share identity, so this
    /// is always false for them.
    #[inline]
    #[must_use]
    pub fn same_ref(&self, other: &Node) -> bool {
        match (self, other) {
            (Self::Map(a), Self::Map(b)) => Arc::ptr_eq(a, b),
            (Self::List(a), Self::List(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Convert to a `serde_json::Value` (deep copy)
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Number(n) => JsonValue::Number(n.clone()),
            Self::Text(s) => JsonValue::String(s.clone()),
            Self::Map(map) => JsonValue::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Self::List(list) => JsonValue::Array(list.iter().map(Node::to_json).collect()),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<JsonValue> for Node {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => Self::Number(n),
            JsonValue::String(s) => Self::Text(s),
            JsonValue::Array(items) => Self::list_from(items.into_iter().map(Node::from)),
            JsonValue::Object(fields) => {
                Self::map_from(fields.into_iter().map(|(k, v)| (k, Node::from(v))))
            }
        }
    }
}

impl From<Node> for JsonValue {
    fn from(node: Node) -> Self {
        node.to_json()
    }
}

impl From<bool> for Node {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<u64> for Node {
    fn from(v: u64) -> Self {
        Self::Number(v.into())
    }
}

impl From<u32> for Node {
    fn from(v: u32) -> Self {
        Self::Number(v.into())
    }
}

impl From<i64> for Node {
    fn from(v: i64) -> Self {
        Self::Number(v.into())
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        serde_json::Number::from_f64(v).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Node {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<Node>> for Node {
    fn from(v: Vec<Node>) -> Self {
        Self::list_from(v)
    }
}
