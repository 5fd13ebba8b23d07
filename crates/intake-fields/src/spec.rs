//! Field validation specs
//!
//! A [`FieldSpec`] pairs a display gate (raw text, checked on every input
//! event) with a store gate (coerced value, checked on commit), plus the
//! coercion from text to value and the format from value back to text.

use crate::predicates::{
    coerce_bool, coerce_number, coerce_whole_number, display_text,
    has_only_non_neg_number_chars, has_only_non_neg_whole_number_chars, is_bool,
    is_non_neg_number, is_non_neg_whole_number,
};
use intake_state::Node;
use std::fmt;
use std::sync::Arc;

type DisplayPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;
type StorePredicate = Arc<dyn Fn(&Node) -> bool + Send + Sync>;
type Coercion = Arc<dyn Fn(&str) -> Node + Send + Sync>;
type Format = Arc<dyn Fn(&Node) -> String + Send + Sync>;

/// Which gate turned a value away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Raw input contains characters the box does not allow
    Display,
    /// Value is not legal to persist
    Store,
}

/// Display/store gate pair for one field
///
/// Cheap to clone; predicates are shared.
#[derive(Clone)]
pub struct FieldSpec {
    display: DisplayPredicate,
    store: StorePredicate,
    coerce: Coercion,
    format: Format,
}

impl FieldSpec {
    /// Create spec from a display and a store predicate
    ///
    /// Coercion defaults to plain text and format to [`display_text`].
    pub fn new<D, S>(display: D, store: S) -> Self
    where
        D: Fn(&str) -> bool + Send + Sync + 'static,
        S: Fn(&Node) -> bool + Send + Sync + 'static,
    {
        Self {
            display: Arc::new(display),
            store: Arc::new(store),
            coerce: Arc::new(|raw: &str| Node::from(raw)),
            format: Arc::new(display_text),
        }
    }

    /// Replace the text-to-value coercion
    #[must_use]
    pub fn with_coercion<C>(mut self, coerce: C) -> Self
    where
        C: Fn(&str) -> Node + Send + Sync + 'static,
    {
        self.coerce = Arc::new(coerce);
        self
    }

    /// Replace the value-to-text format
    #[must_use]
    pub fn with_format<F>(mut self, format: F) -> Self
    where
        F: Fn(&Node) -> String + Send + Sync + 'static,
    {
        self.format = Arc::new(format);
        self
    }

    /// Non-negative whole number (ages, counts)
    #[must_use]
    pub fn whole_number() -> Self {
        Self::new(has_only_non_neg_whole_number_chars, is_non_neg_whole_number)
            .with_coercion(coerce_whole_number)
    }

    /// Non-negative number with up to two decimals (money)
    #[must_use]
    pub fn non_neg_number() -> Self {
        Self::new(has_only_non_neg_number_chars, is_non_neg_number).with_coercion(coerce_number)
    }

    /// Checkbox flag
    #[must_use]
    pub fn boolean() -> Self {
        Self::new(|raw| raw == "true" || raw == "false", is_bool).with_coercion(coerce_bool)
    }

    /// One of a fixed set of text options (dropdowns)
    #[must_use]
    pub fn one_of(options: &[&str]) -> Self {
        let options: Arc<[String]> = options.iter().map(|o| (*o).to_string()).collect();
        let display_options = Arc::clone(&options);
        Self::new(
            move |raw| display_options.iter().any(|o| o == raw),
            move |value| {
                value
                    .as_str()
                    .is_some_and(|s| options.iter().any(|o| o == s))
            },
        )
    }

    /// Display gate
    #[inline]
    #[must_use]
    pub fn admits_input(&self, raw: &str) -> bool {
        (self.display)(raw)
    }

    /// Store gate
    #[inline]
    #[must_use]
    pub fn admits_value(&self, value: &Node) -> bool {
        (self.store)(value)
    }

    /// Coerce raw text into a candidate value
    #[inline]
    #[must_use]
    pub fn coerce(&self, raw: &str) -> Node {
        (self.coerce)(raw)
    }

    /// Text shown for a stored value
    #[inline]
    #[must_use]
    pub fn format(&self, value: &Node) -> String {
        (self.format)(value)
    }

    /// Run both gates on raw text
    ///
    /// # Errors
    /// The first gate that rejects
    pub fn check_input(&self, raw: &str) -> Result<Node, Rejection> {
        if !self.admits_input(raw) {
            return Err(Rejection::Display);
        }
        self.check_value(self.coerce(raw))
    }

    /// Run the store gate on a value
    ///
    /// # Errors
    /// [`Rejection::Store`] if the value may not be persisted
    pub fn check_value(&self, value: Node) -> Result<Node, Rejection> {
        if self.admits_value(&value) {
            Ok(value)
        } else {
            Err(Rejection::Store)
        }
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec").finish_non_exhaustive()
    }
}
