//! Predicate library
//!
//! Display predicates look at raw input text and only decide whether a
//! keystroke may land in the box. Store predicates look at the coerced value
//! and decide whether it may be persisted. Both are pure and total.

use intake_state::Node;

/// Maximum digits after the decimal point for money-like fields
pub const MAX_FRACTION_DIGITS: usize = 2;

/// Digits only, with no leading zero beyond a single `0`
///
/// The empty string passes: clearing the box is allowed while typing.
#[must_use]
pub fn has_only_non_neg_whole_number_chars(raw: &str) -> bool {
    raw.bytes().all(|b| b.is_ascii_digit()) && !(raw.len() > 1 && raw.starts_with('0'))
}

/// Non-negative whole number
#[must_use]
pub fn is_non_neg_whole_number(value: &Node) -> bool {
    value.as_u64().is_some()
}

/// Digits with at most one decimal point and two fractional digits
#[must_use]
pub fn has_only_non_neg_number_chars(raw: &str) -> bool {
    let mut parts = raw.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next();

    whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.map_or(true, |f| {
            f.len() <= MAX_FRACTION_DIGITS && f.bytes().all(|b| b.is_ascii_digit())
        })
}

/// Finite number greater than or equal to zero
#[must_use]
pub fn is_non_neg_number(value: &Node) -> bool {
    value.as_f64().is_some_and(|n| n.is_finite() && n >= 0.0)
}

/// Boolean flag
#[must_use]
pub fn is_bool(value: &Node) -> bool {
    value.as_bool().is_some()
}

/// Whole-number coercion; unparseable text stays text
#[must_use]
pub fn coerce_whole_number(raw: &str) -> Node {
    raw.parse::<u64>().map_or_else(|_| Node::from(raw), Node::from)
}

/// Decimal coercion; unparseable text stays text
#[must_use]
pub fn coerce_number(raw: &str) -> Node {
    if raw.is_empty() {
        return Node::from(raw);
    }
    if let Ok(whole) = raw.parse::<u64>() {
        return Node::from(whole);
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Node::from(n),
        _ => Node::from(raw),
    }
}

/// `true`/`false` coercion; anything else stays text
#[must_use]
pub fn coerce_bool(raw: &str) -> Node {
    match raw {
        "true" => Node::Bool(true),
        "false" => Node::Bool(false),
        _ => Node::from(raw),
    }
}

/// Text shown for a stored value
#[must_use]
pub fn display_text(value: &Node) -> String {
    match value {
        Node::Null => String::new(),
        Node::Text(s) => s.clone(),
        other => other.to_string(),
    }
}
