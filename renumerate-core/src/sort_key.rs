//! Natural ordering of names: embedded numbers compare by value.
//!
//! Numbers are compared on their digit text, never parsed, so arbitrarily long
//! digit runs order correctly without overflow.

use crate::tokenizer::{runs, RunKind};
use std::cmp::Ordering;

/// One element of a [`SortKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyPart {
    Text(String),
    /// Digit text exactly as it appears in the name
    Number(String),
}

impl Ord for KeyPart {
    /// Text compares by `char` order, numbers by value. At the same position a
    /// `Text` part always sorts before a `Number` part.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => compare_digits(a, b),
            (Self::Text(_), Self::Number(_)) => Ordering::Less,
            (Self::Number(_), Self::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for KeyPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Comparable key for one name.
///
/// Ordering is lexicographic over the parts; a key that is a strict prefix of
/// another sorts first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(pub Vec<KeyPart>);

impl SortKey {
    pub fn parts(&self) -> &[KeyPart] {
        &self.0
    }
}

/// Build the natural sort key of a full name (stem and extension together).
pub fn natural_sort_key(name: &str) -> SortKey {
    SortKey(
        runs(name)
            .map(|run| match run.kind {
                RunKind::Digit => KeyPart::Number(run.text.to_string()),
                RunKind::NonDigit => KeyPart::Text(run.text.to_string()),
            })
            .collect(),
    )
}

/// Compare two names in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_sort_key(a).cmp(&natural_sort_key(b))
}

/// Digit text with leading zeros removed; `"000"` becomes `""` (zero).
pub(crate) fn significant_digits(digits: &str) -> &str {
    digits.trim_start_matches('0')
}

/// Compare two digit strings by value without parsing them.
///
/// Equal values written differently (`"01"` and `"1"`) are ordered by the
/// shorter spelling first, so the ordering agrees with string equality.
pub fn compare_digits(a: &str, b: &str) -> Ordering {
    compare_values(a, b).then_with(|| a.len().cmp(&b.len()))
}

/// Compare two digit strings by numeric value only.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    let (a_sig, b_sig) = (significant_digits(a), significant_digits(b));
    a_sig
        .len()
        .cmp(&b_sig.len())
        .then_with(|| a_sig.cmp(b_sig))
}
