//! Capability sets: the unordered skill collections carried by every record.
//!
//! ## Textual Form
//!
//! A capability set is written as its tokens joined by the exact delimiter
//! `", "` (comma, single space). Parsing is deliberately literal:
//!
//! - `"a,b"` is ONE token (`a,b`), not two
//! - tokens are case-sensitive (`"b"` and `"B"` differ)
//! - `""` parses to the one-element set `{""}`
//!
//! ## Canonical Representation
//!
//! Tokens are held in a `BTreeSet`, so two sets built from the same tokens in
//! any order are equal, hash identically and serialize to the same text.
//! This lets a `CapabilitySet` key a `HashMap` directly when grouping
//! records by identical skillsets.
//!
//! ## Example
//!
//! ```
//! use skillmatch::types::CapabilitySet;
//!
//! let a = CapabilitySet::parse("Rust, SQL, Rust");
//! let b = CapabilitySet::parse("SQL, Rust");
//!
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 2);
//! assert_eq!(a.to_text(), "Rust, SQL");
//! ```

use std::collections::BTreeSet;
use std::fmt;

/// Delimiter between tokens in the textual form.
pub const DELIMITER: &str = ", ";

/// An immutable, order-independent set of capability tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CapabilitySet {
    tokens: BTreeSet<String>,
}

impl CapabilitySet {
    /// Create an empty capability set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `", "`-delimited textual form.
    ///
    /// Every substring produced by the split becomes a member, including
    /// empty ones. Duplicates collapse.
    ///
    /// # Example
    ///
    /// ```
    /// use skillmatch::types::CapabilitySet;
    ///
    /// assert_eq!(CapabilitySet::parse("a, b, b").len(), 2);
    /// assert_eq!(CapabilitySet::parse("a,b").len(), 1);
    /// assert!(CapabilitySet::parse("").contains(""));
    /// ```
    pub fn parse(text: &str) -> Self {
        text.split(DELIMITER).collect()
    }

    /// Serialize to the `", "`-delimited textual form (sorted token order).
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                out.push_str(DELIMITER);
            }
            out.push_str(token);
        }
        out
    }

    /// Number of distinct tokens
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the set has no tokens
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check membership of a single token
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Iterate tokens in canonical (sorted) order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Cardinality of the intersection with `other`.
    ///
    /// Walks the smaller set and probes the larger one.
    pub fn intersect_count(&self, other: &CapabilitySet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .tokens
            .iter()
            .filter(|token| large.tokens.contains(*token))
            .count()
    }
}

impl<S: Into<String>> FromIterator<S> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
