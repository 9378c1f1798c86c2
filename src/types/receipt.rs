//! Match receipt summarizing one matching run.
//!
//! The receipt carries the input/output counts of a run together with a
//! SHA-256 digest of the ranked match sequence. Two runs produced
//! byte-identical output if and only if their digests are equal, which is
//! how strategy equivalence is checked on large generated datasets without
//! keeping both outputs around.
//!
//! ## Digest Encoding
//!
//! Each tuple is fed to the hasher in order as:
//!
//! | Field | Encoding |
//! |-------|----------|
//! | supply_id | u64 little-endian |
//! | supply_label | u64 LE byte length + UTF-8 bytes |
//! | demand_id | u64 little-endian |
//! | demand_label | u64 LE byte length + UTF-8 bytes |
//! | overlap_count | u64 little-endian |
//! | overlap_percent | u8 |
//!
//! Length prefixes keep the encoding unambiguous whatever the labels contain.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::engine::Strategy;
use crate::types::MatchTuple;

/// Receipt for a single `compute_matches` run.
///
/// ## Example
///
/// ```
/// use skillmatch::engine::Strategy;
/// use skillmatch::types::{MatchReceipt, MatchTuple};
///
/// let matches = vec![MatchTuple::new(6, "Professional", 3, "Senior", 5, 100)];
/// let receipt = MatchReceipt::from_matches(Strategy::DirectScan, 3, 3, &matches);
///
/// assert_eq!(receipt.match_count, 1);
/// assert_eq!(receipt.digest_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReceipt {
    /// Strategy that produced the matches
    pub strategy: Strategy,

    /// Number of demand records consumed
    pub demand_count: u64,

    /// Number of supply records consumed
    pub supply_count: u64,

    /// Number of match tuples produced
    pub match_count: u64,

    /// SHA-256 over the encoded match sequence (32 bytes)
    pub digest: [u8; 32],
}

impl MatchReceipt {
    /// Create a receipt from already-known parts
    pub fn new(
        strategy: Strategy,
        demand_count: u64,
        supply_count: u64,
        match_count: u64,
        digest: [u8; 32],
    ) -> Self {
        Self {
            strategy,
            demand_count,
            supply_count,
            match_count,
            digest,
        }
    }

    /// Build a receipt by digesting a ranked match sequence
    ///
    /// # Arguments
    ///
    /// * `strategy` - Strategy that produced `matches`
    /// * `demand_count` - Demand records consumed
    /// * `supply_count` - Supply records consumed
    /// * `matches` - The ranked output
    pub fn from_matches(
        strategy: Strategy,
        demand_count: usize,
        supply_count: usize,
        matches: &[MatchTuple],
    ) -> Self {
        Self::new(
            strategy,
            demand_count as u64,
            supply_count as u64,
            matches.len() as u64,
            Self::compute_digest(matches),
        )
    }

    /// Compute the SHA-256 digest of a match sequence
    pub fn compute_digest(matches: &[MatchTuple]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for m in matches {
            hasher.update(m.supply_id.to_le_bytes());
            update_str(&mut hasher, &m.supply_label);
            hasher.update(m.demand_id.to_le_bytes());
            update_str(&mut hasher, &m.demand_label);
            hasher.update((m.overlap_count as u64).to_le_bytes());
            hasher.update([m.overlap_percent]);
        }

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        digest
    }

    /// Get the digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Check whether two receipts describe identical output.
    ///
    /// The strategy is ignored; that is the point of comparing receipts.
    pub fn same_output(&self, other: &MatchReceipt) -> bool {
        self.match_count == other.match_count && self.digest == other.digest
    }

    /// Matches produced per (demand x supply) pair examined
    ///
    /// Returns None if either side was empty.
    pub fn match_rate(&self) -> Option<f64> {
        let pairs = self.demand_count.checked_mul(self.supply_count)?;
        if pairs == 0 {
            None
        } else {
            Some(self.match_count as f64 / pairs as f64)
        }
    }
}

fn update_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

impl fmt::Display for MatchReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "strategy={} demands={} supplies={} matches={} digest={}",
            self.strategy,
            self.demand_count,
            self.supply_count,
            self.match_count,
            self.digest_hex()
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
