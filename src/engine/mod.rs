//! Matching engine module for skillmatch.
//!
//! ## Design Principles
//!
//! The matching engine is designed for:
//!
//! 1. **Determinism**: Same input always produces same output, byte for byte
//! 2. **Strategy Equivalence**: Direct Scan and Indexed Join emit identical sequences
//! 3. **Exact Math**: Percentages use decimal arithmetic, rounded half to even
//! 4. **Synchronous Execution**: A run is a pure function of its inputs
//!
//! ## Matching Rules
//!
//! - A (demand, supply) pair matches when their capability sets intersect
//! - Demands with an empty requirement set never match
//! - `overlap_percent` is always relative to the demand's required set
//! - Output is ranked by percent desc, count desc, demand id asc, supply id asc
//!
//! ## Example
//!
//! ```
//! use skillmatch::engine::{compute_matches, Strategy};
//! use skillmatch::types::{CapabilitySet, DemandRecord, SupplyRecord};
//!
//! let demands = vec![DemandRecord::new(1, "Intern", CapabilitySet::parse("A"))];
//! let supplies = vec![SupplyRecord::new(5, "Beginner", CapabilitySet::parse("A, D"))];
//!
//! let matches = compute_matches(demands, supplies, Strategy::IndexedJoin);
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].overlap_percent, 100);
//! ```

pub mod direct;
pub mod indexed;
pub mod ranking;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::types::{DemandRecord, MatchReceipt, MatchTuple, SupplyRecord};

pub use direct::direct_scan;
pub use indexed::indexed_join;

// ============================================================================
// Errors
// ============================================================================

/// Errors surfaced by the matching engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The strategy selector named no known strategy
    #[error("unknown matching strategy {name:?}; expected one of: {}", Strategy::NAMES.join(", "))]
    InvalidStrategyName { name: String },
}

// ============================================================================
// Strategy
// ============================================================================

/// How candidate pairs are found. Both variants produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Brute-force cross product of all records
    #[default]
    DirectScan,
    /// Join over distinct capability sets, then expand to records
    IndexedJoin,
}

impl Strategy {
    /// Every strategy, in declaration order
    pub const ALL: [Strategy; 2] = [Strategy::DirectScan, Strategy::IndexedJoin];

    /// Canonical selector names
    pub const NAMES: [&'static str; 2] = ["direct_scan", "indexed_join"];

    /// Canonical selector name
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::DirectScan => "direct_scan",
            Strategy::IndexedJoin => "indexed_join",
        }
    }

    /// Run this strategy over buffered inputs
    pub fn run(self, demands: &[DemandRecord], supplies: &[SupplyRecord]) -> Vec<MatchTuple> {
        match self {
            Strategy::DirectScan => direct_scan(demands, supplies),
            Strategy::IndexedJoin => indexed_join(demands, supplies),
        }
    }
}

impl FromStr for Strategy {
    type Err = MatchError;

    /// Accepts the canonical names plus the legacy `naive` / `preemptive`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct_scan" | "naive" => Ok(Strategy::DirectScan),
            "indexed_join" | "preemptive" => Ok(Strategy::IndexedJoin),
            other => Err(MatchError::InvalidStrategyName {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Compute the ranked match sequence for two record collections.
///
/// Both inputs are buffered once, so single-pass iterators are fine.
/// Never fails: empty inputs, empty capability sets and disjoint sets all
/// simply yield fewer (or zero) tuples.
pub fn compute_matches<D, S>(demands: D, supplies: S, strategy: Strategy) -> Vec<MatchTuple>
where
    D: IntoIterator<Item = DemandRecord>,
    S: IntoIterator<Item = SupplyRecord>,
{
    let demands: Vec<DemandRecord> = demands.into_iter().collect();
    let supplies: Vec<SupplyRecord> = supplies.into_iter().collect();
    strategy.run(&demands, &supplies)
}

/// Result of a matching run
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// Ranked matches
    pub matches: Vec<MatchTuple>,

    /// Counts and digest of this run
    pub receipt: MatchReceipt,
}

/// Matching engine bound to one strategy.
///
/// ## Example
///
/// ```
/// use skillmatch::engine::MatchingEngine;
///
/// let engine = MatchingEngine::from_name("indexed_join").unwrap();
/// let result = engine.run(&[], &[]);
///
/// assert!(result.matches.is_empty());
/// assert_eq!(result.receipt.match_count, 0);
///
/// assert!(MatchingEngine::from_name("fuzzy").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingEngine {
    strategy: Strategy,
}

impl MatchingEngine {
    /// Create an engine using `strategy`
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Create an engine from a strategy selector name
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidStrategyName`] if `name` is not a known strategy.
    pub fn from_name(name: &str) -> Result<Self, MatchError> {
        Ok(Self::new(name.parse()?))
    }

    /// The strategy this engine runs
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Match buffered records and attach a receipt
    pub fn run(&self, demands: &[DemandRecord], supplies: &[SupplyRecord]) -> MatchResult {
        let matches = self.strategy.run(demands, supplies);
        let receipt =
            MatchReceipt::from_matches(self.strategy, demands.len(), supplies.len(), &matches);
        MatchResult { matches, receipt }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
