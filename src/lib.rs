//! # skillmatch
//!
//! Rank demand records (jobs) against supply records (job seekers) by the
//! capabilities they share.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (CapabilitySet, records, MatchTuple, MatchReceipt)
//! - **Engine**: Deterministic matching with two equivalent strategies plus ranking
//! - **IO**: CSV ingestion/egress and seeded synthetic datasets
//! - **Config**: Defaults and environment overrides for the binary
//!
//! ## Design Principles
//!
//! 1. **Determinism**: All operations produce identical results for identical inputs
//! 2. **Strategy Equivalence**: Direct Scan and Indexed Join emit byte-identical output
//! 3. **No Floating Point**: Percentages use exact decimal math, rounded half to even
//! 4. **Synchronous Execution**: A matching run is a pure function of its inputs

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: CapabilitySet, DemandRecord, SupplyRecord, MatchTuple
pub mod types;

/// Matching engine: Direct Scan, Indexed Join and ranking
pub mod engine;

/// CSV readers/writers and synthetic record generation
pub mod io;

/// Run configuration
pub mod config;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{CapabilitySet, DemandRecord, MatchReceipt, MatchTuple, SupplyRecord};
pub use engine::{compute_matches, MatchError, MatchResult, MatchingEngine, Strategy};
