//! Core data types for skillmatch
//!
//! All types are immutable values once built. Percentages are computed with
//! exact decimal arithmetic, never floating point.
//!
//! ## Types
//!
//! - [`CapabilitySet`]: Canonical, order-independent set of capability tokens
//! - [`DemandRecord`]: A record that requires capabilities
//! - [`SupplyRecord`]: A record that possesses capabilities
//! - [`MatchTuple`]: One ranked (supply, demand) pairing
//! - [`MatchReceipt`]: Counts and digest for one matching run

pub mod capability;
mod record;
mod match_tuple;
mod receipt;
pub mod percent;

// Re-export all types at module level
pub use capability::CapabilitySet;
pub use record::{DemandRecord, SupplyRecord};
pub use match_tuple::{MatchTuple, MATCH_COLUMNS};
pub use receipt::MatchReceipt;
