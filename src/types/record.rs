//! Demand and supply records.
//!
//! Both kinds are plain value types: an id, a display label and a
//! capability set. They are built once at ingestion and never mutated.
//!
//! ## Terminology
//!
//! - **Demand**: an entity that *requires* capabilities (a job opening)
//! - **Supply**: an entity that *possesses* capabilities (a job seeker)

use crate::types::CapabilitySet;

/// A record that requires a set of capabilities.
///
/// ## Example
///
/// ```
/// use skillmatch::types::{CapabilitySet, DemandRecord};
///
/// let job = DemandRecord::new(1, "Ruby Developer", CapabilitySet::parse("Ruby, SQL"));
/// assert_eq!(job.required.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DemandRecord {
    /// Record identifier (>= 1 for ingested data)
    pub id: u64,

    /// Display label (job title)
    pub label: String,

    /// Capabilities the demand requires
    pub required: CapabilitySet,
}

impl DemandRecord {
    /// Create a new demand record
    ///
    /// # Arguments
    ///
    /// * `id` - Record identifier
    /// * `label` - Display label
    /// * `required` - Required capability set
    pub fn new(id: u64, label: impl Into<String>, required: CapabilitySet) -> Self {
        Self {
            id,
            label: label.into(),
            required,
        }
    }
}

/// A record that possesses a set of capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SupplyRecord {
    /// Record identifier (>= 1 for ingested data)
    pub id: u64,

    /// Display label (person name)
    pub label: String,

    /// Capabilities the supply possesses
    pub possessed: CapabilitySet,
}

impl SupplyRecord {
    /// Create a new supply record
    ///
    /// # Arguments
    ///
    /// * `id` - Record identifier
    /// * `label` - Display label
    /// * `possessed` - Possessed capability set
    pub fn new(id: u64, label: impl Into<String>, possessed: CapabilitySet) -> Self {
        Self {
            id,
            label: label.into(),
            possessed,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
