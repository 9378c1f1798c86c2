//! Match tuple: one ranked (supply, demand) pairing.
//!
//! Field order follows the egress column order:
//! `supply_id, supply_label, demand_id, demand_label, overlap_count,
//! overlap_percent`.

use std::fmt;

/// Column headers, in field order
pub const MATCH_COLUMNS: [&str; 6] = [
    "supply_id",
    "supply_label",
    "demand_id",
    "demand_label",
    "overlap_count",
    "overlap_percent",
];

/// A supply record paired with a demand record it partially or fully covers.
///
/// ## Example
///
/// ```
/// use skillmatch::types::MatchTuple;
///
/// let m = MatchTuple::new(6, "Professional", 3, "Senior", 5, 100);
/// assert_eq!(m.overlap_percent, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchTuple {
    /// Supply record id
    pub supply_id: u64,

    /// Supply record label
    pub supply_label: String,

    /// Demand record id
    pub demand_id: u64,

    /// Demand record label
    pub demand_label: String,

    /// Number of shared capabilities (always >= 1)
    pub overlap_count: usize,

    /// `overlap_count * 100 / |required|`, rounded half to even
    pub overlap_percent: u8,
}

impl MatchTuple {
    /// Create a new match tuple
    ///
    /// # Arguments
    ///
    /// * `supply_id` - Supply record id
    /// * `supply_label` - Supply record label
    /// * `demand_id` - Demand record id
    /// * `demand_label` - Demand record label
    /// * `overlap_count` - Shared capability count
    /// * `overlap_percent` - Shared share of the demand's requirements
    pub fn new(
        supply_id: u64,
        supply_label: impl Into<String>,
        demand_id: u64,
        demand_label: impl Into<String>,
        overlap_count: usize,
        overlap_percent: u8,
    ) -> Self {
        Self {
            supply_id,
            supply_label: supply_label.into(),
            demand_id,
            demand_label: demand_label.into(),
            overlap_count,
            overlap_percent,
        }
    }

    /// Fields rendered as text, in column order
    pub fn to_fields(&self) -> [String; 6] {
        [
            self.supply_id.to_string(),
            self.supply_label.clone(),
            self.demand_id.to_string(),
            self.demand_label.clone(),
            self.overlap_count.to_string(),
            self.overlap_percent.to_string(),
        ]
    }
}

impl fmt::Display for MatchTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {:?}, {}, {:?}, {}, {})",
            self.supply_id,
            self.supply_label,
            self.demand_id,
            self.demand_label,
            self.overlap_count,
            self.overlap_percent
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
