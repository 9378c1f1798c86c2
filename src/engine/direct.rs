//! Direct Scan strategy: examine every (demand, supply) pair.
//!
//! O(D * S * k) where k is the intersection cost. This is the reference
//! implementation the indexed join is checked against.

use crate::engine::ranking;
use crate::types::percent::overlap_percent;
use crate::types::{DemandRecord, MatchTuple, SupplyRecord};

/// Score one pair, returning a tuple when they share at least one capability.
///
/// Demands with an empty requirement set never match.
pub(crate) fn score_pair(demand: &DemandRecord, supply: &SupplyRecord) -> Option<MatchTuple> {
    let total = demand.required.len();
    if total == 0 {
        return None;
    }

    let overlap = supply.possessed.intersect_count(&demand.required);
    if overlap == 0 {
        return None;
    }

    let percent = overlap_percent(overlap, total)?;
    Some(MatchTuple::new(
        supply.id,
        supply.label.clone(),
        demand.id,
        demand.label.clone(),
        overlap,
        percent,
    ))
}

/// Match every demand against every supply and rank the result.
pub fn direct_scan(demands: &[DemandRecord], supplies: &[SupplyRecord]) -> Vec<MatchTuple> {
    let mut matches: Vec<MatchTuple> = demands
        .iter()
        .flat_map(|demand| supplies.iter().filter_map(move |supply| score_pair(demand, supply)))
        .collect();

    ranking::rank(&mut matches);
    matches
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CapabilitySet;

    fn demand(id: u64, caps: &str) -> DemandRecord {
        DemandRecord::new(id, format!("demand {}", id), CapabilitySet::parse(caps))
    }

    fn supply(id: u64, caps: &str) -> SupplyRecord {
        SupplyRecord::new(id, format!("supply {}", id), CapabilitySet::parse(caps))
    }

    #[test]
    fn test_score_pair_partial_overlap() {
        let t = score_pair(&demand(3, "B, C, D, E, F"), &supply(5, "A, D")).unwrap();

        assert_eq!(t.demand_id, 3);
        assert_eq!(t.supply_id, 5);
        assert_eq!(t.overlap_count, 1);
        assert_eq!(t.overlap_percent, 20);
    }

    #[test]
    fn test_score_pair_disjoint() {
        assert!(score_pair(&demand(1, "A"), &supply(2, "B, C")).is_none());
    }

    #[test]
    fn test_score_pair_empty_required() {
        let empty = DemandRecord::new(1, "Nothing", CapabilitySet::new());
        assert!(score_pair(&empty, &supply(2, "A, B")).is_none());
    }

    #[test]
    fn test_score_pair_empty_token_matches_empty_token() {
        // "" parses to {""}, which is a real (non-empty) set
        let t = score_pair(&demand(1, ""), &supply(2, "")).unwrap();
        assert_eq!(t.overlap_count, 1);
        assert_eq!(t.overlap_percent, 100);
    }

    #[test]
    fn test_direct_scan_is_ranked() {
        let demands = vec![demand(1, "A"), demand(2, "A, B"), demand(3, "A, B, C")];
        let supplies = vec![supply(10, "A"), supply(11, "A, B, C")];

        let matches = direct_scan(&demands, &supplies);

        assert_eq!(matches.len(), 6);
        assert!(ranking::is_ranked(&matches));
        assert_eq!(matches[0].overlap_percent, 100);
        assert_eq!(matches.last().unwrap().overlap_percent, 33);
    }

    #[test]
    fn test_direct_scan_empty_inputs() {
        assert!(direct_scan(&[], &[supply(1, "A")]).is_empty());
        assert!(direct_scan(&[demand(1, "A")], &[]).is_empty());
    }
}
