//! Property tests: strategy equivalence, completeness and ranking over
//! arbitrary small record sets.

use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

use skillmatch::engine::ranking::is_ranked;
use skillmatch::types::percent::overlap_percent;
use skillmatch::{compute_matches, CapabilitySet, DemandRecord, Strategy as MatchStrategy, SupplyRecord};

/// Small token alphabet so overlaps and shared sets are common
fn capability_set() -> impl Strategy<Value = CapabilitySet> {
    btree_set(prop::sample::select(vec!["A", "B", "C", "D", "E", "F", "G"]), 0..5)
        .prop_map(|tokens| tokens.into_iter().collect())
}

fn demands() -> impl Strategy<Value = Vec<DemandRecord>> {
    vec((1u64..15, capability_set()), 0..12).prop_map(|rows| {
        rows.into_iter()
            .map(|(id, caps)| DemandRecord::new(id, format!("job-{}", id), caps))
            .collect()
    })
}

fn supplies() -> impl Strategy<Value = Vec<SupplyRecord>> {
    vec((1u64..15, capability_set()), 0..12).prop_map(|rows| {
        rows.into_iter()
            .map(|(id, caps)| SupplyRecord::new(id, format!("seeker-{}", id), caps))
            .collect()
    })
}

proptest! {
    #[test]
    fn strategies_are_equivalent(d in demands(), s in supplies()) {
        let direct = compute_matches(d.clone(), s.clone(), MatchStrategy::DirectScan);
        let indexed = compute_matches(d, s, MatchStrategy::IndexedJoin);
        prop_assert_eq!(direct, indexed);
    }

    #[test]
    fn output_is_ranked(d in demands(), s in supplies()) {
        for strategy in MatchStrategy::ALL {
            let matches = compute_matches(d.clone(), s.clone(), strategy);
            prop_assert!(is_ranked(&matches));
        }
    }

    #[test]
    fn matches_are_complete_and_sound(d in demands(), s in supplies()) {
        let matches = compute_matches(d.clone(), s.clone(), MatchStrategy::IndexedJoin);

        let expected = d
            .iter()
            .flat_map(|demand| s.iter().map(move |supply| (demand, supply)))
            .filter(|(demand, supply)| {
                !demand.required.is_empty() && demand.required.intersect_count(&supply.possessed) > 0
            })
            .count();
        prop_assert_eq!(matches.len(), expected);

        for m in &matches {
            prop_assert!(m.overlap_count >= 1);
            prop_assert!((1..=100).contains(&m.overlap_percent));
        }
    }

    #[test]
    fn percent_matches_formula(d in demands(), s in supplies()) {
        for demand in &d {
            for supply in &s {
                let count = demand.required.intersect_count(&supply.possessed);
                if count == 0 || demand.required.is_empty() {
                    continue;
                }
                let matches = compute_matches(vec![demand.clone()], vec![supply.clone()], MatchStrategy::DirectScan);
                prop_assert_eq!(matches.len(), 1);
                prop_assert_eq!(Some(matches[0].overlap_percent), overlap_percent(count, demand.required.len()));
            }
        }
    }

    #[test]
    fn capability_parse_roundtrip(tokens in vec("[a-zA-Z ]{0,6}", 0..6)) {
        let text = tokens.join(", ");
        let parsed = CapabilitySet::parse(&text);
        prop_assert_eq!(CapabilitySet::parse(&parsed.to_text()), parsed);
    }
}
