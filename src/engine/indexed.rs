//! Indexed Join strategy: match distinct skillsets, then expand to records.
//!
//! ## Algorithm
//!
//! 1. Group demand records by identical required set and supply records by
//!    identical possessed set. Groups keep first-seen order and members keep
//!    ingestion order.
//! 2. Score every (demand group, supply group) pair once. Only pairs with a
//!    non-empty intersection and a non-empty demand set survive.
//! 3. Sort the surviving skillset pairs by `(percent desc, count desc)`.
//! 4. Expand each pair into one tuple per (demand member, supply member).
//! 5. Order each run of equal `(percent, count)` by the full rank key.
//!
//! Step 5 is required: two different skillset pairs can share a
//! `(percent, count)` while their member ids interleave.
//!
//! ## Complexity
//!
//! O(U_d * U_s * k) for scoring, where U is the number of distinct sets per
//! side, plus O(M log r) for the expansion, where M is the match count and r
//! the longest equal-score run. It beats the direct scan when many records
//! share identical capability sets.

use std::collections::HashMap;

use crate::engine::ranking;
use crate::types::percent::overlap_percent;
use crate::types::{CapabilitySet, DemandRecord, MatchTuple, SupplyRecord};

/// Records sharing one capability set, in ingestion order
#[derive(Debug)]
struct SkillsetGroup<'a, R> {
    skills: &'a CapabilitySet,
    members: Vec<&'a R>,
}

/// Score of one (demand group, supply group) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SkillsetPair {
    demand_group: usize,
    supply_group: usize,
    overlap_count: usize,
    overlap_percent: u8,
}

/// Group records by capability set, preserving first-seen group order.
fn group_by_skills<'a, R>(
    records: &'a [R],
    skills_of: impl Fn(&'a R) -> &'a CapabilitySet,
) -> Vec<SkillsetGroup<'a, R>> {
    let mut slots: HashMap<&'a CapabilitySet, usize> = HashMap::new();
    let mut groups: Vec<SkillsetGroup<'a, R>> = Vec::new();

    for record in records {
        let skills = skills_of(record);
        let slot = *slots.entry(skills).or_insert_with(|| {
            groups.push(SkillsetGroup {
                skills,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(record);
    }

    groups
}

/// Score all group pairs that share at least one capability
fn score_groups(
    demand_groups: &[SkillsetGroup<'_, DemandRecord>],
    supply_groups: &[SkillsetGroup<'_, SupplyRecord>],
) -> Vec<SkillsetPair> {
    let mut pairs = Vec::new();

    for (demand_group, demand) in demand_groups.iter().enumerate() {
        let total = demand.skills.len();
        if total == 0 {
            continue;
        }

        for (supply_group, supply) in supply_groups.iter().enumerate() {
            let overlap_count = demand.skills.intersect_count(supply.skills);
            if overlap_count == 0 {
                continue;
            }
            if let Some(overlap_percent) = overlap_percent(overlap_count, total) {
                pairs.push(SkillsetPair {
                    demand_group,
                    supply_group,
                    overlap_count,
                    overlap_percent,
                });
            }
        }
    }

    pairs
}

/// Match demands to supplies through their distinct skillsets.
pub fn indexed_join(demands: &[DemandRecord], supplies: &[SupplyRecord]) -> Vec<MatchTuple> {
    let demand_groups = group_by_skills(demands, |d| &d.required);
    let supply_groups = group_by_skills(supplies, |s| &s.possessed);

    let mut pairs = score_groups(&demand_groups, &supply_groups);
    pairs.sort_by_key(|p| ranking::summary_key(p.overlap_percent, p.overlap_count));

    tracing::debug!(
        demand_sets = demand_groups.len(),
        supply_sets = supply_groups.len(),
        skillset_pairs = pairs.len(),
        "indexed join scored distinct skillsets"
    );

    let capacity = pairs
        .iter()
        .map(|p| demand_groups[p.demand_group].members.len() * supply_groups[p.supply_group].members.len())
        .sum();
    let mut matches = Vec::with_capacity(capacity);

    for pair in &pairs {
        let demand_members = &demand_groups[pair.demand_group].members;
        let supply_members = &supply_groups[pair.supply_group].members;

        for demand in demand_members {
            for supply in supply_members {
                matches.push(MatchTuple::new(
                    supply.id,
                    supply.label.clone(),
                    demand.id,
                    demand.label.clone(),
                    pair.overlap_count,
                    pair.overlap_percent,
                ));
            }
        }
    }

    for run in matches.chunk_by_mut(|a, b| {
        a.overlap_percent == b.overlap_percent && a.overlap_count == b.overlap_count
    }) {
        ranking::rank(run);
    }

    matches
}

// ============================================================================
// Unit Tests
// ============================================================================
