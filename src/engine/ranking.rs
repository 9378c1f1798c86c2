//! Total ordering of match tuples.
//!
//! ## Order
//!
//! Ascending over the key
//! `(Reverse(overlap_percent), Reverse(overlap_count), demand_id, supply_id)`:
//!
//! 1. overlap percent, highest first
//! 2. overlap count, highest first
//! 3. demand id, lowest first
//! 4. supply id, lowest first
//!
//! Inputs with duplicate ids can still produce two tuples that tie on all
//! four keys. The labels break that tie, so the order is total over distinct
//! tuples and both strategies always emit the same sequence.

use std::cmp::{Ordering, Reverse};

use crate::types::MatchTuple;

/// Sort key of a match tuple
pub type RankKey<'a> = (Reverse<u8>, Reverse<usize>, u64, u64, &'a str, &'a str);

/// Build the sort key for `m`
#[inline]
pub fn rank_key(m: &MatchTuple) -> RankKey<'_> {
    (
        Reverse(m.overlap_percent),
        Reverse(m.overlap_count),
        m.demand_id,
        m.supply_id,
        m.demand_label.as_str(),
        m.supply_label.as_str(),
    )
}

/// Key ordering skillset-pair summaries before expansion.
///
/// This is a prefix of [`rank_key`]: summaries sorted by it expand into runs
/// that only need ordering by id within equal `(percent, count)`.
#[inline]
pub fn summary_key(overlap_percent: u8, overlap_count: usize) -> (Reverse<u8>, Reverse<usize>) {
    (Reverse(overlap_percent), Reverse(overlap_count))
}

/// Compare two match tuples by rank
#[inline]
pub fn compare(a: &MatchTuple, b: &MatchTuple) -> Ordering {
    rank_key(a).cmp(&rank_key(b))
}

/// Sort matches into rank order in place
pub fn rank(matches: &mut [MatchTuple]) {
    // Full-key ties are identical tuples, so stability is irrelevant
    matches.sort_unstable_by(compare);
}

/// Check that matches are already in rank order
pub fn is_ranked(matches: &[MatchTuple]) -> bool {
    matches
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

// ============================================================================
// Unit Tests
// ============================================================================
