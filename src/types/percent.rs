//! Overlap percentage arithmetic.
//!
//! ## Overview
//!
//! The overlap percent of a match is `overlap_count * 100 / |required|`,
//! rounded to a whole number. Both matching strategies go through
//! [`overlap_percent`], so they can never disagree on a value.
//!
//! ## Why Not Floating Point?
//!
//! `count / total * 100` and `count * 100 / total` give different `f64`
//! results for some inputs, and the `.5` boundary is exactly where that
//! matters. The quotient is computed as a `Decimal`, which is exact for every
//! midpoint case (a midpoint needs `total` to divide `count * 200`).
//!
//! ## Rounding Rule
//!
//! Round half to even (banker's rounding): `12.5 -> 12`, `37.5 -> 38`.
//!
//! ## Examples
//!
//! ```
//! use skillmatch::types::percent::overlap_percent;
//!
//! assert_eq!(overlap_percent(1, 5), Some(20));
//! assert_eq!(overlap_percent(1, 3), Some(33));
//! assert_eq!(overlap_percent(1, 8), Some(12)); // 12.5 rounds to even
//! assert_eq!(overlap_percent(3, 8), Some(38)); // 37.5 rounds to even
//! assert_eq!(overlap_percent(1, 0), None);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Multiplier turning a ratio into a percentage
pub const PERCENT_SCALE: u64 = 100;

/// Midpoint rule applied to every percentage
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Exact, unrounded percentage `count * 100 / total`.
///
/// # Returns
///
/// * `Some(Decimal)` - The percentage
/// * `None` - If `total` is zero or the multiplication overflows
pub fn exact_percent(count: usize, total: usize) -> Option<Decimal> {
    if total == 0 {
        return None;
    }

    let scaled = (count as u64).checked_mul(PERCENT_SCALE)?;
    Decimal::from(scaled).checked_div(Decimal::from(total as u64))
}

/// Round a percentage to a whole number using [`ROUNDING`].
///
/// Returns `None` for values outside `0..=255`.
pub fn round_percent(value: Decimal) -> Option<u8> {
    value.round_dp_with_strategy(0, ROUNDING).to_u8()
}

/// Whole-number overlap percentage of `count` out of `total`.
///
/// # Arguments
///
/// * `count` - Number of overlapping capabilities
/// * `total` - Size of the demand's required set (the denominator)
///
/// # Returns
///
/// * `Some(u8)` - The rounded percentage
/// * `None` - If `total` is zero or `count > total`
pub fn overlap_percent(count: usize, total: usize) -> Option<u8> {
    if count > total {
        return None;
    }
    exact_percent(count, total).and_then(round_percent)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_exact_percent() {
        assert_eq!(exact_percent(1, 8), Some(Decimal::from_str("12.5").unwrap()));
        assert_eq!(exact_percent(5, 5), Some(Decimal::from(100)));
        assert_eq!(exact_percent(0, 3), Some(Decimal::ZERO));
        assert_eq!(exact_percent(1, 0), None);
    }

    #[test]
    fn test_round_percent_half_even() {
        assert_eq!(round_percent(Decimal::from_str("12.5").unwrap()), Some(12));
        assert_eq!(round_percent(Decimal::from_str("13.5").unwrap()), Some(14));
        assert_eq!(round_percent(Decimal::from_str("0.5").unwrap()), Some(0));
        assert_eq!(round_percent(Decimal::from_str("66.6666").unwrap()), Some(67));
    }

    #[test]
    fn test_round_percent_out_of_range() {
        assert_eq!(round_percent(Decimal::from(256)), None);
        assert_eq!(round_percent(Decimal::from(-1)), None);
    }

    #[test]
    fn test_overlap_percent_common_ratios() {
        assert_eq!(overlap_percent(1, 1), Some(100));
        assert_eq!(overlap_percent(1, 2), Some(50));
        assert_eq!(overlap_percent(2, 3), Some(67));
        assert_eq!(overlap_percent(1, 6), Some(17));
        assert_eq!(overlap_percent(5, 6), Some(83));
        assert_eq!(overlap_percent(1, 5), Some(20));
    }

    #[test]
    fn test_overlap_percent_midpoints() {
        // x/8 and x/40 hit exact .5 boundaries
        assert_eq!(overlap_percent(1, 8), Some(12));
        assert_eq!(overlap_percent(3, 8), Some(38));
        assert_eq!(overlap_percent(5, 8), Some(62));
        assert_eq!(overlap_percent(7, 8), Some(88));
        assert_eq!(overlap_percent(1, 40), Some(2));
        assert_eq!(overlap_percent(3, 40), Some(8));
    }

    #[test]
    fn test_overlap_percent_can_round_to_zero() {
        // A single overlap out of 200+ required capabilities rounds down
        assert_eq!(overlap_percent(1, 200), Some(0));
        assert_eq!(overlap_percent(1, 199), Some(1));
    }

    #[test]
    fn test_overlap_percent_invalid() {
        assert_eq!(overlap_percent(0, 0), None);
        assert_eq!(overlap_percent(3, 2), None);
    }

    #[test]
    fn test_overlap_percent_bounds() {
        for total in 1..200usize {
            for count in 1..=total {
                let pct = overlap_percent(count, total).unwrap();
                assert!((1..=100).contains(&pct), "{}/{} -> {}", count, total, pct);
            }
        }
    }
}
