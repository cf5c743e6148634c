use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::{CalculatorError, Result};

/// Rounds `value` to `dp` decimal places, resolving ties away from zero.
///
/// The exact binary value of the float is rounded, not its shortest decimal
/// rendering, so `1.005` (stored as 1.00499...) becomes `1.0`. The rounded
/// decimal is parsed back so the returned float is the one nearest to it.
///
/// Finite values beyond the `Decimal` range are far above 2^53, where every
/// float is already a whole number, so they are returned unchanged.
pub fn round_half_away(value: f64, dp: u32) -> Result<f64> {
    if !value.is_finite() {
        return Err(CalculatorError::NonFiniteValue(value).into());
    }
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return Ok(value);
    };
    let rounded = exact.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    f64::from_str(&rounded.to_string())
        .map_err(|_| CalculatorError::NonFiniteValue(value).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_two_places() {
        assert_eq!(round_half_away(5.7132, 2).unwrap(), 5.71);
        assert_eq!(round_half_away(1.1, 2).unwrap(), 1.1);
        assert_eq!(round_half_away(0.0, 2).unwrap(), 0.0);
    }

    #[test]
    fn test_rounds_to_whole_number() {
        assert_eq!(round_half_away(24.532, 0).unwrap(), 25.0);
        assert_eq!(round_half_away(48.31, 0).unwrap(), 48.0);
        assert_eq!(round_half_away(100.0, 0).unwrap(), 100.0);
    }

    #[test]
    fn test_exact_ties_go_away_from_zero() {
        assert_eq!(round_half_away(0.5, 0).unwrap(), 1.0);
        assert_eq!(round_half_away(2.5, 0).unwrap(), 3.0);
        assert_eq!(round_half_away(0.125, 2).unwrap(), 0.13);
    }

    #[test]
    fn test_binary_value_decides_near_ties() {
        // 1.005 is stored just below the midpoint
        assert_eq!(round_half_away(1.005, 2).unwrap(), 1.0);
    }

    #[test]
    fn test_values_beyond_decimal_range_pass_through() {
        assert_eq!(round_half_away(7.008e29, 2).unwrap(), 7.008e29);
        assert_eq!(round_half_away(f64::MAX, 0).unwrap(), f64::MAX);
        assert_eq!(round_half_away(-1e30, 2).unwrap(), -1e30);
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        assert!(round_half_away(f64::NAN, 2).is_err());
        assert!(round_half_away(f64::INFINITY, 0).is_err());
    }
}
