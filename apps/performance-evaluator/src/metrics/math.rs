//! Statistical helpers over per-session return series, and overflow-safe
//! conversion of decimal quotients to floats.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::constants::HUNDRED;

/// Decimal to float, `0.0` when not representable.
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// `numerator / denominator` as a float. `0.0` when the denominator is zero
/// or the quotient does not fit a `Decimal`.
pub(crate) fn ratio_of(numerator: Decimal, denominator: Decimal) -> f64 {
    numerator.checked_div(denominator).map_or(0.0, to_f64)
}

/// `value / base * 100` as a float. `0.0` when `base` is zero or the result
/// does not fit a `Decimal`.
pub(crate) fn pct_of(value: Decimal, base: Decimal) -> f64 {
    value
        .checked_div(base)
        .and_then(|quotient| quotient.checked_mul(HUNDRED))
        .map_or(0.0, to_f64)
}

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Population standard deviation around `avg` (divides by N).
pub fn population_std_dev(values: &[f64], avg: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let variance_sum: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    let variance = variance_sum / values.len() as f64;
    Some(variance.sqrt())
}

/// Root mean square of the negative values, averaged over the negative
/// values only. `None` when nothing is negative.
pub fn downside_deviation(values: &[f64]) -> Option<f64> {
    let negative_returns: Vec<f64> = values.iter().copied().filter(|v| *v < 0.0).collect();

    if negative_returns.is_empty() {
        return None;
    }

    let variance_sum: f64 = negative_returns.iter().map(|v| v.powi(2)).sum();
    let variance = variance_sum / negative_returns.len() as f64;

    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_ratio_of() {
        assert_eq!(ratio_of(dec!(3000), dec!(-2000)), -1.5);
        assert_eq!(ratio_of(dec!(3000), Decimal::ZERO), 0.0);
    }

    #[test]
    fn test_ratio_of_overflow_is_zero() {
        assert_eq!(ratio_of(Decimal::MAX, dec!(0.0001)), 0.0);
    }

    #[test]
    fn test_pct_of() {
        assert_eq!(pct_of(dec!(1000), dec!(100000)), 1.0);
        assert_eq!(pct_of(dec!(1000), Decimal::ZERO), 0.0);
    }

    #[test]
    fn test_pct_of_overflow_is_zero() {
        // quotient fits, the scaling by 100 does not
        let large = Decimal::from_i128_with_scale(10_i128.pow(24), 0);
        assert_eq!(pct_of(large, dec!(0.0001)), 0.0);
        assert_eq!(pct_of(Decimal::MAX, dec!(0.5)), 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10.0, 20.0, 30.0, 40.0]), Some(25.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_population_std_dev() {
        let Some(std) = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 5.0) else {
            panic!("std dev should succeed for non-empty values");
        };
        assert!((std - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_downside_deviation_uses_negative_count() {
        // sqrt((9 + 16) / 2), not divided by the full length
        let Some(dd) = downside_deviation(&[5.0, -3.0, 10.0, -4.0]) else {
            panic!("downside deviation should exist with negative values");
        };
        assert!((dd - 12.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_downside_deviation_without_losses() {
        assert_eq!(downside_deviation(&[1.0, 2.0]), None);
    }
}
