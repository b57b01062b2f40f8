//! Sharpe, Sortino and Calmar ratios.
//!
//! Returns are per-session P&L figures. The risk-free rate is annual and is
//! converted to a per-session rate with [`PERIODS_PER_YEAR`]. Both the excess
//! return and the deviation are annualized by `sqrt(PERIODS_PER_YEAR)` before
//! dividing; the factors cancel algebraically but the computation is kept in
//! that order so results match existing reports bit for bit.
//!
//! Degenerate inputs yield `0.0`, never an error.

use rust_decimal::Decimal;

use super::constants::PERIODS_PER_YEAR;
use super::math::{downside_deviation, mean, population_std_dev, ratio_of};

fn annualized_ratio(excess_return: f64, deviation: f64) -> f64 {
    let annualization = PERIODS_PER_YEAR.sqrt();
    let annualized_excess = excess_return * annualization;
    annualized_excess / (deviation * annualization)
}

/// Sharpe ratio of a per-session return series.
///
/// Zero for an empty series, `num_periods == 0`, a zero mean or zero
/// variance.
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64, num_periods: usize) -> f64 {
    if num_periods == 0 {
        return 0.0;
    }
    let Some(avg) = mean(returns) else {
        return 0.0;
    };
    if avg == 0.0 {
        return 0.0;
    }
    let Some(std) = population_std_dev(returns, avg) else {
        return 0.0;
    };
    if std == 0.0 {
        return 0.0;
    }

    let period_rf = risk_free_rate / PERIODS_PER_YEAR;
    annualized_ratio(avg - period_rf, std)
}

/// Sortino ratio of a per-session return series.
///
/// Zero for an empty series, `num_periods == 0`, no negative returns or a
/// zero downside deviation.
pub fn sortino_ratio(returns: &[f64], risk_free_rate: f64, num_periods: usize) -> f64 {
    if num_periods == 0 {
        return 0.0;
    }
    let Some(avg) = mean(returns) else {
        return 0.0;
    };
    let period_rf = risk_free_rate / PERIODS_PER_YEAR;
    let excess_return = avg - period_rf;

    let Some(downside_std) = downside_deviation(returns) else {
        return 0.0;
    };
    if downside_std == 0.0 {
        return 0.0;
    }

    annualized_ratio(excess_return, downside_std)
}

/// Calmar ratio `net_profit / max_drawdown`. Zero when there was no drawdown
/// or the quotient overflows.
pub fn calmar_ratio(net_profit: Decimal, max_drawdown: Decimal) -> f64 {
    ratio_of(net_profit, max_drawdown)
}
