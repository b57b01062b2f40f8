//! Performance metrics calculation.
//!
//! - Ratio engine: Sharpe, Sortino and Calmar ratios
//! - Contribution analysis: share of gains/losses from the most extreme trades
//! - Drawdown tracking: peak-to-current decline and its duration
//! - Calculator: account-level and position-level aggregation

mod calculator;
mod constants;
mod contribution;
mod drawdown;
mod math;
mod ratio;

pub use calculator::{compute_account_performance, compute_position_performance};
pub use constants::{CONTRIBUTION_PERCENTILES, DEFAULT_RISK_FREE_RATE, PERIODS_PER_YEAR};
pub use contribution::{Cohort, top_contributions};
pub use drawdown::DrawdownTracker;
pub(crate) use math::{pct_of, ratio_of};
pub use ratio::{calmar_ratio, sharpe_ratio, sortino_ratio};
