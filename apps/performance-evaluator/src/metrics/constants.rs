//! Constants for performance metric calculations.

use rust_decimal::Decimal;

pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Sessions per year used to de-annualize the risk-free rate.
pub const PERIODS_PER_YEAR: f64 = 250.0;

/// Annual risk-free rate used when none is configured.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.03;

/// Cohort sizes (percent of trades) for contribution analysis.
pub const CONTRIBUTION_PERCENTILES: [f64; 4] = [1.0, 5.0, 10.0, 20.0];
