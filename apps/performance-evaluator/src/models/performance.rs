//! Performance snapshot produced by the calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Performance summary over a session sequence or one position's history.
///
/// Every field defaults to zero so an empty snapshot is always well formed.
/// Percentages are expressed in percent (e.g. `12.5` = 12.5%).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Performance {
    /// Symbol for position-level snapshots, `None` at account level.
    pub symbol: Option<String>,

    // Trade statistics
    /// Winning plus losing sessions.
    pub total_trades: u64,
    /// Positions held at the end of the last session.
    pub open_positions: u64,
    /// Sessions with positive P&L.
    pub winning_trades: u64,
    /// Sessions with negative P&L.
    pub losing_trades: u64,
    /// Win rate percentage.
    pub win_rate: f64,

    // Returns
    /// `final_value - initial_cash`.
    pub net_profit: Decimal,
    /// Net profit as a percentage of initial cash.
    pub net_profit_pct: f64,
    /// Largest peak-to-current decline (non-negative).
    pub max_drawdown: Decimal,
    /// Longest run of bars spent below the running peak.
    pub max_drawdown_duration_bars: u64,
    /// Closing value of the sequence.
    pub final_value: Decimal,
    /// Opening capital of the sequence.
    pub initial_cash: Decimal,
    /// Total commission paid.
    pub total_commission: Decimal,

    // Single trade
    /// Largest single win.
    pub max_single_win: Decimal,
    /// Largest single loss (most negative).
    pub max_single_loss: Decimal,
    /// Largest single win as a percentage of initial cash.
    pub max_single_win_pct: f64,
    /// Largest single loss as a percentage of initial cash.
    pub max_single_loss_pct: f64,
    /// Average win.
    pub avg_win: Decimal,
    /// Average loss (negative).
    pub avg_loss: Decimal,
    /// Average win as a percentage of initial cash.
    pub avg_win_pct: f64,
    /// Average loss as a percentage of initial cash.
    pub avg_loss_pct: f64,
    /// `avg_win / avg_loss`.
    pub odds_ratio: f64,
    /// Sum of wins.
    pub total_win: Decimal,
    /// Sum of losses (negative).
    pub total_loss: Decimal,
    /// Commission as a percentage of the absolute total loss.
    pub commission_loss_pct: f64,

    // Concentration
    /// Share of total win from the top 1% of wins.
    pub top_1pct_win_pct: f64,
    /// Share of total win from the top 5% of wins.
    pub top_5pct_win_pct: f64,
    /// Share of total win from the top 10% of wins.
    pub top_10pct_win_pct: f64,
    /// Share of total win from the top 20% of wins.
    pub top_20pct_win_pct: f64,
    /// Share of total loss from the worst 1% of losses.
    pub top_1pct_loss_pct: f64,
    /// Share of total loss from the worst 5% of losses.
    pub top_5pct_loss_pct: f64,
    /// Share of total loss from the worst 10% of losses.
    pub top_10pct_loss_pct: f64,
    /// Share of total loss from the worst 20% of losses.
    pub top_20pct_loss_pct: f64,

    // Risk-adjusted
    /// Sharpe ratio.
    pub sharpe_ratio: f64,
    /// Sortino ratio.
    pub sortino_ratio: f64,
    /// Calmar ratio.
    pub calmar_ratio: f64,
}

impl Performance {
    /// All-zero account snapshot.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// All-zero snapshot tagged with a symbol.
    #[must_use]
    pub fn empty_for(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }

    /// Top 1/5/10/20% win contributions.
    pub const fn top_win_contributions(&self) -> [f64; 4] {
        [
            self.top_1pct_win_pct,
            self.top_5pct_win_pct,
            self.top_10pct_win_pct,
            self.top_20pct_win_pct,
        ]
    }

    /// Top 1/5/10/20% loss contributions.
    pub const fn top_loss_contributions(&self) -> [f64; 4] {
        [
            self.top_1pct_loss_pct,
            self.top_5pct_loss_pct,
            self.top_10pct_loss_pct,
            self.top_20pct_loss_pct,
        ]
    }

    pub(crate) fn set_win_contributions(&mut self, values: [f64; 4]) {
        let [top_1, top_5, top_10, top_20] = values;
        self.top_1pct_win_pct = top_1;
        self.top_5pct_win_pct = top_5;
        self.top_10pct_win_pct = top_10;
        self.top_20pct_win_pct = top_20;
    }

    pub(crate) fn set_loss_contributions(&mut self, values: [f64; 4]) {
        let [top_1, top_5, top_10, top_20] = values;
        self.top_1pct_loss_pct = top_1;
        self.top_5pct_loss_pct = top_5;
        self.top_10pct_loss_pct = top_10;
        self.top_20pct_loss_pct = top_20;
    }

    /// Export the snapshot as pretty JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_empty_is_all_zero() {
        let perf = Performance::empty();
        assert_eq!(perf.symbol, None);
        assert_eq!(perf.total_trades, 0);
        assert_eq!(perf.net_profit, Decimal::ZERO);
        assert_eq!(perf.sharpe_ratio, 0.0);
        assert_eq!(perf.max_drawdown_duration_bars, 0);
        assert_eq!(perf.top_win_contributions(), [0.0; 4]);
        assert_eq!(perf.top_loss_contributions(), [0.0; 4]);
    }

    #[test]
    fn test_empty_for_symbol() {
        let perf = Performance::empty_for("600000");
        assert_eq!(perf.symbol.as_deref(), Some("600000"));
        assert_eq!(perf.final_value, Decimal::ZERO);
    }

    #[test]
    fn test_contribution_setters() {
        let mut perf = Performance::empty();
        perf.set_win_contributions([40.0, 50.0, 60.0, 80.0]);
        perf.set_loss_contributions([30.0, 35.0, 45.0, 70.0]);
        assert_eq!(perf.top_10pct_win_pct, 60.0);
        assert_eq!(perf.top_20pct_loss_pct, 70.0);
    }

    #[test]
    fn test_json_keeps_decimal_precision() {
        let perf = Performance {
            net_profit: dec!(999999999999.99),
            ..Performance::default()
        };
        let json = perf.to_json();
        assert!(json.contains("999999999999.99"));

        let parsed: Performance = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.net_profit, dec!(999999999999.99));
    }

    #[test]
    fn test_deserialize_partial_snapshot() {
        let perf: Performance =
            serde_json::from_str(r#"{"total_trades": 4, "net_profit": "10000"}"#).unwrap();
        assert_eq!(perf.total_trades, 4);
        assert_eq!(perf.net_profit, dec!(10000));
        assert_eq!(perf.calmar_ratio, 0.0);
    }
}
