//! Comparison results between two session sets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Performance, SessionId};

/// `second - first` for every scalar metric of [`Performance`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceDelta {
    /// Total trades delta.
    pub total_trades: i64,
    /// Open positions delta.
    pub open_positions: i64,
    /// Winning trades delta.
    pub winning_trades: i64,
    /// Losing trades delta.
    pub losing_trades: i64,
    /// Win rate delta (percentage points).
    pub win_rate: f64,
    /// Net profit delta.
    pub net_profit: Decimal,
    /// Net profit percentage delta.
    pub net_profit_pct: f64,
    /// Max drawdown delta.
    pub max_drawdown: Decimal,
    /// Max drawdown duration delta.
    pub max_drawdown_duration_bars: i64,
    /// Final value delta.
    pub final_value: Decimal,
    /// Initial cash delta.
    pub initial_cash: Decimal,
    /// Commission delta.
    pub total_commission: Decimal,
    /// Max single win delta.
    pub max_single_win: Decimal,
    /// Max single loss delta.
    pub max_single_loss: Decimal,
    /// Max single win percentage delta.
    pub max_single_win_pct: f64,
    /// Max single loss percentage delta.
    pub max_single_loss_pct: f64,
    /// Average win delta.
    pub avg_win: Decimal,
    /// Average loss delta.
    pub avg_loss: Decimal,
    /// Average win percentage delta.
    pub avg_win_pct: f64,
    /// Average loss percentage delta.
    pub avg_loss_pct: f64,
    /// Odds ratio delta.
    pub odds_ratio: f64,
    /// Total win delta.
    pub total_win: Decimal,
    /// Total loss delta.
    pub total_loss: Decimal,
    /// Commission/loss percentage delta.
    pub commission_loss_pct: f64,
    /// Top 1% win contribution delta.
    pub top_1pct_win_pct: f64,
    /// Top 5% win contribution delta.
    pub top_5pct_win_pct: f64,
    /// Top 10% win contribution delta.
    pub top_10pct_win_pct: f64,
    /// Top 20% win contribution delta.
    pub top_20pct_win_pct: f64,
    /// Top 1% loss contribution delta.
    pub top_1pct_loss_pct: f64,
    /// Top 5% loss contribution delta.
    pub top_5pct_loss_pct: f64,
    /// Top 10% loss contribution delta.
    pub top_10pct_loss_pct: f64,
    /// Top 20% loss contribution delta.
    pub top_20pct_loss_pct: f64,
    /// Sharpe ratio delta.
    pub sharpe_ratio: f64,
    /// Sortino ratio delta.
    pub sortino_ratio: f64,
    /// Calmar ratio delta.
    pub calmar_ratio: f64,
}

const fn count_delta(first: u64, second: u64) -> i64 {
    second as i64 - first as i64
}

impl PerformanceDelta {
    /// Field-wise `second - first`.
    #[must_use]
    pub fn between(first: &Performance, second: &Performance) -> Self {
        Self {
            total_trades: count_delta(first.total_trades, second.total_trades),
            open_positions: count_delta(first.open_positions, second.open_positions),
            winning_trades: count_delta(first.winning_trades, second.winning_trades),
            losing_trades: count_delta(first.losing_trades, second.losing_trades),
            win_rate: second.win_rate - first.win_rate,
            net_profit: second.net_profit - first.net_profit,
            net_profit_pct: second.net_profit_pct - first.net_profit_pct,
            max_drawdown: second.max_drawdown - first.max_drawdown,
            max_drawdown_duration_bars: count_delta(
                first.max_drawdown_duration_bars,
                second.max_drawdown_duration_bars,
            ),
            final_value: second.final_value - first.final_value,
            initial_cash: second.initial_cash - first.initial_cash,
            total_commission: second.total_commission - first.total_commission,
            max_single_win: second.max_single_win - first.max_single_win,
            max_single_loss: second.max_single_loss - first.max_single_loss,
            max_single_win_pct: second.max_single_win_pct - first.max_single_win_pct,
            max_single_loss_pct: second.max_single_loss_pct - first.max_single_loss_pct,
            avg_win: second.avg_win - first.avg_win,
            avg_loss: second.avg_loss - first.avg_loss,
            avg_win_pct: second.avg_win_pct - first.avg_win_pct,
            avg_loss_pct: second.avg_loss_pct - first.avg_loss_pct,
            odds_ratio: second.odds_ratio - first.odds_ratio,
            total_win: second.total_win - first.total_win,
            total_loss: second.total_loss - first.total_loss,
            commission_loss_pct: second.commission_loss_pct - first.commission_loss_pct,
            top_1pct_win_pct: second.top_1pct_win_pct - first.top_1pct_win_pct,
            top_5pct_win_pct: second.top_5pct_win_pct - first.top_5pct_win_pct,
            top_10pct_win_pct: second.top_10pct_win_pct - first.top_10pct_win_pct,
            top_20pct_win_pct: second.top_20pct_win_pct - first.top_20pct_win_pct,
            top_1pct_loss_pct: second.top_1pct_loss_pct - first.top_1pct_loss_pct,
            top_5pct_loss_pct: second.top_5pct_loss_pct - first.top_5pct_loss_pct,
            top_10pct_loss_pct: second.top_10pct_loss_pct - first.top_10pct_loss_pct,
            top_20pct_loss_pct: second.top_20pct_loss_pct - first.top_20pct_loss_pct,
            sharpe_ratio: second.sharpe_ratio - first.sharpe_ratio,
            sortino_ratio: second.sortino_ratio - first.sortino_ratio,
            calmar_ratio: second.calmar_ratio - first.calmar_ratio,
        }
    }
}

/// One session present in both compared sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionComparison {
    /// Session identifier.
    pub session: SessionId,

    /// First side's session P&L.
    pub first_pnl: Decimal,
    /// First side's P&L as a percentage of its start cash.
    pub first_pnl_pct: f64,
    /// First side's end position count.
    pub first_trade_count: u64,
    /// First side's supplied end cash.
    pub first_end_cash: Decimal,

    /// Second side's session P&L.
    pub second_pnl: Decimal,
    /// Second side's P&L as a percentage of its start cash.
    pub second_pnl_pct: f64,
    /// Second side's end position count.
    pub second_trade_count: u64,
    /// Second side's supplied end cash.
    pub second_end_cash: Decimal,

    /// `second_pnl - first_pnl`.
    pub pnl_delta: Decimal,
    /// `second_pnl_pct - first_pnl_pct`.
    pub pnl_pct_delta: f64,
    /// `second_trade_count - first_trade_count`.
    pub trade_count_delta: i64,
    /// `pnl_delta / |first_pnl|`, zero when `first_pnl` is zero.
    pub drift_ratio: f64,
}

/// Aggregate and per-session comparison of two session sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceComparison {
    /// Performance of the first set.
    pub first: Performance,
    /// Performance of the second set.
    pub second: Performance,
    /// `second - first` for every metric.
    pub delta: PerformanceDelta,
    /// `second.net_profit / first.net_profit`, zero without a baseline.
    pub performance_ratio: f64,
    /// `|net_profit delta / first.net_profit| * 100`, zero without a baseline.
    pub drift_percentage: f64,
    /// Sessions present in both sets, ascending.
    pub sessions: Vec<SessionComparison>,
    /// Sessions only in the first set, ascending.
    pub only_in_first: Vec<SessionId>,
    /// Sessions only in the second set, ascending.
    pub only_in_second: Vec<SessionId>,
    /// Size of the union of both session sets.
    pub total_sessions: u64,
    /// Size of the intersection of both session sets.
    pub matched_sessions: u64,
    /// `matched_sessions / total_sessions`, zero when there are none.
    pub session_match_rate: f64,
}

impl PerformanceComparison {
    /// Whether the two sets had different session membership.
    pub fn has_session_mismatch(&self) -> bool {
        !self.only_in_first.is_empty() || !self.only_in_second.is_empty()
    }

    /// Export the comparison as pretty JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
