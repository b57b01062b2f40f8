//! Performance calculation over session sequences.
//!
//! Two entry points share one pattern: walk the sessions in order, classify
//! each session's P&L as a win or a loss, track drawdown, and collect the
//! per-session return series for the ratio engine.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Performance, PositionHistory, SessionStats};

use super::contribution::{Cohort, top_contributions};
use super::drawdown::DrawdownTracker;
use super::math::{pct_of, ratio_of, to_f64};
use super::ratio::{calmar_ratio, sharpe_ratio, sortino_ratio};

/// Win/loss classification of session P&L figures.
#[derive(Debug, Default)]
struct TradeTally {
    winning_trades: u64,
    losing_trades: u64,
    total_win: Decimal,
    total_loss: Decimal,
    max_single_win: Decimal,
    max_single_loss: Decimal,
    wins: Vec<f64>,
    losses: Vec<f64>,
    returns: Vec<f64>,
}

impl TradeTally {
    fn record(&mut self, pnl: Decimal) {
        let value = to_f64(pnl);
        self.returns.push(value);

        if pnl > Decimal::ZERO {
            self.winning_trades += 1;
            self.total_win += pnl;
            self.wins.push(value);
            if pnl > self.max_single_win {
                self.max_single_win = pnl;
            }
        } else if pnl < Decimal::ZERO {
            self.losing_trades += 1;
            self.total_loss += pnl;
            self.losses.push(value);
            if pnl < self.max_single_loss {
                self.max_single_loss = pnl;
            }
        }
    }

    const fn total_trades(&self) -> u64 {
        self.winning_trades + self.losing_trades
    }

    fn avg_win(&self) -> Decimal {
        if self.winning_trades == 0 {
            return Decimal::ZERO;
        }
        self.total_win / Decimal::from(self.winning_trades)
    }

    fn avg_loss(&self) -> Decimal {
        if self.losing_trades == 0 {
            return Decimal::ZERO;
        }
        self.total_loss / Decimal::from(self.losing_trades)
    }
}

/// Values shared by both entry points once the session walk is done.
struct Totals {
    initial_cash: Decimal,
    final_value: Decimal,
    total_commission: Decimal,
    num_periods: usize,
}

fn summarize(
    tally: &TradeTally,
    drawdown: &DrawdownTracker,
    totals: &Totals,
    risk_free_rate: f64,
) -> Performance {
    let initial_cash = totals.initial_cash;
    let total_trades = tally.total_trades();

    let win_rate = if total_trades > 0 {
        tally.winning_trades as f64 / total_trades as f64 * 100.0
    } else {
        0.0
    };

    let net_profit = totals.final_value - initial_cash;
    let avg_win = tally.avg_win();
    let avg_loss = tally.avg_loss();

    let odds_ratio = ratio_of(avg_win, avg_loss);

    let total_loss_abs = tally.total_loss.abs();
    let commission_loss_pct = if total_loss_abs > Decimal::ZERO {
        pct_of(totals.total_commission, total_loss_abs)
    } else {
        0.0
    };

    let max_drawdown = drawdown.max_drawdown();

    Performance {
        symbol: None,
        total_trades,
        open_positions: 0,
        winning_trades: tally.winning_trades,
        losing_trades: tally.losing_trades,
        win_rate,
        net_profit,
        net_profit_pct: pct_of(net_profit, initial_cash),
        max_drawdown,
        max_drawdown_duration_bars: drawdown.max_duration_bars(),
        final_value: totals.final_value,
        initial_cash,
        total_commission: totals.total_commission,
        max_single_win: tally.max_single_win,
        max_single_loss: tally.max_single_loss,
        max_single_win_pct: pct_of(tally.max_single_win, initial_cash),
        max_single_loss_pct: pct_of(tally.max_single_loss, initial_cash),
        avg_win,
        avg_loss,
        avg_win_pct: pct_of(avg_win, initial_cash),
        avg_loss_pct: pct_of(avg_loss, initial_cash),
        odds_ratio,
        total_win: tally.total_win,
        total_loss: tally.total_loss,
        commission_loss_pct,
        sharpe_ratio: sharpe_ratio(&tally.returns, risk_free_rate, totals.num_periods),
        sortino_ratio: sortino_ratio(&tally.returns, risk_free_rate, totals.num_periods),
        calmar_ratio: calmar_ratio(net_profit, max_drawdown),
        ..Performance::default()
    }
}

/// Account-level performance over an ordered session sequence.
///
/// The first session's P&L is restated against the first positive start
/// cash in the sequence (the base amount), which corrects sessions whose
/// opening cash was recorded as zero. Later sessions use their P&L as is.
pub fn compute_account_performance(sessions: &[SessionStats], risk_free_rate: f64) -> Performance {
    let (Some(first), Some(last)) = (sessions.first(), sessions.last()) else {
        return Performance::empty();
    };

    let base_amount = sessions
        .iter()
        .map(SessionStats::start_cash)
        .find(|cash| *cash > Decimal::ZERO)
        .unwrap_or(Decimal::ZERO);

    let totals = Totals {
        initial_cash: first.end_cash(),
        final_value: last.end_market_value(),
        total_commission: sessions.iter().map(SessionStats::total_commission).sum(),
        num_periods: sessions.len(),
    };

    let mut drawdown = DrawdownTracker::new(totals.initial_cash);
    let mut tally = TradeTally::default();

    for (idx, session) in sessions.iter().enumerate() {
        drawdown.observe(session.end_market_value());

        let mut pnl = session.profit_loss();
        if idx == 0 {
            pnl = pnl - base_amount + session.start_cash();
        }
        tally.record(pnl);
    }

    let mut performance = summarize(&tally, &drawdown, &totals, risk_free_rate);
    performance.open_positions = last.end_positions().len() as u64;

    let total_win_amount = if tally.total_win > Decimal::ZERO {
        to_f64(tally.total_win)
    } else {
        0.0
    };
    let total_loss_amount = if tally.total_loss < Decimal::ZERO {
        to_f64(tally.total_loss.abs())
    } else {
        0.0
    };
    performance.set_win_contributions(top_contributions(
        &tally.wins,
        total_win_amount,
        Cohort::Wins,
    ));
    performance.set_loss_contributions(top_contributions(
        &tally.losses,
        total_loss_amount,
        Cohort::Losses,
    ));

    debug!(
        sessions = sessions.len(),
        base_amount = %base_amount,
        total_trades = performance.total_trades,
        net_profit = %performance.net_profit,
        "Computed account performance"
    );

    performance
}

/// Performance of one symbol over its session history.
///
/// Sessions are processed in ascending id order; sessions without an end
/// position are skipped. Only the first end position of each session is
/// used. Returns the empty snapshot for `symbol` when no session produced a
/// win or a loss.
pub fn compute_position_performance(
    history: &PositionHistory,
    symbol: &str,
    risk_free_rate: f64,
) -> Performance {
    if history.is_empty() {
        return Performance::empty_for(symbol);
    }

    let mut entries: Vec<_> = history.iter().collect();
    entries.sort_unstable_by_key(|(session, _)| **session);

    let mut initial_cash = Decimal::ZERO;
    let mut final_value = Decimal::ZERO;
    let mut total_commission = Decimal::ZERO;
    let mut drawdown = DrawdownTracker::new(Decimal::ZERO);
    let mut tally = TradeTally::default();

    for (_, positions) in &entries {
        let Some(position) = positions.end_positions.first() else {
            continue;
        };

        tally.record(position.profit_loss());
        drawdown.observe(position.end_value());

        if initial_cash.is_zero() {
            initial_cash = position.start_value();
        }
        final_value = position.end_value();
        total_commission += position.commission();
    }

    if tally.total_trades() == 0 {
        debug!(symbol, sessions = entries.len(), "No closed trades for symbol");
        return Performance::empty_for(symbol);
    }

    let totals = Totals {
        initial_cash,
        final_value,
        total_commission,
        num_periods: entries.len(),
    };

    let performance = Performance {
        symbol: Some(symbol.to_string()),
        ..summarize(&tally, &drawdown, &totals, risk_free_rate)
    };

    debug!(
        symbol,
        sessions = entries.len(),
        total_trades = performance.total_trades,
        net_profit = %performance.net_profit,
        "Computed position performance"
    );

    performance
}
