//! Account-level session record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PositionSessionStats, SessionId, TradeRecord};

/// Account snapshot for one trading session.
///
/// `end_cash` of zero means the closing cash was not supplied; see
/// [`SessionStats::effective_end_cash`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    session: SessionId,
    #[serde(default)]
    start_cash: Decimal,
    #[serde(default)]
    end_cash: Decimal,
    #[serde(default)]
    start_positions: Vec<PositionSessionStats>,
    #[serde(default)]
    end_positions: Vec<PositionSessionStats>,
    #[serde(default)]
    trades: Vec<TradeRecord>,
}

impl SessionStats {
    /// Create a session without positions or trades.
    #[must_use]
    pub const fn new(session: SessionId, start_cash: Decimal, end_cash: Decimal) -> Self {
        Self {
            session,
            start_cash,
            end_cash,
            start_positions: Vec::new(),
            end_positions: Vec::new(),
            trades: Vec::new(),
        }
    }

    /// Attach the start-of-session positions.
    #[must_use]
    pub fn with_start_positions(mut self, positions: Vec<PositionSessionStats>) -> Self {
        self.start_positions = positions;
        self
    }

    /// Attach the end-of-session positions.
    #[must_use]
    pub fn with_end_positions(mut self, positions: Vec<PositionSessionStats>) -> Self {
        self.end_positions = positions;
        self
    }

    /// Attach the raw trade records.
    #[must_use]
    pub fn with_trades(mut self, trades: Vec<TradeRecord>) -> Self {
        self.trades = trades;
        self
    }

    /// Session identifier.
    pub const fn session(&self) -> SessionId {
        self.session
    }

    /// Cash at session start.
    pub const fn start_cash(&self) -> Decimal {
        self.start_cash
    }

    /// Cash at session end as supplied (zero when not supplied).
    pub const fn end_cash(&self) -> Decimal {
        self.end_cash
    }

    /// Positions at session start.
    pub fn start_positions(&self) -> &[PositionSessionStats] {
        &self.start_positions
    }

    /// Positions at session end.
    pub fn end_positions(&self) -> &[PositionSessionStats] {
        &self.end_positions
    }

    /// Raw trade records.
    pub fn trades(&self) -> &[TradeRecord] {
        &self.trades
    }

    fn all_positions(&self) -> impl Iterator<Item = &PositionSessionStats> {
        self.start_positions.iter().chain(self.end_positions.iter())
    }

    /// Commission over start and end positions.
    pub fn total_commission(&self) -> Decimal {
        self.all_positions().map(PositionSessionStats::commission).sum()
    }

    /// Net cashflow over start and end positions.
    pub fn total_net_cashflow(&self) -> Decimal {
        self.all_positions()
            .map(PositionSessionStats::net_cashflow)
            .sum()
    }

    /// `start_cash + total_net_cashflow - total_commission`.
    pub fn computed_end_cash(&self) -> Decimal {
        self.start_cash + self.total_net_cashflow() - self.total_commission()
    }

    /// Supplied end cash, or the computed one when it was not supplied.
    pub fn effective_end_cash(&self) -> Decimal {
        if self.end_cash.is_zero() {
            self.computed_end_cash()
        } else {
            self.end_cash
        }
    }

    /// Start cash plus the start value of every non-empty start position.
    pub fn start_market_value(&self) -> Decimal {
        let positions: Decimal = self
            .start_positions
            .iter()
            .filter(|p| p.start_volume() != 0)
            .map(PositionSessionStats::start_value)
            .sum();
        self.start_cash + positions
    }

    /// Effective end cash plus end positions, marked at the quote when one
    /// exists and at end value otherwise.
    pub fn end_market_value(&self) -> Decimal {
        let positions: Decimal = self
            .end_positions
            .iter()
            .map(|p| match p.market_value() {
                Some(value) => value,
                None if p.end_volume() != 0 => p.end_value(),
                None => Decimal::ZERO,
            })
            .sum();
        self.effective_end_cash() + positions
    }

    /// `end_market_value - start_market_value`.
    pub fn profit_loss(&self) -> Decimal {
        self.end_market_value() - self.start_market_value()
    }

    /// Profit or loss relative to start cash. Zero when start cash is zero or
    /// the quotient does not fit a `Decimal`.
    pub fn profit_loss_ratio(&self) -> Decimal {
        self.profit_loss()
            .checked_div(self.start_cash)
            .unwrap_or(Decimal::ZERO)
    }

    /// Change in supplied cash over the session.
    pub fn cash_pnl(&self) -> Decimal {
        self.end_cash - self.start_cash
    }

    /// Realized profit or loss (the total net cashflow).
    pub fn realized_pnl(&self) -> Decimal {
        self.total_net_cashflow()
    }
}
