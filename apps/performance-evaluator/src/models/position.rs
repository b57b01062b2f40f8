//! Per-instrument session record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SessionId;

/// State change of one instrument over one trading session.
///
/// Immutable once built: fields are private and the `with_*` setters consume
/// the value, so a bound record cannot be altered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSessionStats {
    session: SessionId,
    symbol: String,
    #[serde(default)]
    start_volume: i64,
    #[serde(default)]
    start_value: Decimal,
    #[serde(default)]
    end_volume: i64,
    #[serde(default)]
    end_value: Decimal,
    /// Negative when cash is spent opening/adding, positive when closing/reducing.
    #[serde(default)]
    net_cashflow: Decimal,
    #[serde(default)]
    realized_profit: Decimal,
    /// Only present when a live quote exists.
    #[serde(default)]
    end_market_price: Option<Decimal>,
    #[serde(default)]
    last_buy_price: Option<Decimal>,
    #[serde(default)]
    commission: Decimal,
    #[serde(default)]
    trade_count: u32,
}

impl PositionSessionStats {
    /// Create an empty record for `symbol` in `session`.
    #[must_use]
    pub fn new(session: SessionId, symbol: impl Into<String>) -> Self {
        Self {
            session,
            symbol: symbol.into(),
            start_volume: 0,
            start_value: Decimal::ZERO,
            end_volume: 0,
            end_value: Decimal::ZERO,
            net_cashflow: Decimal::ZERO,
            realized_profit: Decimal::ZERO,
            end_market_price: None,
            last_buy_price: None,
            commission: Decimal::ZERO,
            trade_count: 0,
        }
    }

    /// Set the start-of-session volume and value.
    #[must_use]
    pub const fn with_start(mut self, volume: i64, value: Decimal) -> Self {
        self.start_volume = volume;
        self.start_value = value;
        self
    }

    /// Set the end-of-session volume and value.
    #[must_use]
    pub const fn with_end(mut self, volume: i64, value: Decimal) -> Self {
        self.end_volume = volume;
        self.end_value = value;
        self
    }

    /// Set the net cashflow.
    #[must_use]
    pub const fn with_net_cashflow(mut self, cashflow: Decimal) -> Self {
        self.net_cashflow = cashflow;
        self
    }

    /// Set the realized profit.
    #[must_use]
    pub const fn with_realized_profit(mut self, profit: Decimal) -> Self {
        self.realized_profit = profit;
        self
    }

    /// Set the closing market quote.
    #[must_use]
    pub const fn with_end_market_price(mut self, price: Decimal) -> Self {
        self.end_market_price = Some(price);
        self
    }

    /// Set the last buy price.
    #[must_use]
    pub const fn with_last_buy_price(mut self, price: Decimal) -> Self {
        self.last_buy_price = Some(price);
        self
    }

    /// Set the commission paid in the session.
    #[must_use]
    pub const fn with_commission(mut self, commission: Decimal) -> Self {
        self.commission = commission;
        self
    }

    /// Set the number of orders placed in the session.
    #[must_use]
    pub const fn with_trade_count(mut self, count: u32) -> Self {
        self.trade_count = count;
        self
    }

    /// Session identifier.
    pub const fn session(&self) -> SessionId {
        self.session
    }

    /// Instrument symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Volume held at session start.
    pub const fn start_volume(&self) -> i64 {
        self.start_volume
    }

    /// Value held at session start.
    pub const fn start_value(&self) -> Decimal {
        self.start_value
    }

    /// Volume held at session end.
    pub const fn end_volume(&self) -> i64 {
        self.end_volume
    }

    /// Value held at session end.
    pub const fn end_value(&self) -> Decimal {
        self.end_value
    }

    /// Net cashflow of the session.
    pub const fn net_cashflow(&self) -> Decimal {
        self.net_cashflow
    }

    /// Realized profit of the session.
    pub const fn realized_profit(&self) -> Decimal {
        self.realized_profit
    }

    /// Closing market quote, if one was available.
    pub const fn end_market_price(&self) -> Option<Decimal> {
        self.end_market_price
    }

    /// Last buy price, if known.
    pub const fn last_buy_price(&self) -> Option<Decimal> {
        self.last_buy_price
    }

    /// Commission paid in the session.
    pub const fn commission(&self) -> Decimal {
        self.commission
    }

    /// Number of orders placed in the session.
    pub const fn trade_count(&self) -> u32 {
        self.trade_count
    }

    /// Profit or loss of the session (the realized profit).
    pub const fn profit_loss(&self) -> Decimal {
        self.realized_profit
    }

    /// Profit or loss relative to the start value. Zero when nothing was held
    /// or the quotient does not fit a `Decimal`.
    pub fn profit_loss_ratio(&self) -> Decimal {
        self.profit_loss()
            .checked_div(self.start_value)
            .unwrap_or(Decimal::ZERO)
    }

    /// End volume marked at the closing quote. `None` without a quote.
    pub fn market_value(&self) -> Option<Decimal> {
        self.end_market_price
            .map(|price| Decimal::from(self.end_volume) * price)
    }

    /// Average holding price `(start_value + net_cashflow) / start_volume`.
    /// `None` without a start volume or when the result does not fit a
    /// `Decimal`.
    pub fn average_price(&self) -> Option<Decimal> {
        if self.start_volume == 0 {
            return None;
        }
        self.start_value
            .checked_add(self.net_cashflow)?
            .checked_div(Decimal::from(self.start_volume))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_profit_loss_is_realized_profit() {
        let pos = PositionSessionStats::new(20_251_115, "600000").with_realized_profit(dec!(250.5));
        assert_eq!(pos.profit_loss(), dec!(250.5));
    }

    #[test]
    fn test_profit_loss_ratio() {
        let pos = PositionSessionStats::new(20_251_115, "600000")
            .with_start(1000, dec!(10000))
            .with_realized_profit(dec!(500));
        assert_eq!(pos.profit_loss_ratio(), dec!(0.05));

        let flat = PositionSessionStats::new(20_251_115, "600000").with_realized_profit(dec!(500));
        assert_eq!(flat.profit_loss_ratio(), Decimal::ZERO);
    }

    #[test]
    fn test_profit_loss_ratio_overflow_is_zero() {
        let pos = PositionSessionStats::new(20_251_115, "600000")
            .with_start(1, Decimal::new(1, 20))
            .with_realized_profit(dec!(1000000000));
        assert_eq!(pos.profit_loss_ratio(), Decimal::ZERO);
    }

    #[test]
    fn test_average_price_overflow_is_none() {
        let pos = PositionSessionStats::new(20_251_115, "600000")
            .with_start(1, Decimal::MAX)
            .with_net_cashflow(Decimal::MAX);
        assert_eq!(pos.average_price(), None);
    }

    #[test]
    fn test_market_value_requires_quote() {
        let pos = PositionSessionStats::new(20_251_115, "600000").with_end(500, dec!(5500));
        assert_eq!(pos.market_value(), None);

        let quoted = pos.with_end_market_price(dec!(11.2));
        assert_eq!(quoted.market_value(), Some(dec!(5600)));
    }

    #[test]
    fn test_average_price() {
        let pos = PositionSessionStats::new(20_251_115, "600000")
            .with_start(1000, dec!(10000))
            .with_net_cashflow(dec!(-2000));
        assert_eq!(pos.average_price(), Some(dec!(8)));

        let empty = PositionSessionStats::new(20_251_115, "600000");
        assert_eq!(empty.average_price(), None);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"session": 20251115, "symbol": "600000", "commission": "5.25"}"#;
        let pos: PositionSessionStats = serde_json::from_str(json).unwrap();
        assert_eq!(pos.commission(), dec!(5.25));
        assert_eq!(pos.start_volume(), 0);
        assert_eq!(pos.end_market_price(), None);
        assert_eq!(pos.trade_count(), 0);
    }
}
