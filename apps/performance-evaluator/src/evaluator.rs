//! Evaluator facade holding the risk-free rate.

use std::collections::BTreeMap;

use crate::comparison;
use crate::config::EvaluatorConfig;
use crate::metrics::{
    DEFAULT_RISK_FREE_RATE, compute_account_performance, compute_position_performance,
};
use crate::models::{
    Performance, PerformanceComparison, PositionHistory, SessionStats, position_history, symbols,
};

/// Computes and compares performance with a fixed annual risk-free rate.
///
/// Stateless apart from the rate, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceEvaluator {
    risk_free_rate: f64,
}

impl Default for PerformanceEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_RISK_FREE_RATE)
    }
}

impl PerformanceEvaluator {
    /// Create an evaluator with an annual risk-free rate.
    #[must_use]
    pub const fn new(risk_free_rate: f64) -> Self {
        Self { risk_free_rate }
    }

    /// Create an evaluator from loaded configuration.
    #[must_use]
    pub const fn from_config(config: &EvaluatorConfig) -> Self {
        Self::new(config.risk_free_rate)
    }

    /// Annual risk-free rate.
    pub const fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Account-level performance of an ordered session sequence.
    pub fn evaluate(&self, sessions: &[SessionStats]) -> Performance {
        compute_account_performance(sessions, self.risk_free_rate)
    }

    /// Performance of one symbol from its session history.
    pub fn evaluate_position(&self, history: &PositionHistory, symbol: &str) -> Performance {
        compute_position_performance(history, symbol, self.risk_free_rate)
    }

    /// Performance of one symbol taken from an account session list.
    pub fn evaluate_symbol(&self, sessions: &[SessionStats], symbol: &str) -> Performance {
        self.evaluate_position(&position_history(sessions, symbol), symbol)
    }

    /// Performance of every symbol held at the end of any session.
    pub fn evaluate_all_symbols(&self, sessions: &[SessionStats]) -> BTreeMap<String, Performance> {
        symbols(sessions)
            .into_iter()
            .map(|symbol| {
                let performance = self.evaluate_symbol(sessions, &symbol);
                (symbol, performance)
            })
            .collect()
    }

    /// Compare two session sets, e.g. live trading against a replay.
    pub fn compare(
        &self,
        sessions_a: &[SessionStats],
        sessions_b: &[SessionStats],
    ) -> PerformanceComparison {
        comparison::compare(sessions_a, sessions_b, self.risk_free_rate)
    }
}
