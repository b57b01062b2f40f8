//! Drift comparison between two session sets.
//!
//! Typical use is live trading against a backtest replay of the same days.
//! Each side's aggregate performance is computed independently over its full
//! session list; per-session alignment only covers sessions present on both
//! sides. Differing membership is logged as a warning, never an error.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::metrics::{compute_account_performance, pct_of, ratio_of};
use crate::models::{
    PerformanceComparison, PerformanceDelta, SessionComparison, SessionId, SessionStats,
};

/// Session P&L as a percentage of start cash, zero when start cash is zero.
fn session_pnl_pct(session: &SessionStats, pnl: Decimal) -> f64 {
    pct_of(pnl, session.start_cash())
}

fn compare_session(session: SessionId, first: &SessionStats, second: &SessionStats) -> SessionComparison {
    let first_pnl = first.profit_loss();
    let second_pnl = second.profit_loss();
    let pnl_delta = second_pnl - first_pnl;

    let first_pnl_pct = session_pnl_pct(first, first_pnl);
    let second_pnl_pct = session_pnl_pct(second, second_pnl);

    let first_trade_count = first.end_positions().len() as u64;
    let second_trade_count = second.end_positions().len() as u64;

    let drift_ratio = ratio_of(pnl_delta, first_pnl.abs());

    SessionComparison {
        session,
        first_pnl,
        first_pnl_pct,
        first_trade_count,
        first_end_cash: first.end_cash(),
        second_pnl,
        second_pnl_pct,
        second_trade_count,
        second_end_cash: second.end_cash(),
        pnl_delta,
        pnl_pct_delta: second_pnl_pct - first_pnl_pct,
        trade_count_delta: second_trade_count as i64 - first_trade_count as i64,
        drift_ratio,
    }
}

/// Per-session comparison for every session id present on both sides,
/// ascending. A repeated id keeps the later record.
pub fn compare_common_sessions(first: &[SessionStats], second: &[SessionStats]) -> Vec<SessionComparison> {
    let first_by_session: BTreeMap<SessionId, &SessionStats> =
        first.iter().map(|s| (s.session(), s)).collect();
    let second_by_session: BTreeMap<SessionId, &SessionStats> =
        second.iter().map(|s| (s.session(), s)).collect();

    first_by_session
        .iter()
        .filter_map(|(session, a)| {
            second_by_session
                .get(session)
                .map(|b| compare_session(*session, a, b))
        })
        .collect()
}

/// Compare two session sets.
///
/// A differing session membership emits one `warn!` event per side, listing
/// that side's extra session ids. `performance_ratio` and `drift_percentage`
/// are zero when the first side's net profit is zero or the quotient does not
/// fit a `Decimal`.
pub fn compare(
    sessions_a: &[SessionStats],
    sessions_b: &[SessionStats],
    risk_free_rate: f64,
) -> PerformanceComparison {
    let ids_a: BTreeSet<SessionId> = sessions_a.iter().map(SessionStats::session).collect();
    let ids_b: BTreeSet<SessionId> = sessions_b.iter().map(SessionStats::session).collect();

    let only_in_first: Vec<SessionId> = ids_a.difference(&ids_b).copied().collect();
    let only_in_second: Vec<SessionId> = ids_b.difference(&ids_a).copied().collect();

    if !only_in_first.is_empty() {
        warn!(
            sessions = ?only_in_first,
            "Sessions only in first set; comparison will only use common sessions"
        );
    }
    if !only_in_second.is_empty() {
        warn!(
            sessions = ?only_in_second,
            "Sessions only in second set; comparison will only use common sessions"
        );
    }

    let first = compute_account_performance(sessions_a, risk_free_rate);
    let second = compute_account_performance(sessions_b, risk_free_rate);
    let delta = PerformanceDelta::between(&first, &second);

    let (performance_ratio, drift_percentage) = if first.net_profit.is_zero() {
        (0.0, 0.0)
    } else {
        (
            ratio_of(second.net_profit, first.net_profit),
            (ratio_of(delta.net_profit, first.net_profit) * 100.0).abs(),
        )
    };

    let sessions = compare_common_sessions(sessions_a, sessions_b);

    let total_sessions = ids_a.union(&ids_b).count() as u64;
    let matched_sessions = ids_a.intersection(&ids_b).count() as u64;
    let session_match_rate = if total_sessions == 0 {
        0.0
    } else {
        matched_sessions as f64 / total_sessions as f64
    };

    debug!(
        total_sessions,
        matched_sessions,
        performance_ratio,
        drift_percentage,
        "Compared session sets"
    );

    PerformanceComparison {
        first,
        second,
        delta,
        performance_ratio,
        drift_percentage,
        sessions,
        only_in_first,
        only_in_second,
        total_sessions,
        matched_sessions,
        session_match_rate,
    }
}
