//! Integration tests for the performance evaluator.
//!
//! Scenarios run through the public facade: account sessions, restated
//! opening sessions, symbol histories, JSON input and live/replay drift.

use performance_evaluator::{
    Performance, PerformanceEvaluator, PositionSessionStats, SessionStats,
    compute_account_performance,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn session(id: u32, start: Decimal, end: Decimal) -> SessionStats {
    SessionStats::new(id, start, end)
}

#[test]
fn test_two_profitable_sessions() {
    let sessions = vec![
        session(20_251_115, dec!(100000), dec!(110000)),
        session(20_251_118, dec!(110000), dec!(120000)),
    ];
    let perf = PerformanceEvaluator::default().evaluate(&sessions);

    assert_eq!(perf.total_trades, 2);
    assert_eq!(perf.winning_trades, 2);
    assert_eq!(perf.losing_trades, 0);
    assert_eq!(perf.win_rate, 100.0);
    // initial cash is the first session's end cash
    assert_eq!(perf.initial_cash, dec!(110000));
    assert_eq!(perf.final_value, dec!(120000));
    assert_eq!(perf.net_profit, dec!(10000));
    assert_eq!(perf.max_drawdown, Decimal::ZERO);
    assert_eq!(perf.calmar_ratio, 0.0);
    assert_eq!(perf.sortino_ratio, 0.0);
    // identical returns have zero variance
    assert_eq!(perf.sharpe_ratio, 0.0);
}

#[test]
fn test_zero_start_cash_is_restated() {
    let sessions = vec![
        session(20_251_115, dec!(0), dec!(105000)),
        session(20_251_118, dec!(100000), dec!(101000)),
    ];
    let perf = PerformanceEvaluator::default().evaluate(&sessions);

    // 105000 raw P&L restated against the 100000 base amount
    assert_eq!(perf.max_single_win, dec!(5000));
    assert_eq!(perf.total_win, dec!(6000));
    assert_eq!(perf.winning_trades, 2);
    assert_eq!(perf.net_profit, dec!(-4000));
    assert_eq!(perf.max_drawdown, dec!(4000));
    assert_eq!(perf.max_drawdown_duration_bars, 1);
    assert_eq!(perf.calmar_ratio, -1.0);
}

#[test]
fn test_mixed_sessions() {
    let sessions = vec![
        session(20_251_115, dec!(100000), dec!(100000)),
        session(20_251_118, dec!(100000), dec!(98000)),
        session(20_251_119, dec!(98000), dec!(101000)),
    ];
    let perf = PerformanceEvaluator::default().evaluate(&sessions);

    // the flat session is neither a win nor a loss
    assert_eq!(perf.total_trades, 2);
    assert_eq!(perf.win_rate, 50.0);
    assert_eq!(perf.net_profit, dec!(1000));
    assert_eq!(perf.net_profit_pct, 1.0);
    assert_eq!(perf.avg_win, dec!(3000));
    assert_eq!(perf.avg_loss, dec!(-2000));
    assert_eq!(perf.odds_ratio, -1.5);
    assert_eq!(perf.max_single_loss_pct, -2.0);
    assert_eq!(perf.max_drawdown, dec!(2000));
    assert_eq!(perf.calmar_ratio, 0.5);
    assert_eq!(perf.top_1pct_win_pct, 100.0);
    assert_eq!(perf.top_1pct_loss_pct, 100.0);
    assert!(perf.sharpe_ratio > 0.0);
    assert!(perf.sortino_ratio > 0.0);
}

#[test]
fn test_commission_and_open_positions() {
    let position = PositionSessionStats::new(20_251_115, "600000")
        .with_end(100, dec!(10000))
        .with_net_cashflow(dec!(-10000))
        .with_commission(dec!(5));
    let sessions =
        vec![session(20_251_115, dec!(100000), dec!(0)).with_end_positions(vec![position])];
    let perf = PerformanceEvaluator::default().evaluate(&sessions);

    // end cash not supplied: 100000 - 10000 - 5 in cash plus 10000 held
    assert_eq!(perf.final_value, dec!(99995));
    assert_eq!(perf.total_commission, dec!(5));
    assert_eq!(perf.total_loss, dec!(-5));
    assert_eq!(perf.commission_loss_pct, 100.0);
    assert_eq!(perf.open_positions, 1);
}

#[test]
fn test_symbol_history() {
    let day = |id, position: Option<PositionSessionStats>| {
        let mut positions = vec![PositionSessionStats::new(id, "000001")];
        positions.extend(position);
        session(id, dec!(100000), dec!(100000)).with_end_positions(positions)
    };
    let sessions = vec![
        day(
            20_251_115,
            Some(
                PositionSessionStats::new(20_251_115, "600000")
                    .with_start(100, dec!(10000))
                    .with_end(100, dec!(10500))
                    .with_realized_profit(dec!(500)),
            ),
        ),
        day(
            20_251_118,
            Some(
                PositionSessionStats::new(20_251_118, "600000")
                    .with_start(100, dec!(10500))
                    .with_end(100, dec!(10300))
                    .with_realized_profit(dec!(-200)),
            ),
        ),
        day(20_251_119, None),
    ];
    let perf = PerformanceEvaluator::default().evaluate_symbol(&sessions, "600000");

    assert_eq!(perf.symbol.as_deref(), Some("600000"));
    assert_eq!(perf.total_trades, 2);
    assert_eq!(perf.initial_cash, dec!(10000));
    assert_eq!(perf.final_value, dec!(10300));
    assert_eq!(perf.net_profit, dec!(300));
    assert_eq!(perf.net_profit_pct, 3.0);
    assert_eq!(perf.max_drawdown, dec!(200));
    assert_eq!(perf.calmar_ratio, 1.5);
}

#[test]
fn test_sessions_from_json() {
    let json = r#"[
        {"session": 20251115, "start_cash": "100000", "end_cash": "100000"},
        {"session": 20251118, "start_cash": "100000", "end_cash": "98000",
         "end_positions": [{"session": 20251118, "symbol": "600000",
                            "end_volume": 100, "end_value": "2000",
                            "realized_profit": "-50"}],
         "trades": [{"symbol": "600000", "side": "buy", "volume": 100}]},
        {"session": 20251119, "start_cash": "98000", "end_cash": "101000"}
    ]"#;
    let parsed: Vec<SessionStats> = serde_json::from_str(json).unwrap();
    assert_eq!(parsed[1].trades().len(), 1);
    assert_eq!(parsed[1].end_positions()[0].realized_profit(), dec!(-50));

    let perf = compute_account_performance(&parsed, 0.03);
    // session 2 moved 2000 of cash into stock, so it is flat
    assert_eq!(perf.total_trades, 1);
    assert_eq!(perf.winning_trades, 1);
    assert_eq!(perf.net_profit, dec!(1000));

    let value: serde_json::Value = serde_json::from_str(&perf.to_json()).unwrap();
    assert_eq!(value["net_profit"].as_str(), Some("1000"));
    assert_eq!(value["total_trades"].as_u64(), Some(1));
}

#[test]
fn test_live_against_replay() {
    let live = vec![
        session(20_251_115, dec!(100000), dec!(101000)),
        session(20_251_118, dec!(101000), dec!(103000)),
        session(20_251_119, dec!(103000), dec!(102000)),
    ];
    let replay = vec![
        session(20_251_115, dec!(100000), dec!(101000)),
        session(20_251_118, dec!(101000), dec!(104000)),
    ];
    let result = PerformanceEvaluator::default().compare(&live, &replay);

    assert!(result.has_session_mismatch());
    assert_eq!(result.only_in_first, vec![20_251_119]);
    assert!(result.only_in_second.is_empty());
    assert_eq!(result.matched_sessions, 2);
    assert_eq!(result.total_sessions, 3);

    // each side's aggregate covers its full session list
    assert_eq!(result.first.total_trades, 3);
    assert_eq!(result.second.total_trades, 2);
    assert_eq!(result.first.net_profit, dec!(1000));
    assert_eq!(result.second.net_profit, dec!(3000));
    assert_eq!(result.performance_ratio, 3.0);
    assert_eq!(result.drift_percentage, 200.0);
    assert_eq!(result.delta.total_trades, -1);

    assert_eq!(result.sessions[0].pnl_delta, Decimal::ZERO);
    assert_eq!(result.sessions[1].pnl_delta, dec!(1000));
    assert_eq!(result.sessions[1].drift_ratio, 0.5);

    let value: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
    assert_eq!(value["matched_sessions"].as_u64(), Some(2));
}

#[test]
fn test_empty_inputs() {
    let evaluator = PerformanceEvaluator::default();
    assert_eq!(evaluator.evaluate(&[]), Performance::empty());
    assert!(evaluator.evaluate_all_symbols(&[]).is_empty());

    let result = evaluator.compare(&[], &[]);
    assert_eq!(result.first, Performance::empty());
    assert_eq!(result.session_match_rate, 0.0);
}
