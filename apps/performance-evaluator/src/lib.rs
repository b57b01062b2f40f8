// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Performance Evaluator - Rust Core Library
//!
//! Session-based trading performance statistics for the Cream trading system.
//!
//! # Modules
//!
//! - `models`: session inputs and computed outputs
//!   - `SessionStats`: account snapshot for one trading session
//!   - `PositionSessionStats`: one instrument within a session
//!   - `Performance`: aggregate metrics over a session sequence
//!   - `PerformanceComparison`: drift report between two session sets
//! - `metrics`: ratio engine, drawdown, contribution analysis, calculator
//! - `comparison`: per-session alignment of two session sets
//! - `evaluator`: facade holding the risk-free rate
//! - `config`: YAML configuration with env var interpolation
//! - `telemetry`: tracing subscriber setup
//!
//! Currency amounts are `rust_decimal::Decimal`; ratios and percentages
//! are `f64`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod comparison;
pub mod config;
pub mod evaluator;
pub mod metrics;
pub mod models;
pub mod telemetry;

pub use config::{ConfigError, EvaluatorConfig, LoggingConfig, load_config};
pub use evaluator::PerformanceEvaluator;
pub use metrics::{compute_account_performance, compute_position_performance};
pub use models::{
    Performance, PerformanceComparison, PerformanceDelta, PositionHistory,
    PositionSessionStats, SessionComparison, SessionId, SessionPositions, SessionStats,
    TradeRecord,
};
pub use telemetry::{TelemetryError, init_logging};
