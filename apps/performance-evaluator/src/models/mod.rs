//! Session records and computed results.
//!
//! Inputs are [`SessionStats`] (account level) and [`PositionSessionStats`]
//! (one instrument). Outputs are [`Performance`] snapshots and the
//! [`PerformanceComparison`] / [`SessionComparison`] records built from two
//! session sets.

mod comparison;
mod history;
mod performance;
mod position;
mod session;

pub use comparison::{PerformanceComparison, PerformanceDelta, SessionComparison};
pub use history::{PositionHistory, SessionPositions, position_history, symbols};
pub use performance::Performance;
pub use position::PositionSessionStats;
pub use session::SessionStats;

/// Session identifier, a sortable date-like integer such as `20251115`.
pub type SessionId = u32;

/// Raw trade record carried through untouched.
pub type TradeRecord = serde_json::Map<String, serde_json::Value>;
