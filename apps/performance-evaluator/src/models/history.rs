//! Per-symbol views over an account session list.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::{PositionSessionStats, SessionId, SessionStats};

/// End positions of one symbol in one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPositions {
    /// End-of-session positions; empty when the symbol was not held.
    #[serde(default)]
    pub end_positions: Vec<PositionSessionStats>,
}

/// Session id to end positions for one symbol. Iteration order is not
/// meaningful; consumers sort by session id.
pub type PositionHistory = HashMap<SessionId, SessionPositions>;

/// Build the history of `symbol` from an account session list.
///
/// Every session gets an entry, empty when the symbol is absent. A repeated
/// session id keeps the later record.
#[must_use]
pub fn position_history(sessions: &[SessionStats], symbol: &str) -> PositionHistory {
    sessions
        .iter()
        .map(|s| {
            let end_positions = s
                .end_positions()
                .iter()
                .filter(|p| p.symbol() == symbol)
                .cloned()
                .collect();
            (s.session(), SessionPositions { end_positions })
        })
        .collect()
}

/// Sorted set of symbols held at the end of any session.
#[must_use]
pub fn symbols(sessions: &[SessionStats]) -> BTreeSet<String> {
    sessions
        .iter()
        .flat_map(|s| s.end_positions().iter().map(|p| p.symbol().to_string()))
        .collect()
}
