//! Concentration of gains and losses among the most extreme trades.

use super::constants::CONTRIBUTION_PERCENTILES;

/// Which tail of the P&L distribution is analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cohort {
    /// Positive P&L values, largest first.
    Wins,
    /// Negative P&L values, most negative first.
    Losses,
}

/// Percentage of `total` contributed by the top 1/5/10/20% of `values`.
///
/// Each cohort holds at least one value, so with fewer than 100 trades the
/// top 1% is the single most extreme trade. Loss sums are taken as absolute
/// values so `total` is expected to be the absolute total loss.
pub fn top_contributions(values: &[f64], total: f64, cohort: Cohort) -> [f64; 4] {
    if values.is_empty() || total == 0.0 {
        return [0.0; 4];
    }

    let mut sorted = values.to_vec();
    match cohort {
        Cohort::Wins => sorted.sort_by(|a, b| b.total_cmp(a)),
        Cohort::Losses => sorted.sort_by(|a, b| a.total_cmp(b)),
    }

    CONTRIBUTION_PERCENTILES.map(|pct| {
        let n = ((sorted.len() as f64 * pct / 100.0) as usize).max(1);
        let mut top_sum: f64 = sorted.iter().take(n).sum();
        if cohort == Cohort::Losses {
            top_sum = top_sum.abs();
        }
        top_sum / total * 100.0
    })
}
