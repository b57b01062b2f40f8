//! Peak-to-current drawdown tracking over a value series.

use rust_decimal::Decimal;

/// Running drawdown state. Feed values in session order with
/// [`DrawdownTracker::observe`].
#[derive(Debug, Clone)]
pub struct DrawdownTracker {
    peak: Decimal,
    max_drawdown: Decimal,
    current_duration: u64,
    max_duration: u64,
}

impl DrawdownTracker {
    /// Start tracking with an initial peak.
    pub const fn new(initial_peak: Decimal) -> Self {
        Self {
            peak: initial_peak,
            max_drawdown: Decimal::ZERO,
            current_duration: 0,
            max_duration: 0,
        }
    }

    /// Record the next value.
    pub fn observe(&mut self, value: Decimal) {
        if value > self.peak {
            self.peak = value;
        }

        let drawdown = self.peak - value;
        if drawdown > self.max_drawdown {
            self.max_drawdown = drawdown;
        }

        if drawdown > Decimal::ZERO {
            self.current_duration += 1;
            self.max_duration = self.max_duration.max(self.current_duration);
        } else {
            self.current_duration = 0;
        }
    }

    /// Largest decline from a peak, never negative.
    pub const fn max_drawdown(&self) -> Decimal {
        self.max_drawdown
    }

    /// Longest run of consecutive values below the running peak.
    pub const fn max_duration_bars(&self) -> u64 {
        self.max_duration
    }
}
