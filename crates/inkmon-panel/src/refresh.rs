//! Partial/full repaint scheduling.
//!
//! E-paper panels accumulate ghosting under repeated partial updates and
//! need a periodic flashing full refresh to restore contrast. The scheduler
//! here amortizes that expensive full refresh across many cheap partial
//! ones with a plain cycle counter.

use std::num::NonZeroU32;

/// How the next repaint should be pushed to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    /// Re-initialize the driver and redraw the whole panel. Clears
    /// ghosting; slow.
    Full,
    /// Incremental update without re-initialization. Fast; accumulates
    /// ghosting.
    Partial,
}

impl PaintMode {
    /// Human-readable name, for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            PaintMode::Full => "full",
            PaintMode::Partial => "partial",
        }
    }
}

/// Cycle counter driving the repaint schedule.
///
/// Starts at zero and increments once per tick; every `cycle_limit`-th tick
/// comes back as [`PaintMode::Full`] and resets the counter. The counter
/// therefore stays strictly below the limit between ticks.
#[derive(Debug, Clone)]
pub struct RefreshState {
    cycle_count: u32,
    cycle_limit: NonZeroU32,
}

impl RefreshState {
    /// Scheduler with the counter at zero; the first full repaint lands on
    /// the `cycle_limit`-th tick.
    pub fn new(cycle_limit: NonZeroU32) -> Self {
        Self {
            cycle_count: 0,
            cycle_limit,
        }
    }

    /// Ticks since the last full repaint (or startup).
    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    /// Configured full-repaint period in ticks.
    pub fn cycle_limit(&self) -> u32 {
        self.cycle_limit.get()
    }

    /// Advance one tick and pick the paint mode for it.
    ///
    /// Returns [`PaintMode::Full`] exactly when the increment reaches the
    /// limit, resetting the counter to zero for the next cycle.
    // SAFETY: cycle_count < cycle_limit <= u32::MAX holds on entry, so the
    // increment cannot overflow.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn advance(&mut self) -> PaintMode {
        self.cycle_count += 1;
        if self.cycle_count >= self.cycle_limit.get() {
            self.cycle_count = 0;
            PaintMode::Full
        } else {
            PaintMode::Partial
        }
    }
}
