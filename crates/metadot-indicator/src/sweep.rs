#![forbid(unsafe_code)]

//! Demo cursor animation: a time-driven sweep across the dot row.
//!
//! A pure time-to-fraction mapping; the host drives the clock and feeds the
//! result to [`DotField::set_scroll_fraction`](crate::field::DotField::set_scroll_fraction).
//! No timers, no threads, no interior state.

/// Sweeps the cursor from the first dot to the last and back, forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorSweep {
    span: f64,
    half_period: f64,
}

impl CursorSweep {
    /// Sweep across `dot_count` dots, taking `half_period_seconds` for each
    /// one-way pass.
    #[must_use]
    pub fn new(dot_count: usize, half_period_seconds: f64) -> Self {
        Self {
            span: dot_count.saturating_sub(1) as f64,
            half_period: half_period_seconds.max(0.001),
        }
    }

    /// Scroll fraction at `seconds` since the sweep started.
    #[must_use]
    pub fn fraction_at(&self, seconds: f64) -> f64 {
        ping_pong(self.span * (seconds / self.half_period), 0.0, self.span)
    }
}

#[inline]
fn ping_pong(value: f64, min: f64, max: f64) -> f64 {
    let range = (max - min).max(0.0001);
    let period = 2.0 * range;
    let mut v = (value - min).rem_euclid(period);
    if v > range {
        v = period - v;
    }
    min + v
}
