//! Time helpers and the injectable clock contract.

use std::{cell::Cell, rc::Rc};
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

/// Wall-clock source read by timer-driven consumers.
pub trait Clock {
    /// Returns the current unix timestamp in milliseconds.
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
/// Clock backed by the host's real wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        unix_time_ms_now()
    }
}

#[derive(Debug, Clone, Default)]
/// Manually driven clock. Clones share the same instant.
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    /// Creates a clock frozen at `now_ms`.
    pub fn new(now_ms: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(now_ms)),
        }
    }

    /// Moves the clock to an absolute instant.
    pub fn set(&self, now_ms: i64) {
        self.now.set(now_ms);
    }

    /// Moves the clock forward (or backward, for negative values) by `delta_ms`.
    pub fn advance(&self, delta_ms: i64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_the_same_instant() {
        let clock = ManualClock::new(1_000);
        let observer = clock.clone();

        clock.advance(500);
        assert_eq!(observer.now_ms(), 1_500);

        observer.set(42);
        assert_eq!(clock.now_ms(), 42);
    }

    #[test]
    fn system_clock_reports_a_post_epoch_instant() {
        assert!(SystemClock.now_ms() > 1_600_000_000_000);
    }
}
