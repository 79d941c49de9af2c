//! Browser wall clock.

use platform_host::{unix_time_ms_now, Clock};

#[derive(Debug, Clone, Copy, Default)]
/// Clock backed by `Date.now()`.
pub struct WebClock;

impl Clock for WebClock {
    fn now_ms(&self) -> i64 {
        unix_time_ms_now()
    }
}
