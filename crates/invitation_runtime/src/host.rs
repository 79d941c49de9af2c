//! Browser timer adapter behind [`TickScheduler`].

use std::{cell::RefCell, time::Duration};

use leptos::{set_interval_with_handle, set_timeout_with_handle};
use platform_host::{ScheduledTask, TickScheduler};

#[derive(Debug, Clone, Copy, Default)]
/// [`TickScheduler`] backed by `window.setInterval` and `window.setTimeout`.
///
/// Dropping or cancelling the returned [`ScheduledTask`] clears the browser timer.
pub struct LeptosTickScheduler;

impl TickScheduler for LeptosTickScheduler {
    fn every(
        &self,
        period: Duration,
        tick: Box<dyn FnMut()>,
    ) -> Result<ScheduledTask, String> {
        let tick = RefCell::new(tick);
        let handle = set_interval_with_handle(
            move || {
                // A callback that clears its own interval may still be mid-call.
                if let Ok(mut tick) = tick.try_borrow_mut() {
                    (*tick)();
                }
            },
            period,
        )
        .map_err(|err| format!("setInterval failed: {err:?}"))?;
        Ok(ScheduledTask::new(move || handle.clear()))
    }

    fn after(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Result<ScheduledTask, String> {
        let handle = set_timeout_with_handle(fire, delay)
            .map_err(|err| format!("setTimeout failed: {err:?}"))?;
        Ok(ScheduledTask::new(move || handle.clear()))
    }
}
