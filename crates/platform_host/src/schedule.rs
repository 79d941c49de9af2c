//! Cancellable timer contracts.
//!
//! Every timer acquired through [`TickScheduler`] is represented by a [`ScheduledTask`] guard.
//! The guard releases the underlying host timer exactly once, either through
//! [`ScheduledTask::cancel`] or when it is dropped, so owners tear timers down on every exit path.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
    time::Duration,
};

use crate::time::ManualClock;

/// Guard owning one host timer registration.
pub struct ScheduledTask {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    /// Wraps a release hook that clears the underlying timer.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard with nothing to release.
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Returns whether the guard still holds a timer registration.
    pub fn is_armed(&self) -> bool {
        self.release.is_some()
    }

    /// Releases the timer now.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("armed", &self.is_armed())
            .finish()
    }
}

/// Host service scheduling repeating and one-shot callbacks on the event loop.
pub trait TickScheduler {
    /// Runs `tick` every `period` until the returned guard is released.
    ///
    /// # Errors
    ///
    /// Returns an error when the host refuses the timer registration.
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Result<ScheduledTask, String>;

    /// Runs `fire` once after `delay` unless the returned guard is released first.
    ///
    /// # Errors
    ///
    /// Returns an error when the host refuses the timer registration.
    fn after(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Result<ScheduledTask, String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Scheduler for hosts without an event loop. Callbacks never run.
pub struct NoopTickScheduler;

impl TickScheduler for NoopTickScheduler {
    fn every(&self, _period: Duration, _tick: Box<dyn FnMut()>) -> Result<ScheduledTask, String> {
        Ok(ScheduledTask::inert())
    }

    fn after(&self, _delay: Duration, _fire: Box<dyn FnOnce()>) -> Result<ScheduledTask, String> {
        Ok(ScheduledTask::inert())
    }
}

enum TickCallback {
    Repeating(Box<dyn FnMut()>),
    Once(Box<dyn FnOnce()>),
}

struct ManualEntry {
    id: u64,
    due_ms: u64,
    period_ms: Option<u64>,
    callback: Option<TickCallback>,
    active: Rc<Cell<bool>>,
}

#[derive(Default)]
struct ManualState {
    elapsed_ms: u64,
    next_id: u64,
    entries: Vec<ManualEntry>,
}

/// Deterministic scheduler driven by [`ManualTickScheduler::advance`].
///
/// Clones share the same timeline. When built with [`ManualTickScheduler::with_clock`], the
/// attached [`ManualClock`] is moved forward to each callback's due instant before it runs.
#[derive(Clone, Default)]
pub struct ManualTickScheduler {
    state: Rc<RefCell<ManualState>>,
    clock: Option<ManualClock>,
}

impl ManualTickScheduler {
    /// Creates a scheduler with its own timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler that keeps `clock` in step with its timeline.
    pub fn with_clock(clock: ManualClock) -> Self {
        Self {
            state: Rc::default(),
            clock: Some(clock),
        }
    }

    /// Total time advanced so far.
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.state.borrow().elapsed_ms)
    }

    /// Number of timer registrations that have not been released or fired.
    pub fn pending(&self) -> usize {
        self.state
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.active.get())
            .count()
    }

    /// Advances the timeline by `by`, running due callbacks in due-time order.
    pub fn advance(&self, by: Duration) {
        let target_ms = {
            let state = self.state.borrow();
            state.elapsed_ms.saturating_add(duration_ms(by))
        };

        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                state.entries.retain(|entry| entry.active.get());
                let Some(index) = state
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.callback.is_some() && entry.due_ms <= target_ms)
                    .min_by_key(|(_, entry)| (entry.due_ms, entry.id))
                    .map(|(index, _)| index)
                else {
                    break;
                };
                let previous_ms = state.elapsed_ms;
                let entry = &mut state.entries[index];
                let due_ms = entry.due_ms;
                let fired = (
                    entry.id,
                    entry.period_ms,
                    entry.callback.take(),
                    Rc::clone(&entry.active),
                );
                state.elapsed_ms = due_ms;
                (due_ms - previous_ms, fired)
            };

            let (step_ms, (id, period_ms, callback, active)) = next;
            self.move_clock(step_ms);

            match callback {
                Some(TickCallback::Repeating(mut tick)) => {
                    tick();
                    let mut state = self.state.borrow_mut();
                    if let Some(entry) = state.entries.iter_mut().find(|entry| entry.id == id) {
                        if entry.active.get() {
                            entry.due_ms += period_ms.unwrap_or(1);
                            entry.callback = Some(TickCallback::Repeating(tick));
                        }
                    }
                }
                Some(TickCallback::Once(fire)) => {
                    active.set(false);
                    fire();
                }
                None => {}
            }
        }

        let step_ms = {
            let mut state = self.state.borrow_mut();
            let step_ms = target_ms.saturating_sub(state.elapsed_ms);
            state.elapsed_ms = target_ms;
            step_ms
        };
        self.move_clock(step_ms);
    }

    fn move_clock(&self, step_ms: u64) {
        if let Some(clock) = &self.clock {
            clock.advance(step_ms as i64);
        }
    }

    fn register(
        &self,
        delay_ms: u64,
        period_ms: Option<u64>,
        callback: TickCallback,
    ) -> ScheduledTask {
        let active = Rc::new(Cell::new(true));
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due_ms = state.elapsed_ms.saturating_add(delay_ms);
        state.entries.push(ManualEntry {
            id,
            due_ms,
            period_ms,
            callback: Some(callback),
            active: Rc::clone(&active),
        });
        ScheduledTask::new(move || active.set(false))
    }
}

impl TickScheduler for ManualTickScheduler {
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Result<ScheduledTask, String> {
        let period_ms = duration_ms(period).max(1);
        Ok(self.register(period_ms, Some(period_ms), TickCallback::Repeating(tick)))
    }

    fn after(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Result<ScheduledTask, String> {
        Ok(self.register(duration_ms(delay), None, TickCallback::Once(fire)))
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::time::Clock;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let sink = Rc::clone(&hits);
        (hits, move || sink.set(sink.get() + 1))
    }

    #[test]
    fn repeating_task_fires_once_per_period() {
        let scheduler = ManualTickScheduler::new();
        let (hits, tick) = counter();
        let _task = scheduler
            .every(Duration::from_millis(1_000), Box::new(tick))
            .expect("schedule");

        scheduler.advance(Duration::from_millis(999));
        assert_eq!(hits.get(), 0);

        scheduler.advance(Duration::from_millis(2_001));
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn dropping_the_guard_stops_the_timer() {
        let scheduler = ManualTickScheduler::new();
        let (hits, tick) = counter();
        let task = scheduler
            .every(Duration::from_millis(500), Box::new(tick))
            .expect("schedule");

        scheduler.advance(Duration::from_millis(1_000));
        assert_eq!(hits.get(), 2);

        drop(task);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(Duration::from_millis(5_000));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn one_shot_fires_once_and_cancel_prevents_it() {
        let scheduler = ManualTickScheduler::new();
        let (fired, fire) = counter();
        let (cancelled, never) = counter();

        let _kept = scheduler
            .after(Duration::from_millis(3_000), Box::new(fire))
            .expect("schedule");
        let dropped = scheduler
            .after(Duration::from_millis(3_000), Box::new(never))
            .expect("schedule");
        dropped.cancel();

        scheduler.advance(Duration::from_secs(10));
        assert_eq!(fired.get(), 1);
        assert_eq!(cancelled.get(), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn attached_clock_tracks_each_firing_instant() {
        let clock = ManualClock::new(10_000);
        let scheduler = ManualTickScheduler::with_clock(clock.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let observed = clock.clone();
        let _task = scheduler
            .every(
                Duration::from_millis(2_000),
                Box::new(move || sink.borrow_mut().push(observed.now_ms())),
            )
            .expect("schedule");

        scheduler.advance(Duration::from_millis(5_000));

        assert_eq!(*seen.borrow(), vec![12_000, 14_000]);
        assert_eq!(clock.now_ms(), 15_000);
        assert_eq!(scheduler.elapsed(), Duration::from_millis(5_000));
    }

    #[test]
    fn callback_may_release_its_own_registration() {
        let scheduler = ManualTickScheduler::new();
        let slot: Rc<RefCell<Option<ScheduledTask>>> = Rc::default();
        let (hits, mut tick) = counter();
        let inner = Rc::clone(&slot);
        let task = scheduler
            .every(
                Duration::from_millis(100),
                Box::new(move || {
                    tick();
                    inner.borrow_mut().take();
                }),
            )
            .expect("schedule");
        *slot.borrow_mut() = Some(task);

        scheduler.advance(Duration::from_millis(1_000));
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn noop_scheduler_hands_out_inert_guards() {
        let task = NoopTickScheduler
            .every(Duration::from_millis(1), Box::new(|| {}))
            .expect("schedule");
        assert!(!task.is_armed());
    }
}
