//! Countdown engine.
//!
//! [`CountdownState`] is the pure floor decomposition of the time left until a target instant.
//! [`CountdownTimer`] holds the last displayed state so a skewed clock can never make the display
//! count back up, and [`CountdownTicker`] drives a timer from a [`TickScheduler`] with start/stop
//! semantics. The ticker releases its interval when it reaches the expired state or is dropped.

use std::{cell::RefCell, rc::Rc, time::Duration};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use platform_host::{Clock, ScheduledTask, TickScheduler};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Milliseconds in one second.
pub const MS_PER_SECOND: i64 = 1_000;
/// Milliseconds in one minute.
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
/// Milliseconds in one hour.
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Countdown target construction failures.
pub enum CountdownError {
    /// The target string is not a recognized ISO-8601 date or date-time.
    #[error("invalid countdown target `{raw}`: expected an ISO-8601 date or date-time")]
    InvalidTarget {
        /// Rejected input.
        raw: String,
    },
    /// The fixed UTC offset used for offset-less targets is out of range.
    #[error("utc offset of {minutes} minutes is out of range")]
    InvalidOffset {
        /// Rejected offset in minutes east of UTC.
        minutes: i32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Countdown lifecycle.
pub enum CountdownPhase {
    /// The target lies in the future.
    Counting,
    /// The target has passed. Terminal.
    Expired,
}

impl CountdownPhase {
    /// Stable token for `data-*` attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Counting => "counting",
            Self::Expired => "expired",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Day/hour/minute/second breakdown of the time left until a target.
pub struct CountdownState {
    /// Whole days left. Never carried into larger units.
    pub days: u64,
    /// Whole hours left after days, `0..24`.
    pub hours: u32,
    /// Whole minutes left after hours, `0..60`.
    pub minutes: u32,
    /// Whole seconds left after minutes, `0..60`.
    pub seconds: u32,
    /// Whether the target instant has been reached.
    pub is_expired: bool,
}

impl CountdownState {
    /// The terminal all-zero state.
    pub const EXPIRED: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        is_expired: true,
    };

    /// Decomposes `remaining_ms` by floor division. Non-positive input yields [`Self::EXPIRED`].
    pub fn from_remaining_ms(remaining_ms: i64) -> Self {
        if remaining_ms <= 0 {
            return Self::EXPIRED;
        }

        let days = remaining_ms / MS_PER_DAY;
        let rem = remaining_ms % MS_PER_DAY;
        let hours = rem / MS_PER_HOUR;
        let rem = rem % MS_PER_HOUR;
        let minutes = rem / MS_PER_MINUTE;
        let rem = rem % MS_PER_MINUTE;
        let seconds = rem / MS_PER_SECOND;

        Self {
            days: days as u64,
            hours: hours as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
            is_expired: false,
        }
    }

    /// State at `now_ms` for a target at `target_ms` (both unix milliseconds).
    pub fn between(target_ms: i64, now_ms: i64) -> Self {
        Self::from_remaining_ms(target_ms.saturating_sub(now_ms))
    }

    /// Milliseconds represented by the four fields.
    pub fn total_ms(&self) -> i64 {
        (self.days as i64).saturating_mul(MS_PER_DAY)
            + i64::from(self.hours) * MS_PER_HOUR
            + i64::from(self.minutes) * MS_PER_MINUTE
            + i64::from(self.seconds) * MS_PER_SECOND
    }

    /// Lifecycle phase of this state.
    pub fn phase(&self) -> CountdownPhase {
        if self.is_expired {
            CountdownPhase::Expired
        } else {
            CountdownPhase::Counting
        }
    }

    /// Labelled fields in display order.
    pub fn units(&self) -> [(&'static str, u64); 4] {
        [
            ("Days", self.days),
            ("Hours", u64::from(self.hours)),
            ("Minutes", u64::from(self.minutes)),
            ("Seconds", u64::from(self.seconds)),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Immutable instant a countdown runs toward.
pub struct CountdownTarget {
    instant: DateTime<FixedOffset>,
}

impl CountdownTarget {
    /// Parses an ISO-8601 target.
    ///
    /// Accepts RFC 3339 (explicit offset), `YYYY-MM-DDTHH:MM[:SS[.fff]]`, the same with a space
    /// separator, and a bare `YYYY-MM-DD` (midnight). Inputs without an offset are read as local
    /// time at `utc_offset_minutes` east of UTC.
    ///
    /// # Errors
    ///
    /// Returns [`CountdownError`] when `raw` is not recognized or the offset is out of range.
    pub fn parse(raw: &str, utc_offset_minutes: i32) -> Result<Self, CountdownError> {
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(CountdownError::InvalidOffset {
                minutes: utc_offset_minutes,
            })?;
        let trimmed = raw.trim();

        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self { instant });
        }

        let naive = NAIVE_DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .ok_or_else(|| CountdownError::InvalidTarget {
                raw: raw.to_string(),
            })?;

        offset
            .from_local_datetime(&naive)
            .single()
            .map(|instant| Self { instant })
            .ok_or_else(|| CountdownError::InvalidTarget {
                raw: raw.to_string(),
            })
    }

    /// Target as unix milliseconds.
    pub fn unix_ms(&self) -> i64 {
        self.instant.timestamp_millis()
    }

    /// Remaining-time breakdown at `now_ms`.
    pub fn remaining_at(&self, now_ms: i64) -> CountdownState {
        CountdownState::between(self.unix_ms(), now_ms)
    }
}

/// Breakdown of the time from `now_millis` until `target_iso_date`, read as UTC when it carries
/// no offset.
///
/// # Errors
///
/// Returns [`CountdownError::InvalidTarget`] when the date cannot be parsed.
pub fn compute_remaining(
    target_iso_date: &str,
    now_millis: i64,
) -> Result<CountdownState, CountdownError> {
    CountdownTarget::parse(target_iso_date, 0).map(|target| target.remaining_at(now_millis))
}

#[derive(Debug, Clone)]
/// Stateful countdown whose displayed value never increases and never leaves `Expired`.
pub struct CountdownTimer {
    target: CountdownTarget,
    last: CountdownState,
}

impl CountdownTimer {
    /// Starts a timer evaluated at `now_ms`.
    pub fn new(target: CountdownTarget, now_ms: i64) -> Self {
        Self {
            target,
            last: target.remaining_at(now_ms),
        }
    }

    /// Continues a countdown whose display last showed `shown`, evaluated at `now_ms`.
    ///
    /// The result never shows more time than `shown`, and stays expired if `shown` was.
    pub fn resume(target: CountdownTarget, shown: CountdownState, now_ms: i64) -> Self {
        let mut timer = Self {
            target,
            last: shown,
        };
        timer.advance(now_ms);
        timer
    }

    /// Re-derives the state at `now_ms` and returns the state to display.
    pub fn advance(&mut self, now_ms: i64) -> CountdownState {
        if self.last.is_expired {
            return self.last;
        }

        let next = self.target.remaining_at(now_ms);
        if next.is_expired || next.total_ms() <= self.last.total_ms() {
            self.last = next;
        }
        self.last
    }

    /// Last displayed state.
    pub fn current(&self) -> CountdownState {
        self.last
    }

    /// Lifecycle phase of the last displayed state.
    pub fn phase(&self) -> CountdownPhase {
        self.last.phase()
    }

    /// Countdown target.
    pub fn target(&self) -> CountdownTarget {
        self.target
    }
}

/// Cancellable scheduled task re-evaluating a [`CountdownTimer`] once per tick.
pub struct CountdownTicker {
    timer: Rc<RefCell<CountdownTimer>>,
    task: Rc<RefCell<Option<ScheduledTask>>>,
}

impl CountdownTicker {
    /// Evaluates the countdown now, reports it through `on_update`, and schedules re-evaluation
    /// every `period`.
    ///
    /// `on_update` runs synchronously for the initial state and afterwards only when the state
    /// changes. No interval is scheduled when the target has already passed, and the interval is
    /// released as soon as the expired state is reached.
    ///
    /// # Errors
    ///
    /// Returns the scheduler's error when the interval cannot be registered.
    pub fn start(
        scheduler: &dyn TickScheduler,
        clock: Rc<dyn Clock>,
        target: CountdownTarget,
        period: Duration,
        on_update: impl Fn(CountdownState) + 'static,
    ) -> Result<Self, String> {
        let timer = CountdownTimer::new(target, clock.now_ms());
        Self::drive(scheduler, clock, timer, period, on_update)
    }

    /// Like [`Self::start`], but continues from `shown`, the state a previous ticker last
    /// reported. Restarting with a new period therefore never counts the display back up.
    ///
    /// # Errors
    ///
    /// Returns the scheduler's error when the interval cannot be registered.
    pub fn resume(
        scheduler: &dyn TickScheduler,
        clock: Rc<dyn Clock>,
        target: CountdownTarget,
        shown: CountdownState,
        period: Duration,
        on_update: impl Fn(CountdownState) + 'static,
    ) -> Result<Self, String> {
        let timer = CountdownTimer::resume(target, shown, clock.now_ms());
        Self::drive(scheduler, clock, timer, period, on_update)
    }

    fn drive(
        scheduler: &dyn TickScheduler,
        clock: Rc<dyn Clock>,
        timer: CountdownTimer,
        period: Duration,
        on_update: impl Fn(CountdownState) + 'static,
    ) -> Result<Self, String> {
        let timer = Rc::new(RefCell::new(timer));
        let task = Rc::new(RefCell::new(None::<ScheduledTask>));

        let initial = timer.borrow().current();
        on_update(initial);
        if initial.is_expired {
            return Ok(Self { timer, task });
        }

        let tick = {
            let timer = Rc::clone(&timer);
            let task = Rc::clone(&task);
            move || {
                let (previous, next) = {
                    let mut timer = timer.borrow_mut();
                    let previous = timer.current();
                    (previous, timer.advance(clock.now_ms()))
                };
                if next != previous {
                    on_update(next);
                }
                if next.is_expired {
                    task.borrow_mut().take();
                }
            }
        };

        let registration = scheduler.every(period, Box::new(tick))?;
        *task.borrow_mut() = Some(registration);
        Ok(Self { timer, task })
    }

    /// Last displayed state.
    pub fn current(&self) -> CountdownState {
        self.timer.borrow().current()
    }

    /// Whether the interval is still registered.
    pub fn is_running(&self) -> bool {
        self.task.borrow().is_some()
    }

    /// Releases the interval.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.task.borrow_mut().take();
    }
}
