//! Typed host contracts shared by the invitation runtime and its browser adapters.
//!
//! This crate is the API-first boundary between the pure invitation domain and the hosting
//! environment. It exposes the clock, environment-probe, and tick-scheduler seams together with
//! deterministic in-memory implementations used by tests and non-browser builds. Concrete browser
//! adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod environment;
pub mod host;
pub mod schedule;
pub mod time;

pub use environment::{EnvironmentProbe, EnvironmentSnapshot, StaticEnvironmentProbe};
pub use host::HostServices;
pub use schedule::{ManualTickScheduler, NoopTickScheduler, ScheduledTask, TickScheduler};
pub use time::{unix_time_ms_now, Clock, ManualClock, SystemClock};
