//! Site configuration: static content, policy thresholds, and timing.
//!
//! The configuration is authored as TOML and embedded into the site binary. Policy sections are
//! optional and fall back to the built-in defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    countdown::{CountdownError, CountdownTarget},
    device::DevicePolicy,
    render_policy::ParticleBaseline,
};

#[derive(Debug, Error)]
/// Configuration loading failures.
pub enum ConfigError {
    /// The TOML document could not be deserialized.
    #[error("invitation config is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// An event's start time cannot be used as a countdown target.
    #[error("event `{event}` has an unusable start time: {source}")]
    InvalidEventDate {
        /// Offending event id.
        event: String,
        /// Parse failure.
        source: CountdownError,
    },
    /// A timing value must be non-zero.
    #[error("timing value `{field}` must be greater than zero")]
    ZeroTiming {
        /// Offending field name.
        field: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// The couple.
pub struct CoupleInfo {
    /// Groom's name.
    pub groom: String,
    /// Bride's name.
    pub bride: String,
}

impl CoupleInfo {
    /// Names joined for headings.
    pub fn full_names(&self) -> String {
        format!("{} & {}", self.groom, self.bride)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Family tribute content.
pub struct FamilyInfo {
    /// Father's name.
    pub father: String,
    /// Mother's name.
    pub mother: String,
    /// Tribute message.
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// One scheduled ceremony.
pub struct EventInfo {
    /// Stable id used for DOM anchors.
    pub id: String,
    /// Ceremony name.
    pub name: String,
    /// Start as an ISO-8601 date-time in venue local time.
    pub starts_at: String,
    /// Human-readable date.
    pub display_date: String,
    /// Human-readable time.
    pub display_time: String,
    /// City and region.
    pub location: String,
    /// Venue name.
    pub venue: String,
    /// Street address.
    pub address: String,
    /// Short ceremony description.
    #[serde(default)]
    pub description: String,
    /// Optional map link.
    #[serde(default)]
    pub map_url: Option<String>,
    /// Whether the events section counts down to this ceremony.
    #[serde(default)]
    pub countdown: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// One love-story timeline entry.
pub struct StoryMilestone {
    /// Year label.
    pub year: String,
    /// Milestone title.
    pub title: String,
    /// Milestone narrative.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Static page content.
pub struct SiteContent {
    /// The couple.
    pub couple: CoupleInfo,
    /// Family tribute.
    pub family: FamilyInfo,
    /// Hero tagline.
    #[serde(default)]
    pub tagline: String,
    /// Social hashtag shown in the footer.
    #[serde(default)]
    pub hashtag: String,
    /// Ceremonies in schedule order.
    #[serde(default)]
    pub events: Vec<EventInfo>,
    /// Love-story timeline in chronological order.
    #[serde(default)]
    pub love_story: Vec<StoryMilestone>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Timer-related configuration.
pub struct TimingConfig {
    /// How long the splash view stays up before content mounts.
    pub splash_duration_ms: u64,
    /// Countdown tick interval on desktop.
    pub countdown_tick_desktop_ms: u64,
    /// Countdown tick interval on mobile.
    pub countdown_tick_mobile_ms: u64,
    /// Venue offset from UTC in minutes, applied to offset-less event times.
    pub venue_utc_offset_minutes: i32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            splash_duration_ms: 3_000,
            countdown_tick_desktop_ms: 1_000,
            countdown_tick_mobile_ms: 2_000,
            venue_utc_offset_minutes: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
/// Complete site configuration.
pub struct InvitationConfig {
    /// Static page content.
    pub content: SiteContent,
    /// Device classification thresholds.
    #[serde(default)]
    pub device: DevicePolicy,
    /// Particle count baselines.
    #[serde(default)]
    pub particles: ParticleBaseline,
    /// Timer configuration.
    #[serde(default)]
    pub timing: TimingConfig,
}

impl InvitationConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document does not deserialize or fails validation.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every event start time is a usable countdown target and that timer values
    /// are non-zero.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("splash_duration_ms", self.timing.splash_duration_ms),
            ("countdown_tick_desktop_ms", self.timing.countdown_tick_desktop_ms),
            ("countdown_tick_mobile_ms", self.timing.countdown_tick_mobile_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroTiming { field });
            }
        }

        for event in &self.content.events {
            self.event_target(event)
                .map_err(|source| ConfigError::InvalidEventDate {
                    event: event.id.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Countdown target for `event` in venue local time.
    ///
    /// # Errors
    ///
    /// Returns [`CountdownError`] when the start time does not parse.
    pub fn event_target(&self, event: &EventInfo) -> Result<CountdownTarget, CountdownError> {
        CountdownTarget::parse(&event.starts_at, self.timing.venue_utc_offset_minutes)
    }

    /// The ceremony the events section counts down to: the first flagged one, else the last.
    pub fn countdown_event(&self) -> Option<&EventInfo> {
        self.content
            .events
            .iter()
            .find(|event| event.countdown)
            .or_else(|| self.content.events.last())
    }
}
