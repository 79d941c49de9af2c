//! Embedded site configuration.

use std::sync::OnceLock;

use invitation_core::{ConfigError, InvitationConfig};

const INVITATION_TOML: &str = include_str!("../invitation.toml");

/// Parsed configuration embedded at build time. Parsed once per page load.
pub fn site_config() -> Result<&'static InvitationConfig, &'static ConfigError> {
    static CONFIG: OnceLock<Result<InvitationConfig, ConfigError>> = OnceLock::new();
    CONFIG
        .get_or_init(|| InvitationConfig::from_toml_str(INVITATION_TOML))
        .as_ref()
}

#[cfg(test)]
mod tests {
    use invitation_core::CountdownState;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_configuration_parses_and_validates() {
        let config = site_config().expect("embedded config");
        assert_eq!(config.content.couple.full_names(), "Praful & Pranjali");
        assert_eq!(config.content.events.len(), 2);
        assert_eq!(config.content.love_story.len(), 4);
        assert_eq!(config.timing.venue_utc_offset_minutes, 330);
    }

    #[test]
    fn wedding_is_the_countdown_target() {
        let config = site_config().expect("embedded config");
        let wedding = config.countdown_event().expect("countdown event");
        assert_eq!(wedding.id, "wedding");

        let target = config.event_target(wedding).expect("target");
        let two_days_before = target.unix_ms() - 2 * 86_400_000;
        assert_eq!(
            target.remaining_at(two_days_before),
            CountdownState {
                days: 2,
                hours: 0,
                minutes: 0,
                seconds: 0,
                is_expired: false,
            }
        );
    }
}
