//! Render parameters derived from a [`DeviceClassification`].
//!
//! Every decorative component reads its particle counts, animation timings, and effect toggles
//! from a [`RenderProfile`]. The profile is a pure function of the classification and the
//! configured baselines, so one classification always yields one set of render parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{config::TimingConfig, device::DeviceClassification};

const HEARTS_PALETTE: [&str; 3] = ["#FF1493", "#FFD700", "#00FFFF"];
const SPARKLES_PALETTE: [&str; 3] = ["#FFFFFF", "#FFD700", "#00FFFF"];
const FLOATING_PALETTE: [&str; 3] = ["#FFD700", "#4A0072", "#FF1493"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Decorative particle families.
pub enum ParticleKind {
    /// Floating hearts.
    Hearts,
    /// Twinkling sparkles.
    Sparkles,
    /// Slow floating orbs.
    Floating,
}

impl ParticleKind {
    /// Every particle family.
    pub const ALL: [Self; 3] = [Self::Hearts, Self::Sparkles, Self::Floating];

    /// Stable token for `data-*` attributes and CSS classes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Sparkles => "sparkles",
            Self::Floating => "floating",
        }
    }

    /// Glyph rendered for one particle.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Hearts => "\u{2665}",
            Self::Sparkles => "\u{2726}",
            Self::Floating => "\u{25CF}",
        }
    }

    const fn palette(self) -> &'static [&'static str] {
        match self {
            Self::Hearts => &HEARTS_PALETTE,
            Self::Sparkles => &SPARKLES_PALETTE,
            Self::Floating => &FLOATING_PALETTE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Configured particle count baselines.
pub struct ParticleBaseline {
    /// Desktop heart count.
    pub hearts: usize,
    /// Desktop sparkle count.
    pub sparkles: usize,
    /// Desktop floating-orb count.
    pub floating: usize,
    /// Mobile heart count.
    pub mobile_hearts: usize,
    /// Mobile sparkle count.
    pub mobile_sparkles: usize,
    /// Mobile floating-orb count.
    pub mobile_floating: usize,
    /// Factor applied to per-component counts on mobile.
    pub mobile_component_scale: f64,
    /// Upper bound on one particle field on desktop.
    pub max_particles: usize,
    /// Upper bound on one particle field on mobile.
    pub mobile_max_particles: usize,
}

impl Default for ParticleBaseline {
    fn default() -> Self {
        Self {
            hearts: 50,
            sparkles: 100,
            floating: 30,
            mobile_hearts: 15,
            mobile_sparkles: 30,
            mobile_floating: 15,
            mobile_component_scale: 0.4,
            max_particles: 100,
            mobile_max_particles: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Coarse rendering quality tier.
pub enum RenderQuality {
    /// Full effects.
    High,
    /// Reduced effects.
    Medium,
    /// Static presentation.
    Low,
}

impl RenderQuality {
    /// Stable token for `data-*` attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Parameters for one particle field.
pub struct ParticleBudget {
    /// Particle family.
    pub kind: ParticleKind,
    /// Number of particles to render.
    pub count: usize,
    /// Relative drift speed.
    pub speed: f64,
    /// Smallest particle size in rem.
    pub size_min: f64,
    /// Largest particle size in rem.
    pub size_max: f64,
    /// Colours sampled for particles.
    pub palette: &'static [&'static str],
    /// Whether the field renders at all.
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// Animation timings and effect toggles.
pub struct AnimationProfile {
    /// Page entrance duration in seconds.
    pub page_enter_s: f64,
    /// Section entrance duration in seconds.
    pub section_stagger_s: f64,
    /// Delay between staggered children in seconds.
    pub section_delay_s: f64,
    /// Hover scale factor.
    pub hover_scale: f64,
    /// Hover lift in pixels.
    pub hover_lift_px: f64,
    /// Whether hover-triggered effects run.
    pub hover_effects: bool,
    /// Whether continuous background loops run.
    pub loop_background: bool,
    /// Float animation amplitude in pixels.
    pub float_amplitude_px: f64,
    /// Float animation period in seconds.
    pub float_duration_s: f64,
    /// Rotation period in seconds.
    pub rotate_duration_s: f64,
    /// Pulse period in seconds.
    pub pulse_duration_s: f64,
}

impl AnimationProfile {
    fn for_device(device: DeviceClassification) -> Self {
        let mobile = device.is_mobile;
        Self {
            page_enter_s: if mobile { 0.8 } else { 1.2 },
            section_stagger_s: if mobile { 0.6 } else { 0.8 },
            section_delay_s: if mobile { 0.1 } else { 0.2 },
            hover_scale: if mobile { 1.02 } else { 1.05 },
            hover_lift_px: if mobile { 5.0 } else { 10.0 },
            hover_effects: !mobile,
            loop_background: !device.is_low_performance,
            float_amplitude_px: if mobile { 10.0 } else { 20.0 },
            float_duration_s: if mobile { 4.0 } else { 3.0 },
            rotate_duration_s: if mobile { 12.0 } else { 8.0 },
            pulse_duration_s: if mobile { 3.0 } else { 2.0 },
        }
    }

    /// Inline CSS custom properties consumed by the stylesheet's keyframes.
    pub fn css_variables(&self) -> String {
        format!(
            "--page-enter:{}s;--section-stagger:{}s;--section-delay:{}s;--hover-scale:{};\
             --hover-lift:{}px;--float-amplitude:{}px;--float-duration:{}s;\
             --rotate-duration:{}s;--pulse-duration:{}s",
            self.page_enter_s,
            self.section_stagger_s,
            self.section_delay_s,
            self.hover_scale,
            self.hover_lift_px,
            self.float_amplitude_px,
            self.float_duration_s,
            self.rotate_duration_s,
            self.pulse_duration_s,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Complete set of render parameters for one classification.
pub struct RenderProfile {
    /// Classification the profile was derived from.
    pub device: DeviceClassification,
    /// Quality tier.
    pub quality: RenderQuality,
    /// Heart field parameters.
    pub hearts: ParticleBudget,
    /// Sparkle field parameters.
    pub sparkles: ParticleBudget,
    /// Floating-orb field parameters.
    pub floating: ParticleBudget,
    /// Factor applied to component-requested particle counts.
    pub component_scale: f64,
    /// Upper bound on one particle field.
    pub max_particles: usize,
    /// Animation timings and toggles.
    pub animation: AnimationProfile,
    /// Countdown re-evaluation interval.
    pub countdown_tick: Duration,
    /// Fixed-header offset applied when scrolling to a section.
    pub scroll_offset_px: f64,
    /// Visible fraction of a section that triggers its entrance animation.
    pub reveal_threshold: f64,
    /// Viewport margin for the reveal test, in CSS margin syntax.
    pub reveal_root_margin: &'static str,
}

impl RenderProfile {
    /// Derives the profile for `device`.
    pub fn for_device(
        device: DeviceClassification,
        baseline: &ParticleBaseline,
        timing: &TimingConfig,
    ) -> Self {
        let mobile = device.is_mobile;
        // Mobile alone only scales fields down; constrained hardware turns them off.
        let enabled = !device.is_hardware_constrained;
        // (desktop, mobile) pairs for count, speed and maximum size.
        let budget = |kind: ParticleKind,
                      count: (usize, usize),
                      speed: (f64, f64),
                      size_max: (f64, f64),
                      size_min: f64| {
            let palette = kind.palette();
            ParticleBudget {
                kind,
                count: if mobile { count.1 } else { count.0 },
                speed: if mobile { speed.1 } else { speed.0 },
                size_min,
                size_max: if mobile { size_max.1 } else { size_max.0 },
                palette: if mobile { &palette[..2] } else { palette },
                enabled,
            }
        };

        Self {
            device,
            quality: if device.is_hardware_constrained {
                RenderQuality::Low
            } else if mobile {
                RenderQuality::Medium
            } else {
                RenderQuality::High
            },
            hearts: budget(
                ParticleKind::Hearts,
                (baseline.hearts, baseline.mobile_hearts),
                (0.5, 0.3),
                (2.0, 1.2),
                0.5,
            ),
            sparkles: budget(
                ParticleKind::Sparkles,
                (baseline.sparkles, baseline.mobile_sparkles),
                (1.0, 0.5),
                (1.0, 0.6),
                0.1,
            ),
            floating: budget(
                ParticleKind::Floating,
                (baseline.floating, baseline.mobile_floating),
                (0.3, 0.2),
                (1.5, 1.0),
                0.3,
            ),
            component_scale: if mobile {
                baseline.mobile_component_scale
            } else {
                1.0
            },
            max_particles: if mobile {
                baseline.mobile_max_particles
            } else {
                baseline.max_particles
            },
            animation: AnimationProfile::for_device(device),
            countdown_tick: Duration::from_millis(if mobile {
                timing.countdown_tick_mobile_ms
            } else {
                timing.countdown_tick_desktop_ms
            }),
            scroll_offset_px: if mobile { 80.0 } else { 0.0 },
            reveal_threshold: 0.1,
            // Touch layouts wait until the section clears the bottom tenth of the screen.
            reveal_root_margin: if mobile { "0px 0px -10% 0px" } else { "0px" },
        }
    }

    /// Baseline parameters for one particle family.
    pub fn budget(&self, kind: ParticleKind) -> &ParticleBudget {
        match kind {
            ParticleKind::Hearts => &self.hearts,
            ParticleKind::Sparkles => &self.sparkles,
            ParticleKind::Floating => &self.floating,
        }
    }

    /// Parameters for a field whose component asks for `requested` particles.
    ///
    /// The request is scaled by [`Self::component_scale`] (floored) and capped at
    /// [`Self::max_particles`]. `None` uses the family baseline. Disabled fields get zero.
    pub fn field_budget(&self, kind: ParticleKind, requested: Option<usize>) -> ParticleBudget {
        let mut budget = self.budget(kind).clone();
        budget.count = if budget.enabled {
            requested
                .map(|count| (count as f64 * self.component_scale).floor() as usize)
                .unwrap_or(budget.count)
                .min(self.max_particles)
        } else {
            0
        };
        budget
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn profile(is_mobile: bool, is_hardware_constrained: bool) -> RenderProfile {
        RenderProfile::for_device(
            DeviceClassification {
                is_mobile,
                is_low_performance: is_mobile || is_hardware_constrained,
                is_hardware_constrained,
            },
            &ParticleBaseline::default(),
            &TimingConfig::default(),
        )
    }

    #[test]
    fn desktop_profile_runs_full_effects() {
        let desktop = profile(false, false);
        assert_eq!(desktop.quality, RenderQuality::High);
        assert_eq!(desktop.hearts.count, 50);
        assert_eq!(desktop.sparkles.count, 100);
        assert_eq!(desktop.floating.count, 30);
        assert_eq!(desktop.hearts.palette.len(), 3);
        assert!(desktop.animation.hover_effects);
        assert!(desktop.animation.loop_background);
        assert_eq!(desktop.countdown_tick, Duration::from_millis(1_000));
        assert_eq!(desktop.reveal_threshold, 0.1);
        assert_eq!(desktop.reveal_root_margin, "0px");
    }

    #[test]
    fn mobile_profile_reduces_cost() {
        let mobile = profile(true, false);
        assert_eq!(mobile.quality, RenderQuality::Medium);
        assert!(mobile.hearts.enabled);
        assert_eq!(mobile.hearts.count, 15);
        assert_eq!(mobile.sparkles.palette, &["#FFFFFF", "#FFD700"]);
        assert_eq!(mobile.max_particles, 20);
        assert!(!mobile.animation.hover_effects);
        assert!(!mobile.animation.loop_background);
        assert_eq!(mobile.countdown_tick, Duration::from_millis(2_000));
        assert_eq!(mobile.scroll_offset_px, 80.0);
        assert_eq!(mobile.reveal_root_margin, "0px 0px -10% 0px");
    }

    #[test]
    fn quality_tiers_follow_the_classification() {
        assert_eq!(profile(false, false).quality, RenderQuality::High);
        assert_eq!(profile(true, false).quality, RenderQuality::Medium);
        assert_eq!(profile(false, true).quality, RenderQuality::Low);
        assert_eq!(profile(true, true).quality, RenderQuality::Low);
    }

    #[test]
    fn classified_phone_gets_a_scaled_down_heart_field() {
        let phone = crate::DevicePolicy::default().classify(&platform_host::EnvironmentSnapshot::new(
            375,
            812,
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
        ));
        let profile =
            RenderProfile::for_device(phone, &ParticleBaseline::default(), &TimingConfig::default());
        assert_eq!(profile.field_budget(ParticleKind::Hearts, Some(25)).count, 10);
        assert_eq!(profile.field_budget(ParticleKind::Hearts, None).count, 15);
    }

    #[test]
    fn constrained_hardware_disables_every_particle_field() {
        for constrained in [profile(false, true), profile(true, true)] {
            for kind in ParticleKind::ALL {
                assert!(!constrained.budget(kind).enabled);
                assert_eq!(constrained.field_budget(kind, Some(80)).count, 0);
            }
        }
    }

    #[test]
    fn component_requests_are_scaled_and_capped() {
        let desktop = profile(false, false);
        assert_eq!(desktop.field_budget(ParticleKind::Sparkles, Some(80)).count, 80);
        assert_eq!(desktop.field_budget(ParticleKind::Sparkles, Some(120)).count, 100);
        assert_eq!(desktop.field_budget(ParticleKind::Hearts, None).count, 50);

        let mobile_fast = profile(true, false);
        assert_eq!(mobile_fast.field_budget(ParticleKind::Hearts, Some(25)).count, 10);
        assert_eq!(mobile_fast.field_budget(ParticleKind::Sparkles, Some(100)).count, 20);
    }

    #[test]
    fn same_classification_gives_the_same_profile() {
        assert_eq!(profile(true, false), profile(true, false));
    }

    #[test]
    fn css_variables_carry_the_animation_timings() {
        let css = profile(true, true).animation.css_variables();
        assert!(css.starts_with("--page-enter:0.8s;"));
        assert!(css.contains("--hover-lift:5px"));
        assert!(css.contains("--pulse-duration:3s"));
    }
}
