//! Pure invitation domain: countdown engine, device-adaptive render policy, and site
//! configuration.
//!
//! Nothing here touches the DOM. Timers and environment reads go through the
//! [`platform_host`] contracts so every behavior can be driven deterministically in tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod countdown;
pub mod device;
pub mod particles;
pub mod render_policy;
pub mod variant;

pub use config::{
    ConfigError, CoupleInfo, EventInfo, FamilyInfo, InvitationConfig, SiteContent, StoryMilestone,
    TimingConfig,
};
pub use countdown::{
    compute_remaining, CountdownError, CountdownPhase, CountdownState, CountdownTarget,
    CountdownTicker, CountdownTimer, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};
pub use device::{DeviceClassification, DevicePolicy, DEFAULT_MOBILE_BREAKPOINT_PX};
pub use particles::{particle_layout, ParticleSprite};
pub use render_policy::{
    AnimationProfile, ParticleBaseline, ParticleBudget, ParticleKind, RenderProfile,
    RenderQuality,
};
pub use variant::{parse_variant_from_query, VariantOverride};
