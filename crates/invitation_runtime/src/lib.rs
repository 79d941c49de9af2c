//! Reactive runtime and page composition for the invitation site.
//!
//! [`InvitationProvider`] owns the environment signal, the responsive variant override, and the
//! derived device classification and render profile. [`InvitationShell`] composes the splash gate,
//! header, page sections, and footer on top of that context.

pub mod components;
mod host;
mod runtime_context;
#[cfg(test)]
mod test_support;

pub use components::{
    CountdownPanel, Events, Family, Footer, Header, Hero, InvitationShell, LoveStory,
    ParticleField, Splash, SplashGate, Venue,
};
pub use host::LeptosTickScheduler;
pub use runtime_context::{use_invitation_runtime, InvitationProvider, InvitationRuntimeContext};
