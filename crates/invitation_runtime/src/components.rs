//! Page composition for the invitation.
//!
//! Every section is one component that reads the render profile from context; there are no
//! separate desktop and mobile component trees.

mod chrome;
mod countdown;
mod particles;
mod reveal;
mod sections;
mod splash;

use leptos::*;

pub use chrome::{Footer, Header};
pub use countdown::CountdownPanel;
pub use particles::ParticleField;
pub use sections::{Events, Family, Hero, LoveStory, Venue};
pub use splash::{Splash, SplashGate};

use crate::runtime_context::use_invitation_runtime;

/// Section anchors in page order, with their navigation labels.
pub(crate) const SECTION_NAV: [(&str, &str); 5] = [
    ("hero", "Home"),
    ("story", "Our Story"),
    ("events", "Events"),
    ("family", "Family"),
    ("venue", "Venue"),
];

#[component]
/// Root of the invitation page.
///
/// Exposes the current classification and animation timings to the stylesheet through `data-*`
/// attributes and CSS custom properties on the root element.
pub fn InvitationShell() -> impl IntoView {
    let runtime = use_invitation_runtime();
    let profile = runtime.profile;

    view! {
        <SplashGate>
            <div
                class="invitation-root"
                data-device=move || profile.with(|p| p.device.token())
                data-quality=move || profile.with(|p| p.quality.token())
                data-hover-effects=move || profile.with(|p| p.animation.hover_effects.to_string())
                data-animated=move || profile.with(|p| p.animation.loop_background.to_string())
                style=move || profile.with(|p| p.animation.css_variables())
            >
                <Header />
                <main class="invitation-main">
                    <Hero />
                    <LoveStory />
                    <Events />
                    <Family />
                    <Venue />
                </main>
                <Footer />
            </div>
        </SplashGate>
    }
}
