use invitation_core::{particle_layout, ParticleKind};
use leptos::*;

use crate::runtime_context::use_invitation_runtime;

#[component]
/// Decorative particle layer sized by the current render profile.
///
/// `count` is the component's requested density before profile scaling. Mobile profiles thin
/// the layer out, and constrained hardware renders it empty.
pub fn ParticleField(
    kind: ParticleKind,
    #[prop(optional)] count: Option<usize>,
    #[prop(default = 1)] seed: u64,
) -> impl IntoView {
    let runtime = use_invitation_runtime();
    let sprites = create_memo(move |_| {
        runtime
            .profile
            .with(|profile| particle_layout(&profile.field_budget(kind, count), seed))
    });

    view! {
        <Show when=move || sprites.with(|sprites| !sprites.is_empty())>
            <div class="particle-field" data-particle-kind=kind.token() aria-hidden="true">
                {move || {
                    sprites
                        .get()
                        .into_iter()
                        .map(|sprite| {
                            view! {
                                <span class="particle" style=sprite.style()>
                                    {kind.glyph()}
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
