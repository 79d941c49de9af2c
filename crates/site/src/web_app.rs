use invitation_core::{parse_variant_from_query, VariantOverride};
use invitation_runtime::{InvitationProvider, InvitationShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::{build_host_services, current_query_string};

use crate::config::site_config;

const FALLBACK_TITLE: &str = "Wedding Invitation";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let (title, description) = match site_config() {
        Ok(config) => {
            let names = config.content.couple.full_names();
            (
                format!("{names} | {FALLBACK_TITLE}"),
                format!("Join {names} as they celebrate their wedding."),
            )
        }
        Err(_) => (
            FALLBACK_TITLE.to_string(),
            "An invitation to celebrate a wedding.".to_string(),
        ),
    };

    view! {
        <Title text=title />
        <Meta name="description" content=description />

        <Router>
            <Routes>
                <Route path="" view=InvitationEntry />
                <Route path="/*any" view=InvitationEntry />
            </Routes>
        </Router>
    }
}

#[component]
pub fn InvitationEntry() -> impl IntoView {
    match site_config() {
        Ok(config) => view! {
            <InvitationProvider
                config=config.clone()
                host_services=build_host_services()
                variant=initial_variant()
            >
                <InvitationShell />
            </InvitationProvider>
        }
        .into_view(),
        Err(err) => {
            logging::error!("invitation config failed to load: {err}");
            view! {
                <section class="invitation-unavailable">
                    <h1>{FALLBACK_TITLE}</h1>
                    <p>"The invitation could not be loaded. Please refresh the page."</p>
                </section>
            }
            .into_view()
        }
    }
}

/// Responsive variant requested through `?variant=`, else automatic detection.
fn initial_variant() -> VariantOverride {
    current_query_string()
        .as_deref()
        .and_then(parse_variant_from_query)
        .unwrap_or_default()
}
