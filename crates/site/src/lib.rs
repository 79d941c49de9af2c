mod config;
mod web_app;

pub use config::site_config;
pub use web_app::{InvitationEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
