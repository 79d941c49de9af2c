//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Non-wasm builds compile the same API with deterministic fallbacks so the runtime crates and
//! their tests build on the host toolchain.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete host-service factory for runtime wiring.
pub mod adapters;
pub mod environment;
pub mod navigation;
pub mod time;
pub mod visibility;

pub use adapters::build_host_services;
pub use environment::WebEnvironmentProbe;
pub use navigation::{current_query_string, scroll_to_section};
pub use time::WebClock;
pub use visibility::{watch_first_visibility, VisibilityWatch};
