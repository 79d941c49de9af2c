//! Shared UI primitive library for the invitation pages.
//!
//! The crate owns reusable Leptos layout and content primitives and the stable `data-ui-*` DOM
//! contract consumed by the site stylesheet. Page sections compose these primitives instead of
//! emitting ad hoc wrapper markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Button, ButtonVariant, Card, Cluster, Elevation, Grid, Heading, LayoutAlign, LayoutGap,
    LayoutJustify, LayoutPadding, PageSection, Stack, SurfaceVariant, Text, TextRole, TextTone,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonVariant, Card, Cluster, Elevation, Grid, Heading, LayoutAlign,
        LayoutGap, LayoutJustify, LayoutPadding, PageSection, Stack, SurfaceVariant, Text,
        TextRole, TextTone,
    };
}
