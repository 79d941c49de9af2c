//! Shared layout, surface, typography, and control primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod content;
mod layout;

pub use content::{Badge, Button, Card, Heading, PageSection, Text};
pub use layout::{Cluster, Grid, Stack};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic surface variants for structural primitives.
pub enum SurfaceVariant {
    /// Primary surface.
    #[default]
    Standard,
    /// Secondary or muted surface.
    Muted,
    /// Festive highlighted surface.
    Festive,
}

impl SurfaceVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Muted => "muted",
            Self::Festive => "festive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic elevation levels for shared primitives.
pub enum Elevation {
    /// Flat surface.
    #[default]
    Flat,
    /// Raised surface.
    Raised,
    /// Glass overlay surface.
    Overlay,
}

impl Elevation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Raised => "raised",
            Self::Overlay => "overlay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Title text.
    Title,
    /// Decorative display text.
    Display,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Display => "display",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Secondary,
    /// Accent text.
    Accent,
    /// Gold highlight text.
    Gold,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Gold => "gold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    #[default]
    Md,
    /// Spacious padding.
    Lg,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    #[default]
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    #[default]
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Drops empty attribute values so the attribute is not rendered at all.
pub(crate) fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}
