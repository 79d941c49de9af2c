//! Responsive variant toggle and its query-string override.

use serde::{Deserialize, Serialize};

/// User-selected responsive variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantOverride {
    /// Follow the detected device classification.
    #[default]
    Auto,
    /// Force the mobile presentation.
    Mobile,
    /// Force the desktop presentation.
    Desktop,
}

impl VariantOverride {
    /// Stable query-string token.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }

    /// Label shown on the header toggle.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Mobile => "Mobile",
            Self::Desktop => "Desktop",
        }
    }

    /// Next value in the toggle cycle.
    pub const fn next(self) -> Self {
        match self {
            Self::Auto => Self::Mobile,
            Self::Mobile => Self::Desktop,
            Self::Desktop => Self::Auto,
        }
    }

    /// Parses a query-string token.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "auto" => Some(Self::Auto),
            "mobile" => Some(Self::Mobile),
            "desktop" => Some(Self::Desktop),
            _ => None,
        }
    }
}

/// Reads the `variant` parameter from a query string such as `?variant=mobile`.
///
/// Returns `None` when the parameter is absent or unrecognized.
pub fn parse_variant_from_query(query: &str) -> Option<VariantOverride> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key == "variant").then_some(value)
        })
        .filter_map(VariantOverride::parse)
        .last()
}
