//! Viewport and device environment contracts.

use serde::{Deserialize, Serialize};

/// Default viewport width reported when the host exposes no window.
pub const FALLBACK_VIEWPORT_WIDTH: u32 = 1024;
/// Default viewport height reported when the host exposes no window.
pub const FALLBACK_VIEWPORT_HEIGHT: u32 = 768;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Raw environment facts read from the host at one instant.
pub struct EnvironmentSnapshot {
    /// Viewport width in logical pixels.
    pub viewport_width: u32,
    /// Viewport height in logical pixels.
    pub viewport_height: u32,
    /// Platform / user-agent identifier string.
    pub user_agent: String,
    /// Logical core count when the host exposes it.
    pub hardware_concurrency: Option<u32>,
    /// Approximate device memory in GiB when the host exposes it.
    pub device_memory_gb: Option<f64>,
}

impl Default for EnvironmentSnapshot {
    fn default() -> Self {
        Self {
            viewport_width: FALLBACK_VIEWPORT_WIDTH,
            viewport_height: FALLBACK_VIEWPORT_HEIGHT,
            user_agent: String::new(),
            hardware_concurrency: None,
            device_memory_gb: None,
        }
    }
}

impl EnvironmentSnapshot {
    /// Builds a snapshot with only viewport size and user agent known.
    pub fn new(viewport_width: u32, viewport_height: u32, user_agent: impl Into<String>) -> Self {
        Self {
            viewport_width,
            viewport_height,
            user_agent: user_agent.into(),
            hardware_concurrency: None,
            device_memory_gb: None,
        }
    }

    /// Returns a copy with hardware hints attached.
    pub fn with_hardware(mut self, cores: Option<u32>, memory_gb: Option<f64>) -> Self {
        self.hardware_concurrency = cores;
        self.device_memory_gb = memory_gb;
        self
    }
}

/// Host service that reads the current environment. Implementations must not cache.
pub trait EnvironmentProbe {
    /// Reads a fresh snapshot at call time.
    fn snapshot(&self) -> EnvironmentSnapshot;
}

#[derive(Debug, Clone, Default)]
/// Probe that always reports the same snapshot. Used by tests and non-browser builds.
pub struct StaticEnvironmentProbe {
    snapshot: EnvironmentSnapshot,
}

impl StaticEnvironmentProbe {
    /// Creates a probe reporting `snapshot`.
    pub fn new(snapshot: EnvironmentSnapshot) -> Self {
        Self { snapshot }
    }
}

impl EnvironmentProbe for StaticEnvironmentProbe {
    fn snapshot(&self) -> EnvironmentSnapshot {
        self.snapshot.clone()
    }
}
