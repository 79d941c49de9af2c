//! Shared host-service bundle injected into the invitation runtime.

use std::rc::Rc;

use crate::{
    environment::{EnvironmentProbe, StaticEnvironmentProbe},
    time::{Clock, SystemClock},
};

/// Runtime-selected host service bundle.
///
/// Environment-specific service selection happens before this bundle crosses into the runtime,
/// which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Viewport and device environment reader.
    pub environment: Rc<dyn EnvironmentProbe>,
    /// Wall-clock source for countdowns.
    pub clock: Rc<dyn Clock>,
}

impl HostServices {
    /// Bundles the given services.
    pub fn new(environment: Rc<dyn EnvironmentProbe>, clock: Rc<dyn Clock>) -> Self {
        Self { environment, clock }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::new(
            Rc::new(StaticEnvironmentProbe::default()),
            Rc::new(SystemClock),
        )
    }
}
