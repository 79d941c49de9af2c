use std::rc::Rc;

use platform_host::HostServices;

use crate::{WebClock, WebEnvironmentProbe};

/// Builds the browser host-service bundle injected into the invitation runtime.
pub fn build_host_services() -> HostServices {
    HostServices::new(Rc::new(WebEnvironmentProbe), Rc::new(WebClock))
}
