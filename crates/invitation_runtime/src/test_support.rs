//! Fixtures shared by the runtime's unit tests.

use std::{cell::RefCell, rc::Rc};

use invitation_core::{InvitationConfig, VariantOverride};
use platform_host::{EnvironmentProbe, EnvironmentSnapshot, HostServices, ManualClock, TickScheduler};

use crate::runtime_context::InvitationRuntimeContext;

pub(crate) const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0";

/// Probe whose viewport width can be changed between reads.
#[derive(Clone)]
pub(crate) struct ResizableProbe(Rc<RefCell<EnvironmentSnapshot>>);

impl ResizableProbe {
    pub(crate) fn desktop() -> Self {
        Self(Rc::new(RefCell::new(EnvironmentSnapshot::new(
            1440, 900, DESKTOP_UA,
        ))))
    }

    pub(crate) fn resize(&self, width: u32) {
        self.0.borrow_mut().viewport_width = width;
    }
}

impl EnvironmentProbe for ResizableProbe {
    fn snapshot(&self) -> EnvironmentSnapshot {
        self.0.borrow().clone()
    }
}

pub(crate) fn runtime_with(
    probe: ResizableProbe,
    clock: ManualClock,
    scheduler: Rc<dyn TickScheduler>,
) -> InvitationRuntimeContext {
    let host = HostServices::new(Rc::new(probe), Rc::new(clock));
    InvitationRuntimeContext::new(
        InvitationConfig::default(),
        host,
        scheduler,
        VariantOverride::Auto,
    )
}
