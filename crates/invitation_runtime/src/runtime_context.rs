//! Runtime provider and context wiring for the invitation page.
//!
//! The provider owns the environment snapshot and the responsive variant override; the device
//! classification and render profile are memos derived from them. UI composition stays in
//! [`crate::components`].

use std::{rc::Rc, time::Duration};

use invitation_core::{DeviceClassification, InvitationConfig, RenderProfile, VariantOverride};
use leptos::*;
use platform_host::{Clock, EnvironmentSnapshot, HostServices, ScheduledTask, TickScheduler};

use crate::host::LeptosTickScheduler;

#[derive(Clone, Copy)]
/// Leptos context for reading invitation runtime state.
pub struct InvitationRuntimeContext {
    /// Site configuration.
    pub config: StoredValue<InvitationConfig>,
    /// Host service bundle for environment and clock reads.
    pub host: StoredValue<HostServices>,
    /// Timer registration backend.
    pub scheduler: StoredValue<Rc<dyn TickScheduler>>,
    /// Last observed viewport and device hints.
    pub environment: RwSignal<EnvironmentSnapshot>,
    /// User-selected responsive variant.
    pub variant: RwSignal<VariantOverride>,
    /// Classification derived from `environment` and `variant`.
    pub device: Memo<DeviceClassification>,
    /// Render parameters derived from `device`.
    pub profile: Memo<RenderProfile>,
}

impl InvitationRuntimeContext {
    /// Builds the reactive state in the current reactive owner.
    pub fn new(
        config: InvitationConfig,
        host_services: HostServices,
        scheduler: Rc<dyn TickScheduler>,
        variant: VariantOverride,
    ) -> Self {
        let environment = create_rw_signal(host_services.environment.snapshot());
        let variant = create_rw_signal(variant);
        let config = store_value(config);
        let host = store_value(host_services);
        let scheduler = store_value(scheduler);

        let device = create_memo(move |_| {
            let snapshot = environment.get();
            let variant = variant.get();
            config.with_value(|config| config.device.classify_with(&snapshot, variant))
        });
        let profile = create_memo(move |_| {
            let device = device.get();
            config.with_value(|config| {
                RenderProfile::for_device(device, &config.particles, &config.timing)
            })
        });

        Self {
            config,
            host,
            scheduler,
            environment,
            variant,
            device,
            profile,
        }
    }

    /// Re-reads the environment. Unchanged snapshots do not notify subscribers.
    pub fn refresh_environment(&self) {
        let snapshot = self.host.with_value(|host| host.environment.snapshot());
        if self.environment.with_untracked(|current| *current != snapshot) {
            self.environment.set(snapshot);
        }
    }

    /// Advances the header toggle to the next responsive variant.
    pub fn cycle_variant(&self) {
        self.variant.update(|variant| *variant = variant.next());
    }

    /// Shared clock handle.
    pub fn clock(&self) -> Rc<dyn Clock> {
        self.host.with_value(|host| Rc::clone(&host.clock))
    }

    /// Current wall-clock time in Unix milliseconds.
    pub fn now_ms(&self) -> i64 {
        self.host.with_value(|host| host.clock.now_ms())
    }

    /// Schedules `fire` once after `delay`.
    ///
    /// # Errors
    ///
    /// Returns the scheduler's error when the timer cannot be registered.
    pub fn schedule_after(
        &self,
        delay: Duration,
        fire: impl FnOnce() + 'static,
    ) -> Result<ScheduledTask, String> {
        self.scheduler
            .with_value(|scheduler| scheduler.after(delay, Box::new(fire)))
    }

    /// Scrolls to a page section, clearing the fixed header on mobile.
    pub fn scroll_to_section(&self, section_id: &str) {
        let offset = self.profile.with_untracked(|profile| profile.scroll_offset_px);
        if !platform_host_web::scroll_to_section(section_id, offset) {
            logging::warn!("section `{section_id}` is not in the document");
        }
    }
}

fn install_environment_listeners(runtime: InvitationRuntimeContext) {
    let resize = window_event_listener(ev::resize, move |_| runtime.refresh_environment());
    on_cleanup(move || resize.remove());

    let orientation = window_event_listener_untyped("orientationchange", move |_| {
        runtime.refresh_environment()
    });
    on_cleanup(move || orientation.remove());
}

#[component]
/// Provides [`InvitationRuntimeContext`] to descendant components and tracks viewport changes.
pub fn InvitationProvider(
    /// Loaded site configuration.
    config: InvitationConfig,
    /// Host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Timer backend. Defaults to browser timers.
    #[prop(optional)]
    scheduler: Option<Rc<dyn TickScheduler>>,
    /// Initial responsive variant, usually read from the query string.
    #[prop(optional)]
    variant: VariantOverride,
    children: Children,
) -> impl IntoView {
    let scheduler = scheduler.unwrap_or_else(|| Rc::new(LeptosTickScheduler));
    let runtime = InvitationRuntimeContext::new(config, host_services, scheduler, variant);
    provide_context(runtime);

    install_environment_listeners(runtime);

    create_effect(move |previous: Option<DeviceClassification>| {
        let device = runtime.device.get();
        if previous.is_some_and(|previous| previous != device) {
            logging::log!("device classification changed to {}", device.token());
        }
        device
    });

    children().into_view()
}

/// Returns the current [`InvitationRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`InvitationProvider`].
pub fn use_invitation_runtime() -> InvitationRuntimeContext {
    use_context::<InvitationRuntimeContext>().expect("InvitationRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use invitation_core::RenderQuality;
    use platform_host::{ManualClock, ManualTickScheduler, NoopTickScheduler};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{runtime_with, ResizableProbe};

    fn runtime(probe: ResizableProbe, scheduler: Rc<dyn TickScheduler>) -> InvitationRuntimeContext {
        runtime_with(probe, ManualClock::new(1_000), scheduler)
    }

    #[test]
    fn profile_follows_viewport_resizes() {
        let _ = leptos::create_runtime();
        let probe = ResizableProbe::desktop();
        let runtime = runtime(probe.clone(), Rc::new(NoopTickScheduler));

        assert_eq!(
            runtime.device.get_untracked(),
            DeviceClassification::DESKTOP
        );
        assert_eq!(
            runtime.profile.with_untracked(|p| p.countdown_tick),
            Duration::from_millis(1_000)
        );

        probe.resize(390);
        runtime.refresh_environment();
        assert!(runtime.device.get_untracked().is_mobile);
        assert_eq!(
            runtime.profile.with_untracked(|p| p.countdown_tick),
            Duration::from_millis(2_000)
        );

        probe.resize(1440);
        runtime.refresh_environment();
        assert_eq!(
            runtime.device.get_untracked(),
            DeviceClassification::DESKTOP
        );
    }

    #[test]
    fn variant_toggle_forces_and_releases_the_mobile_profile() {
        let _ = leptos::create_runtime();
        let runtime = runtime(ResizableProbe::desktop(), Rc::new(NoopTickScheduler));

        runtime.cycle_variant();
        assert_eq!(runtime.variant.get_untracked(), VariantOverride::Mobile);
        assert!(runtime.device.get_untracked().is_mobile);
        assert_eq!(
            runtime.profile.with_untracked(|p| p.quality),
            RenderQuality::Medium
        );
        assert!(runtime.profile.with_untracked(|p| p.hearts.enabled));

        runtime.cycle_variant();
        runtime.cycle_variant();
        assert_eq!(runtime.variant.get_untracked(), VariantOverride::Auto);
        assert_eq!(
            runtime.device.get_untracked(),
            DeviceClassification::DESKTOP
        );
    }

    #[test]
    fn scheduled_callbacks_run_through_the_injected_scheduler() {
        let _ = leptos::create_runtime();
        let scheduler = ManualTickScheduler::new();
        let runtime = runtime(ResizableProbe::desktop(), Rc::new(scheduler.clone()));
        let fired = Rc::new(RefCell::new(false));

        let task = {
            let fired = Rc::clone(&fired);
            runtime
                .schedule_after(Duration::from_millis(3_000), move || {
                    *fired.borrow_mut() = true
                })
                .expect("schedule")
        };
        scheduler.advance(Duration::from_millis(2_999));
        assert!(!*fired.borrow());
        scheduler.advance(Duration::from_millis(1));
        assert!(*fired.borrow());
        drop(task);
    }

    #[test]
    fn clock_reads_come_from_the_host_bundle() {
        let _ = leptos::create_runtime();
        let runtime = runtime(ResizableProbe::desktop(), Rc::new(NoopTickScheduler));
        assert_eq!(runtime.now_ms(), 1_000);
        assert_eq!(runtime.clock().now_ms(), 1_000);
    }
}
