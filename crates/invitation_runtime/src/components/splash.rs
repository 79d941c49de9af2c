use std::time::Duration;

use leptos::*;

use crate::runtime_context::{use_invitation_runtime, InvitationRuntimeContext};

#[component]
/// Splash view shown while the page boots.
pub fn Splash() -> impl IntoView {
    let runtime = use_invitation_runtime();
    let names = runtime
        .config
        .with_value(|config| config.content.couple.full_names());

    view! {
        <div class="splash" role="status" aria-live="polite">
            <span class="splash-heart" aria-hidden="true">"\u{2665}"</span>
            <h1 class="splash-names">{names}</h1>
            <p class="splash-caption">"Loading your invitation..."</p>
            <div class="splash-dots" aria-hidden="true">
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    }
}

/// Sets `ready` once the configured splash duration has elapsed.
///
/// The timer is cancelled if the current owner is disposed first. Without a timer the content
/// is marked ready immediately.
fn arm_splash_timer(runtime: InvitationRuntimeContext, ready: RwSignal<bool>) {
    let delay = Duration::from_millis(
        runtime
            .config
            .with_value(|config| config.timing.splash_duration_ms),
    );

    match runtime.schedule_after(delay, move || ready.set(true)) {
        Ok(task) => on_cleanup(move || task.cancel()),
        Err(err) => {
            logging::warn!("splash timer unavailable, mounting content immediately: {err}");
            ready.set(true);
        }
    }
}

#[component]
/// Shows [`Splash`] for the configured duration, then mounts `children`.
pub fn SplashGate(children: ChildrenFn) -> impl IntoView {
    let runtime = use_invitation_runtime();
    let ready = create_rw_signal(false);
    arm_splash_timer(runtime, ready);

    view! {
        <Show when=move || ready.get() fallback=|| view! { <Splash /> }>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_host::{ManualClock, ManualTickScheduler};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{runtime_with, ResizableProbe};

    #[test]
    fn content_is_released_after_the_splash_duration() {
        let _ = leptos::create_runtime();
        let scheduler = ManualTickScheduler::new();
        let runtime = runtime_with(
            ResizableProbe::desktop(),
            ManualClock::new(0),
            Rc::new(scheduler.clone()),
        );
        let ready = create_rw_signal(false);

        let mount = as_child_of_current_owner(move |()| arm_splash_timer(runtime, ready));
        let ((), _disposer) = mount(());
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(2_999));
        assert!(!ready.get_untracked());
        scheduler.advance(Duration::from_millis(1));
        assert!(ready.get_untracked());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn disposing_the_gate_cancels_the_splash_timer() {
        let _ = leptos::create_runtime();
        let scheduler = ManualTickScheduler::new();
        let runtime = runtime_with(
            ResizableProbe::desktop(),
            ManualClock::new(0),
            Rc::new(scheduler.clone()),
        );
        let ready = create_rw_signal(false);

        let mount = as_child_of_current_owner(move |()| arm_splash_timer(runtime, ready));
        let ((), disposer) = mount(());
        assert_eq!(scheduler.pending(), 1);

        drop(disposer);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(Duration::from_secs(10));
        assert!(!ready.get_untracked());
    }
}
