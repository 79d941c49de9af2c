use std::{cell::RefCell, rc::Rc};

use invitation_core::{CountdownState, CountdownTarget, CountdownTicker};
use leptos::*;

use crate::runtime_context::{use_invitation_runtime, InvitationRuntimeContext};

const EXPIRED_MESSAGE: &str = "The celebration has begun!";

fn pad2(value: u64) -> String {
    format!("{value:02}")
}

/// Keeps `remaining` ticking toward `target` for the lifetime of the current owner.
///
/// The ticker is restarted whenever the profile's tick interval changes, continuing from the
/// state already on screen. It is released when the owner is disposed.
fn run_countdown(
    runtime: InvitationRuntimeContext,
    target: CountdownTarget,
    remaining: RwSignal<CountdownState>,
) {
    let tick_interval = create_memo(move |_| runtime.profile.with(|p| p.countdown_tick));
    let ticker: Rc<RefCell<Option<CountdownTicker>>> = Rc::default();

    {
        let ticker = Rc::clone(&ticker);
        create_effect(move |_| {
            let period = tick_interval.get();
            // Release the previous interval before registering the next one.
            ticker.borrow_mut().take();
            let shown = remaining.get_untracked();
            let started = runtime.scheduler.with_value(|scheduler| {
                CountdownTicker::resume(
                    scheduler.as_ref(),
                    runtime.clock(),
                    target,
                    shown,
                    period,
                    move |state| remaining.set(state),
                )
            });
            match started {
                Ok(next) => *ticker.borrow_mut() = Some(next),
                Err(err) => logging::warn!("countdown ticker failed to start: {err}"),
            }
        });
    }
    on_cleanup(move || {
        ticker.borrow_mut().take();
    });
}

#[component]
/// Live countdown to `target`.
///
/// The ticker re-evaluates at the profile's tick interval and is restarted when that interval
/// changes. It stops on its own once the target passes and is released when the panel unmounts.
pub fn CountdownPanel(target: CountdownTarget) -> impl IntoView {
    let runtime = use_invitation_runtime();
    let remaining = create_rw_signal(target.remaining_at(runtime.now_ms()));
    run_countdown(runtime, target, remaining);

    view! {
        <div
            class="countdown"
            role="timer"
            aria-live="off"
            data-phase=move || remaining.with(|state| state.phase().token())
        >
            {move || render_state(remaining.get())}
        </div>
    }
}

fn render_state(state: CountdownState) -> View {
    if state.is_expired {
        return view! { <p class="countdown-finished">{EXPIRED_MESSAGE}</p> }.into_view();
    }
    state
        .units()
        .into_iter()
        .enumerate()
        .map(|(index, (label, value))| {
            view! {
                <div class="countdown-unit" style=format!("--stagger-index:{index}")>
                    <span class="countdown-value">{pad2(value)}</span>
                    <span class="countdown-label">{label}</span>
                </div>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use platform_host::{ManualClock, ManualTickScheduler};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{runtime_with, ResizableProbe};

    #[test]
    fn fields_are_zero_padded_to_two_digits() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(59), "59");
        assert_eq!(pad2(365), "365");
    }

    #[test]
    fn resize_restarts_the_ticker_with_one_live_interval() {
        let _ = leptos::create_runtime();
        let clock = ManualClock::new(1_000);
        let scheduler = ManualTickScheduler::with_clock(clock.clone());
        let probe = ResizableProbe::desktop();
        let runtime = runtime_with(probe.clone(), clock, Rc::new(scheduler.clone()));
        let target = CountdownTarget::parse("2025-11-30T12:01:00", 0).expect("parse");

        let mount = as_child_of_current_owner(move |()| {
            let remaining = create_rw_signal(target.remaining_at(runtime.now_ms()));
            run_countdown(runtime, target, remaining);
            remaining
        });
        let (remaining, disposer) = mount(());
        assert_eq!(scheduler.pending(), 1);

        probe.resize(390);
        runtime.refresh_environment();
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_secs(4));
        assert_eq!(remaining.get_untracked(), target.remaining_at(5_000));
        assert_eq!(scheduler.pending(), 1);

        drop(disposer);
        assert_eq!(scheduler.pending(), 0);
    }
}
