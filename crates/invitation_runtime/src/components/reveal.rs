use std::{cell::RefCell, rc::Rc};

use leptos::{html::Section, *};
use platform_host_web::{watch_first_visibility, VisibilityWatch};

use crate::runtime_context::use_invitation_runtime;

/// Node ref and visibility flag for a section revealed on scroll.
///
/// The flag turns `true` the first time the section enters the viewport, using the profile's
/// reveal threshold and margin. The observer is disconnected when the owner is disposed.
pub(crate) fn use_section_reveal() -> (NodeRef<Section>, Signal<bool>) {
    let runtime = use_invitation_runtime();
    let section_ref = create_node_ref::<Section>();
    let visible = create_rw_signal(false);
    let watch: Rc<RefCell<Option<VisibilityWatch>>> = Rc::default();

    {
        let watch = Rc::clone(&watch);
        section_ref.on_load(move |section| {
            let (threshold, root_margin) = runtime
                .profile
                .with_untracked(|p| (p.reveal_threshold, p.reveal_root_margin));
            let started = watch_first_visibility(&section, threshold, root_margin, move || {
                visible.set(true)
            });
            hold_watch(&watch, started, visible);
        });
    }
    on_cleanup(move || {
        watch.borrow_mut().take();
    });

    (section_ref, visible.into())
}

fn hold_watch(
    slot: &RefCell<Option<VisibilityWatch>>,
    started: Option<VisibilityWatch>,
    visible: RwSignal<bool>,
) {
    match started {
        Some(watch) => *slot.borrow_mut() = Some(watch),
        None => visible.set(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_shown_at_once_without_an_observer() {
        let _ = leptos::create_runtime();
        let visible = create_rw_signal(false);
        let slot = RefCell::new(None);

        hold_watch(&slot, None, visible);

        assert!(visible.get_untracked());
        assert!(slot.borrow().is_none());
    }
}
