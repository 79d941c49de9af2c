//! One-shot viewport visibility notifications over `IntersectionObserver`.

/// Live observer registration. Dropping it disconnects the observer.
pub struct VisibilityWatch {
    #[cfg(target_arch = "wasm32")]
    observer: web_sys::IntersectionObserver,
    #[cfg(target_arch = "wasm32")]
    _callback: wasm_bindgen::closure::Closure<
        dyn FnMut(js_sys::Array, web_sys::IntersectionObserver),
    >,
}

impl VisibilityWatch {
    /// Stops observing now.
    pub fn disconnect(self) {
        drop(self);
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        self.observer.disconnect();
    }
}

/// Calls `on_visible` once, the first time `element` intersects the viewport by at least
/// `threshold` of its area. `root_margin` uses CSS margin syntax and shrinks or grows the
/// viewport used for the test.
///
/// The observer disconnects itself after firing. Returns `None` when the host has no
/// `IntersectionObserver`; callers should then treat the element as already visible.
pub fn watch_first_visibility(
    element: &web_sys::Element,
    threshold: f64,
    root_margin: &str,
    on_visible: impl FnOnce() + 'static,
) -> Option<VisibilityWatch> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast, JsValue};
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        let mut on_visible = Some(on_visible);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let entered = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .is_ok_and(|entry| entry.is_intersecting())
                });
                if !entered {
                    return;
                }
                observer.disconnect();
                if let Some(on_visible) = on_visible.take() {
                    on_visible();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.clamp(0.0, 1.0)));
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(element);
        Some(VisibilityWatch {
            observer,
            _callback: callback,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (element, threshold, root_margin, on_visible);
        None
    }
}
