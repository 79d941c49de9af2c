//! Location and scrolling helpers.

/// Returns `window.location.search` including the leading `?`, when available.
pub fn current_query_string() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().search().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Smoothly scrolls the element with DOM id `section_id` into view.
///
/// A non-zero `header_offset_px` scrolls the window so the section starts below a fixed header of
/// that height; zero aligns the section to the top of the viewport. Returns `false` when the
/// element does not exist.
pub fn scroll_to_section(section_id: &str, header_offset_px: f64) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(element) = window
            .document()
            .and_then(|document| document.get_element_by_id(section_id))
        else {
            return false;
        };

        if header_offset_px > 0.0 {
            let top = element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
                - header_offset_px;
            let options = ScrollToOptions::new();
            options.set_top(top.max(0.0));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        } else {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        true
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (section_id, header_offset_px);
        false
    }
}
