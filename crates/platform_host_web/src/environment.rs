//! Viewport and navigator probe for browser hosts.

use platform_host::{EnvironmentProbe, EnvironmentSnapshot};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
/// Reads `window.innerWidth`/`innerHeight` and `navigator` hints on every call.
pub struct WebEnvironmentProbe;

impl EnvironmentProbe for WebEnvironmentProbe {
    fn snapshot(&self) -> EnvironmentSnapshot {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let fallback = EnvironmentSnapshot::default();
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .and_then(viewport_dimension)
                    .unwrap_or(fallback.viewport_width);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .and_then(viewport_dimension)
                    .unwrap_or(fallback.viewport_height);

                let navigator = window.navigator();
                let user_agent = navigator.user_agent().unwrap_or_default();
                let cores = core_count_hint(navigator.hardware_concurrency());
                // `deviceMemory` is Chromium-only and absent from `web-sys`.
                let memory = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
                    .ok()
                    .and_then(|value| value.as_f64())
                    .and_then(memory_hint);

                return EnvironmentSnapshot::new(width, height, user_agent)
                    .with_hardware(cores, memory);
            }
        }

        EnvironmentSnapshot::default()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn viewport_dimension(raw: f64) -> Option<u32> {
    (raw.is_finite() && raw >= 0.0).then(|| raw.round().min(f64::from(u32::MAX)) as u32)
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn core_count_hint(raw: f64) -> Option<u32> {
    (raw.is_finite() && raw >= 1.0).then(|| raw as u32)
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn memory_hint(raw: f64) -> Option<f64> {
    (raw.is_finite() && raw > 0.0).then_some(raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn non_browser_builds_report_the_desktop_fallback() {
        let snapshot = WebEnvironmentProbe.snapshot();
        assert_eq!(snapshot, EnvironmentSnapshot::default());
        assert_eq!(snapshot.viewport_width, 1024);
    }

    #[test]
    fn rejects_unusable_navigator_hints() {
        assert_eq!(core_count_hint(0.0), None);
        assert_eq!(core_count_hint(f64::NAN), None);
        assert_eq!(core_count_hint(8.0), Some(8));
        assert_eq!(memory_hint(0.0), None);
        assert_eq!(memory_hint(0.5), Some(0.5));
    }

    #[test]
    fn rounds_fractional_viewport_sizes() {
        assert_eq!(viewport_dimension(767.6), Some(768));
        assert_eq!(viewport_dimension(-1.0), None);
        assert_eq!(viewport_dimension(f64::INFINITY), None);
    }
}
