//! Device-adaptive classification.

use platform_host::EnvironmentSnapshot;
use serde::{Deserialize, Serialize};

use crate::variant::VariantOverride;

/// Widths at or below this many logical pixels classify as mobile.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Coarse device class used to scale rendering cost.
pub struct DeviceClassification {
    /// Small viewport or mobile user agent.
    pub is_mobile: bool,
    /// Rendering capability is likely constrained.
    pub is_low_performance: bool,
    /// Hardware hints alone report a constrained device.
    ///
    /// This is the part of `is_low_performance` not implied by the mobile heuristic.
    #[serde(default)]
    pub is_hardware_constrained: bool,
}

impl DeviceClassification {
    /// Desktop-class device with no constraints.
    pub const DESKTOP: Self = Self {
        is_mobile: false,
        is_low_performance: false,
        is_hardware_constrained: false,
    };

    /// Stable token for `data-*` attributes.
    pub const fn token(self) -> &'static str {
        match (self.is_mobile, self.is_low_performance) {
            (true, _) => "mobile",
            (false, true) => "desktop-constrained",
            (false, false) => "desktop",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Thresholds and user-agent tokens behind the classification.
///
/// User-agent sniffing is inherently approximate, so every threshold is configuration.
pub struct DevicePolicy {
    /// Inclusive mobile viewport breakpoint in logical pixels.
    pub mobile_breakpoint_px: u32,
    /// Lower-case operating-system tokens identifying mobile platforms.
    pub mobile_os_tokens: Vec<String>,
    /// Lower-case form-factor tokens that must accompany an OS token.
    pub mobile_form_tokens: Vec<String>,
    /// Core counts at or below this value are constrained.
    pub low_core_threshold: u32,
    /// Device memory (GiB) at or below this value is constrained.
    pub low_memory_gb: f64,
}

impl Default for DevicePolicy {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            mobile_os_tokens: ["android", "iphone", "ipad", "ipod"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            mobile_form_tokens: ["mobi", "mobile"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            low_core_threshold: 2,
            low_memory_gb: 2.0,
        }
    }
}

impl DevicePolicy {
    /// Classifies a freshly read environment snapshot.
    pub fn classify(&self, env: &EnvironmentSnapshot) -> DeviceClassification {
        let is_mobile = self.is_small_viewport(env.viewport_width)
            || self.is_mobile_user_agent(&env.user_agent);
        let is_hardware_constrained = self.is_hardware_constrained(env);
        DeviceClassification {
            is_mobile,
            is_low_performance: is_mobile || is_hardware_constrained,
            is_hardware_constrained,
        }
    }

    /// Classifies `env`, honoring a forced responsive variant.
    pub fn classify_with(
        &self,
        env: &EnvironmentSnapshot,
        variant: VariantOverride,
    ) -> DeviceClassification {
        match variant {
            VariantOverride::Auto => self.classify(env),
            VariantOverride::Mobile => DeviceClassification {
                is_mobile: true,
                is_low_performance: true,
                is_hardware_constrained: self.is_hardware_constrained(env),
            },
            VariantOverride::Desktop => {
                let is_hardware_constrained = self.is_hardware_constrained(env);
                DeviceClassification {
                    is_mobile: false,
                    is_low_performance: is_hardware_constrained,
                    is_hardware_constrained,
                }
            }
        }
    }

    /// Whether `width` is at or below the mobile breakpoint.
    pub fn is_small_viewport(&self, width: u32) -> bool {
        width <= self.mobile_breakpoint_px
    }

    /// Whether `user_agent` names a mobile OS together with a mobile form factor.
    pub fn is_mobile_user_agent(&self, user_agent: &str) -> bool {
        let user_agent = user_agent.to_ascii_lowercase();
        let has_token = |tokens: &[String]| tokens.iter().any(|token| user_agent.contains(token));
        has_token(&self.mobile_os_tokens) && has_token(&self.mobile_form_tokens)
    }

    /// Whether hardware hints, when present, report a constrained device.
    pub fn is_hardware_constrained(&self, env: &EnvironmentSnapshot) -> bool {
        let few_cores = env
            .hardware_concurrency
            .is_some_and(|cores| cores <= self.low_core_threshold);
        let little_memory = env
            .device_memory_gb
            .is_some_and(|memory| memory <= self.low_memory_gb);
        few_cores || little_memory
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Mobile Safari/537.36";
    const ANDROID_TABLET_UA: &str = "Mozilla/5.0 (Linux; Android 13; SM-X700) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
    const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

    fn env(width: u32, user_agent: &str) -> EnvironmentSnapshot {
        EnvironmentSnapshot::new(width, 800, user_agent)
    }

    #[test]
    fn phone_viewport_with_mobile_agent_is_mobile() {
        let class = DevicePolicy::default().classify(&env(375, IPHONE_UA));
        assert_eq!(
            class,
            DeviceClassification {
                is_mobile: true,
                is_low_performance: true,
                is_hardware_constrained: false,
            }
        );
    }

    #[test]
    fn wide_desktop_is_not_mobile() {
        let class = DevicePolicy::default().classify(&env(1920, DESKTOP_UA));
        assert_eq!(class, DeviceClassification::DESKTOP);
    }

    #[test]
    fn breakpoint_is_inclusive() {
        let policy = DevicePolicy::default();
        assert!(policy.classify(&env(768, DESKTOP_UA)).is_mobile);
        assert!(!policy.classify(&env(769, DESKTOP_UA)).is_mobile);
    }

    #[test]
    fn mobile_agent_on_a_wide_viewport_is_still_mobile() {
        let class = DevicePolicy::default().classify(&env(1280, ANDROID_UA));
        assert!(class.is_mobile);
        assert!(class.is_low_performance);
    }

    #[test]
    fn os_token_without_mobile_form_factor_is_not_sniffed_as_mobile() {
        let policy = DevicePolicy::default();
        assert!(!policy.is_mobile_user_agent(ANDROID_TABLET_UA));
        assert!(!policy.classify(&env(1280, ANDROID_TABLET_UA)).is_mobile);
    }

    #[test]
    fn missing_hardware_hints_fall_back_to_the_mobile_heuristic() {
        let policy = DevicePolicy::default();
        let desktop = env(1440, DESKTOP_UA);
        assert!(!policy.classify(&desktop).is_low_performance);

        let weak = desktop.clone().with_hardware(Some(2), None);
        assert_eq!(
            policy.classify(&weak),
            DeviceClassification {
                is_mobile: false,
                is_low_performance: true,
                is_hardware_constrained: true,
            }
        );

        let strong = desktop.with_hardware(Some(16), Some(8.0));
        assert_eq!(policy.classify(&strong), DeviceClassification::DESKTOP);
    }

    #[test]
    fn low_memory_alone_marks_low_performance() {
        let snapshot = env(1440, DESKTOP_UA).with_hardware(None, Some(1.0));
        assert!(DevicePolicy::default().classify(&snapshot).is_low_performance);
    }

    #[test]
    fn classification_follows_resizes() {
        let policy = DevicePolicy::default();
        let mut snapshot = env(1200, DESKTOP_UA);
        assert!(!policy.classify(&snapshot).is_mobile);
        snapshot.viewport_width = 600;
        assert!(policy.classify(&snapshot).is_mobile);
        snapshot.viewport_width = 1200;
        assert!(!policy.classify(&snapshot).is_mobile);
    }

    #[test]
    fn forced_variants_override_detection() {
        let policy = DevicePolicy::default();
        let desktop = env(1920, DESKTOP_UA);
        assert_eq!(
            policy.classify_with(&desktop, VariantOverride::Mobile),
            DeviceClassification {
                is_mobile: true,
                is_low_performance: true,
                is_hardware_constrained: false,
            }
        );

        let phone = env(375, IPHONE_UA);
        assert_eq!(
            policy.classify_with(&phone, VariantOverride::Desktop),
            DeviceClassification::DESKTOP
        );
        assert_eq!(
            policy.classify_with(&phone, VariantOverride::Auto),
            policy.classify(&phone)
        );
    }

    #[test]
    fn weak_phone_reports_its_hardware_constraint() {
        let phone = env(375, IPHONE_UA).with_hardware(Some(2), Some(1.0));
        let class = DevicePolicy::default().classify(&phone);
        assert!(class.is_mobile);
        assert!(class.is_low_performance);
        assert!(class.is_hardware_constrained);
    }

    #[test]
    fn thresholds_are_configurable() {
        let policy = DevicePolicy {
            mobile_breakpoint_px: 1024,
            ..DevicePolicy::default()
        };
        assert!(policy.classify(&env(1000, DESKTOP_UA)).is_mobile);
    }
}
