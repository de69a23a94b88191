//! # Platform capabilities
//!
//! ## Overview
//!
//! The shortcut that submits, and whether gating should run at all, depend on two facts about
//! the device: whether it's an Apple device (Command instead of Control), and whether it's
//! primarily a touch device (where on-screen keyboards make Enter-to-submit a poor fit).
//!
//! These facts may not be available when a binding is first created, so they're stored in a
//! [PlatformCell] that starts out empty, and accepts only the first value it's given.
//!
//! Detection helpers are provided for browser-like hosts ([PlatformSummary::from_user_agent] and
//! [PlatformSummary::from_client_hints]) and for native hosts ([PlatformSummary::from_target]).
use std::cell::OnceCell;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::DetectError;

/// The platform facts used to pick shortcuts and enable gating.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSummary {
    /// Whether this is an Apple device (macOS, iOS or iPadOS).
    pub is_apple_device: bool,

    /// Whether the device is primarily driven by touch.
    pub is_touch_primary: bool,
}

impl PlatformSummary {
    /// Create a new summary.
    pub fn new(is_apple_device: bool, is_touch_primary: bool) -> Self {
        PlatformSummary { is_apple_device, is_touch_primary }
    }

    /// Classify the platform this crate was compiled for.
    pub fn from_target() -> Self {
        let is_apple_device = cfg!(any(target_os = "macos", target_os = "ios"));
        let is_touch_primary = cfg!(any(target_os = "ios", target_os = "android"));

        PlatformSummary { is_apple_device, is_touch_primary }
    }

    /// Classify a platform using User-Agent Client Hints.
    pub fn from_client_hints(platform: &str, mobile: bool) -> Self {
        let platform = platform.to_lowercase();
        let is_apple_device = matches!(platform.as_str(), "macos" | "ios");

        PlatformSummary { is_apple_device, is_touch_primary: mobile }
    }

    /// Classify a platform from a `User-Agent` string using the default [UserAgentRules].
    ///
    /// Recent iPads report a desktop Safari user agent, so `has_touch_end` should be set when the
    /// host supports touch-end events, which lets them be told apart from Macs.
    pub fn from_user_agent(ua: &str, has_touch_end: bool) -> Result<Self, DetectError> {
        let rules = UserAgentRules::shared()?;

        return Ok(rules.classify(ua, has_touch_end));
    }
}

/// Everything a host may know about its environment when detecting the platform.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserAgentData {
    /// The `User-Agent` string, if there is one.
    pub user_agent: Option<String>,

    /// The `platform` and `mobile` values from User-Agent Client Hints, if available.
    pub client_hints: Option<(String, bool)>,

    /// Whether the host supports touch-end events.
    pub has_touch_end: bool,
}

impl UserAgentData {
    /// Classify this environment, preferring Client Hints over the `User-Agent` string.
    ///
    /// Returns `Ok(None)` when there's nothing to go on.
    pub fn detect(&self) -> Result<Option<PlatformSummary>, DetectError> {
        if let Some((platform, mobile)) = &self.client_hints {
            return Ok(Some(PlatformSummary::from_client_hints(platform, *mobile)));
        }

        match &self.user_agent {
            Some(ua) => Ok(Some(PlatformSummary::from_user_agent(ua, self.has_touch_end)?)),
            None => Ok(None),
        }
    }
}

/// Patterns used to classify `User-Agent` strings.
///
/// Patterns are matched against the lowercased user agent.
#[derive(Clone, Debug)]
pub struct UserAgentRules {
    ios: Regex,
    mac_like: Regex,
    mac: Regex,
    android: Regex,
}

impl UserAgentRules {
    /// Build the default rules.
    pub fn new() -> Result<Self, DetectError> {
        Self::with_patterns("iphone|ipad", "mac os", "mac os x|macintosh", "android")
    }

    /// The default rules, compiled on first use and then reused.
    pub fn shared() -> Result<&'static Self, DetectError> {
        static RULES: OnceLock<UserAgentRules> = OnceLock::new();

        if let Some(rules) = RULES.get() {
            return Ok(rules);
        }

        let rules = Self::new()?;

        return Ok(RULES.get_or_init(|| rules));
    }

    /// Build rules from custom patterns.
    ///
    /// - `ios` identifies iPhones and older iPads.
    /// - `mac_like` identifies desktop-looking Apple agents, which are treated as iOS when the
    ///   host supports touch-end events.
    /// - `mac` identifies Macs.
    /// - `android` identifies Android devices.
    pub fn with_patterns(
        ios: &str,
        mac_like: &str,
        mac: &str,
        android: &str,
    ) -> Result<Self, DetectError> {
        let rules = UserAgentRules {
            ios: Regex::new(ios)?,
            mac_like: Regex::new(mac_like)?,
            mac: Regex::new(mac)?,
            android: Regex::new(android)?,
        };

        return Ok(rules);
    }

    /// Classify a `User-Agent` string.
    pub fn classify(&self, ua: &str, has_touch_end: bool) -> PlatformSummary {
        let ua = ua.to_lowercase();

        let is_ios = self.ios.is_match(&ua) || (self.mac_like.is_match(&ua) && has_touch_end);
        let is_mac = self.mac.is_match(&ua);
        let is_apple_device = is_ios || is_mac;
        let is_touch_primary = is_ios || self.android.is_match(&ua);

        PlatformSummary { is_apple_device, is_touch_primary }
    }
}

/// A single-assignment cache for the [PlatformSummary] of one binding.
///
/// The first determination wins: once a value has been stored, later attempts are ignored even
/// if they disagree.
#[derive(Clone, Debug, Default)]
pub struct PlatformCell {
    summary: OnceCell<PlatformSummary>,
}

impl PlatformCell {
    /// Create a cell, optionally seeded with a known summary.
    pub fn new(hint: Option<PlatformSummary>) -> Self {
        let summary = OnceCell::new();

        if let Some(hint) = hint {
            let _ = summary.set(hint);
        }

        PlatformCell { summary }
    }

    /// The stored summary, if the platform has been determined.
    pub fn get(&self) -> Option<PlatformSummary> {
        self.summary.get().copied()
    }

    /// Whether the platform has been determined.
    pub fn is_resolved(&self) -> bool {
        self.summary.get().is_some()
    }

    /// Store a summary if none has been stored yet.
    ///
    /// Returns `true` if this call determined the platform.
    pub fn resolve(&self, summary: Option<PlatformSummary>) -> bool {
        let Some(summary) = summary else {
            return false;
        };

        match self.summary.set(summary) {
            Ok(()) => {
                debug!(?summary, "platform resolved");
                return true;
            },
            Err(ignored) => {
                debug!(kept = ?self.get(), ?ignored, "platform already resolved");
                return false;
            },
        }
    }

    /// Run `detect` only if the platform hasn't been determined yet, and store its result.
    ///
    /// Returns `true` if this call determined the platform.
    pub fn resolve_with<F>(&self, detect: F) -> bool
    where
        F: FnOnce() -> Option<PlatformSummary>,
    {
        if self.is_resolved() {
            return false;
        }

        self.resolve(detect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
                          AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148";
    const MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
                       (KHTML, like Gecko) Version/17.0 Safari/605.1.15";
    const ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
                           (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";
    const WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                           (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    #[test]
    fn test_user_agent_classify() {
        let rules = UserAgentRules::new().unwrap();

        assert_eq!(rules.classify(IPHONE, true), PlatformSummary::new(true, true));
        assert_eq!(rules.classify(MAC, false), PlatformSummary::new(true, false));
        assert_eq!(rules.classify(ANDROID, true), PlatformSummary::new(false, true));
        assert_eq!(rules.classify(WINDOWS, false), PlatformSummary::new(false, false));

        // iPadOS reports a Mac user agent, but supports touch.
        assert_eq!(rules.classify(MAC, true), PlatformSummary::new(true, true));
    }

    #[test]
    fn test_default_rules_compiled_once() {
        let first = UserAgentRules::shared().unwrap();
        let second = UserAgentRules::shared().unwrap();
        assert!(std::ptr::eq(first, second));

        assert_eq!(PlatformSummary::from_user_agent(MAC, false).unwrap(), PlatformSummary::new(true, false));
        assert_eq!(PlatformSummary::from_user_agent(WINDOWS, false).unwrap(), PlatformSummary::new(false, false));
    }

    #[test]
    fn test_bad_pattern() {
        let res = UserAgentRules::with_patterns("(", "mac os", "mac", "android");

        assert!(matches!(res, Err(DetectError::InvalidPattern(_))));
    }

    #[test]
    fn test_client_hints() {
        assert_eq!(PlatformSummary::from_client_hints("macOS", false), PlatformSummary::new(true, false));
        assert_eq!(PlatformSummary::from_client_hints("iOS", true), PlatformSummary::new(true, true));
        assert_eq!(PlatformSummary::from_client_hints("Android", true), PlatformSummary::new(false, true));
        assert_eq!(PlatformSummary::from_client_hints("Windows", false), PlatformSummary::new(false, false));
    }

    #[test]
    fn test_user_agent_data_prefers_hints() {
        let data = UserAgentData {
            user_agent: Some(WINDOWS.to_string()),
            client_hints: Some(("macOS".to_string(), false)),
            has_touch_end: false,
        };
        assert_eq!(data.detect().unwrap(), Some(PlatformSummary::new(true, false)));

        let data = UserAgentData { user_agent: Some(ANDROID.to_string()), ..Default::default() };
        assert_eq!(data.detect().unwrap(), Some(PlatformSummary::new(false, true)));

        assert_eq!(UserAgentData::default().detect().unwrap(), None);
    }

    #[test]
    fn test_first_determination_wins() {
        let cell = PlatformCell::new(None);
        assert_eq!(cell.get(), None);

        assert_eq!(cell.resolve(None), false);
        assert_eq!(cell.is_resolved(), false);

        assert_eq!(cell.resolve(Some(PlatformSummary::new(true, false))), true);
        assert_eq!(cell.resolve(Some(PlatformSummary::new(false, true))), false);
        assert_eq!(cell.get(), Some(PlatformSummary::new(true, false)));
    }

    #[test]
    fn test_hint_seeds_cell() {
        let cell = PlatformCell::new(Some(PlatformSummary::new(false, true)));
        let mut called = false;

        let changed = cell.resolve_with(|| {
            called = true;
            Some(PlatformSummary::new(true, false))
        });

        assert_eq!(changed, false);
        assert_eq!(called, false);
        assert_eq!(cell.get(), Some(PlatformSummary::new(false, true)));
    }
}
