//! # Configuration
//!
//! ## Overview
//!
//! [SubmitConfig] collects every option that controls a binding, apart from the submit callback
//! itself. Each field has a sensible default, so hosts only need to set what they care about.
//!
//! Configuration can be built programmatically, or decoded from JSON:
//!
//! ```
//! use chat_submit::config::{EnabledState, SubmitConfig, SubmitMode};
//!
//! let config = SubmitConfig::from_json(r#"{"mode": "enter", "enabled": "non-mobile"}"#).unwrap();
//!
//! assert_eq!(config.mode, SubmitMode::EnterSubmits);
//! assert_eq!(config.enabled, EnabledState::OnNonTouchPrimary);
//! assert_eq!(config.allow_empty_submit, false);
//! ```
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ConfigResult};
use crate::platform::PlatformSummary;

/// Which gesture submits.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum SubmitMode {
    /// Enter submits, and Shift+Enter inserts a line break.
    #[serde(rename = "enter")]
    EnterSubmits,

    /// The platform modifier plus Enter submits, and Enter inserts a line break.
    #[default]
    #[serde(rename = "mod-enter")]
    ModifierEnterSubmits,
}

impl FromStr for SubmitMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s {
            "enter" => Ok(SubmitMode::EnterSubmits),
            "mod-enter" => Ok(SubmitMode::ModifierEnterSubmits),
            _ => Err(ConfigError::invalid("mode", s)),
        }
    }
}

impl fmt::Display for SubmitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitMode::EnterSubmits => write!(f, "enter"),
            SubmitMode::ModifierEnterSubmits => write!(f, "mod-enter"),
        }
    }
}

/// Which modifier key the caller wants to use for [SubmitMode::ModifierEnterSubmits].
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierPreference {
    /// Command on Apple devices, and Control everywhere else.
    #[default]
    Auto,

    /// Always use Meta.
    Meta,

    /// Always use Control.
    Ctrl,
}

impl FromStr for ModifierPreference {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s {
            "auto" => Ok(ModifierPreference::Auto),
            "meta" => Ok(ModifierPreference::Meta),
            "ctrl" => Ok(ModifierPreference::Ctrl),
            _ => Err(ConfigError::invalid("modKey", s)),
        }
    }
}

impl fmt::Display for ModifierPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierPreference::Auto => write!(f, "auto"),
            ModifierPreference::Meta => write!(f, "meta"),
            ModifierPreference::Ctrl => write!(f, "ctrl"),
        }
    }
}

/// When keystroke gating should run.
///
/// In JSON this is either a boolean or the string `"non-mobile"`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "EnabledRepr", into = "EnabledRepr")]
pub enum EnabledState {
    /// Always gate keystrokes.
    AlwaysOn,

    /// Never gate keystrokes. Manual submission still works.
    AlwaysOff,

    /// Gate keystrokes unless the device is touch-primary.
    ///
    /// While the platform is unknown this counts as enabled.
    #[default]
    OnNonTouchPrimary,
}

impl EnabledState {
    /// Whether gating is in effect for the given platform.
    pub fn is_enabled(&self, platform: Option<&PlatformSummary>) -> bool {
        match self {
            EnabledState::AlwaysOn => true,
            EnabledState::AlwaysOff => false,
            EnabledState::OnNonTouchPrimary => {
                platform.map(|p| !p.is_touch_primary).unwrap_or(true)
            },
        }
    }
}

impl FromStr for EnabledState {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s {
            "true" => Ok(EnabledState::AlwaysOn),
            "false" => Ok(EnabledState::AlwaysOff),
            "non-mobile" => Ok(EnabledState::OnNonTouchPrimary),
            _ => Err(ConfigError::invalid("enabled", s)),
        }
    }
}

impl fmt::Display for EnabledState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnabledState::AlwaysOn => write!(f, "true"),
            EnabledState::AlwaysOff => write!(f, "false"),
            EnabledState::OnNonTouchPrimary => write!(f, "non-mobile"),
        }
    }
}

impl From<bool> for EnabledState {
    fn from(enabled: bool) -> Self {
        if enabled {
            EnabledState::AlwaysOn
        } else {
            EnabledState::AlwaysOff
        }
    }
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(untagged)]
enum EnabledRepr {
    Flag(bool),
    Named(String),
}

impl TryFrom<EnabledRepr> for EnabledState {
    type Error = ConfigError;

    fn try_from(repr: EnabledRepr) -> ConfigResult<Self> {
        match repr {
            EnabledRepr::Flag(flag) => Ok(EnabledState::from(flag)),
            EnabledRepr::Named(name) => name.parse(),
        }
    }
}

impl From<EnabledState> for EnabledRepr {
    fn from(state: EnabledState) -> Self {
        match state {
            EnabledState::AlwaysOn => EnabledRepr::Flag(true),
            EnabledState::AlwaysOff => EnabledRepr::Flag(false),
            EnabledState::OnNonTouchPrimary => EnabledRepr::Named(state.to_string()),
        }
    }
}

/// How shortcut hint labels should be rendered.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutHintLabelStyle {
    /// Pick whichever of symbols or text reads most clearly on the platform.
    #[default]
    Auto,

    /// Prefer symbols like ⌘, ⇧ and ⏎ where the platform uses them.
    Symbols,

    /// Always use plain key names like Ctrl, Shift and Enter.
    Text,
}

impl FromStr for ShortcutHintLabelStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s {
            "auto" => Ok(ShortcutHintLabelStyle::Auto),
            "symbols" => Ok(ShortcutHintLabelStyle::Symbols),
            "text" => Ok(ShortcutHintLabelStyle::Text),
            _ => Err(ConfigError::invalid("shortcutHintLabelStyle", s)),
        }
    }
}

impl fmt::Display for ShortcutHintLabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutHintLabelStyle::Auto => write!(f, "auto"),
            ShortcutHintLabelStyle::Symbols => write!(f, "symbols"),
            ShortcutHintLabelStyle::Text => write!(f, "text"),
        }
    }
}

/// Options controlling a [ChatSubmit](crate::binding::ChatSubmit) binding.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SubmitConfig {
    /// Which gesture submits.
    pub mode: SubmitMode,

    /// Which modifier to use in [SubmitMode::ModifierEnterSubmits].
    pub mod_key: ModifierPreference,

    /// Whether empty or whitespace-only text may be submitted.
    pub allow_empty_submit: bool,

    /// Whether a gated submission also stops the key event from propagating.
    pub stop_propagation: bool,

    /// When keystroke gating runs.
    pub enabled: EnabledState,

    /// How shortcut hint labels are rendered.
    pub shortcut_hint_label_style: ShortcutHintLabelStyle,

    /// A platform summary known ahead of time, which avoids a period where it's unknown.
    pub platform_hint: Option<PlatformSummary>,
}

impl SubmitConfig {
    /// Decode a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set [SubmitConfig::mode].
    pub fn with_mode(mut self, mode: SubmitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set [SubmitConfig::mod_key].
    pub fn with_mod_key(mut self, mod_key: ModifierPreference) -> Self {
        self.mod_key = mod_key;
        self
    }

    /// Set [SubmitConfig::allow_empty_submit].
    pub fn with_allow_empty_submit(mut self, allow: bool) -> Self {
        self.allow_empty_submit = allow;
        self
    }

    /// Set [SubmitConfig::stop_propagation].
    pub fn with_stop_propagation(mut self, stop: bool) -> Self {
        self.stop_propagation = stop;
        self
    }

    /// Set [SubmitConfig::enabled].
    pub fn with_enabled(mut self, enabled: EnabledState) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set [SubmitConfig::shortcut_hint_label_style].
    pub fn with_label_style(mut self, style: ShortcutHintLabelStyle) -> Self {
        self.shortcut_hint_label_style = style;
        self
    }

    /// Set [SubmitConfig::platform_hint].
    pub fn with_platform_hint(mut self, hint: PlatformSummary) -> Self {
        self.platform_hint = Some(hint);
        self
    }
}
