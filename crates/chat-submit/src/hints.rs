//! # Shortcut hints
//!
//! ## Overview
//!
//! Interfaces often tell users how to submit or break a line, e.g. with a placeholder like
//! "⌘ + ⏎ to submit". [shortcut_hint_labels] produces the key labels for both gestures, and notes
//! which one is the only way to achieve its action, since that's usually the one worth showing.
use serde::Serialize;

use crate::config::{ShortcutHintLabelStyle, SubmitMode};
use crate::modifier::{ModKey, ResolvedModifier};
use crate::platform::PlatformSummary;

/// The keys that can appear in a hint.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyLabel {
    /// Meta (Command on Apple devices).
    Meta,
    /// Control.
    Ctrl,
    /// Shift.
    Shift,
    /// Enter.
    Enter,
}

impl From<ModKey> for KeyLabel {
    fn from(key: ModKey) -> Self {
        match key {
            ModKey::Meta => KeyLabel::Meta,
            ModKey::Ctrl => KeyLabel::Ctrl,
        }
    }
}

/// Render one key for display.
pub fn beautify_key(key: KeyLabel, is_apple: bool, style: ShortcutHintLabelStyle) -> &'static str {
    let symbols = is_apple && style == ShortcutHintLabelStyle::Symbols;

    if style == ShortcutHintLabelStyle::Text {
        return match key {
            KeyLabel::Meta => "Meta",
            KeyLabel::Ctrl => "Ctrl",
            KeyLabel::Shift => "Shift",
            KeyLabel::Enter => "Enter",
        };
    }

    match key {
        KeyLabel::Meta if is_apple => "⌘",
        KeyLabel::Meta => "Win",
        KeyLabel::Ctrl if is_apple => "control",
        KeyLabel::Ctrl => "Ctrl",
        KeyLabel::Shift if symbols => "⇧",
        KeyLabel::Shift => "Shift",
        KeyLabel::Enter if symbols => "⏎",
        KeyLabel::Enter => "Enter",
    }
}

/// Render a sequence of keys for display.
pub fn beautify_keys(keys: &[KeyLabel], is_apple: bool, style: ShortcutHintLabelStyle) -> Vec<String> {
    keys.iter().map(|key| beautify_key(*key, is_apple, style).to_string()).collect()
}

/// The hint for a single gesture.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutHint {
    /// Whether this gesture is the only way to perform its action in the current mode.
    pub is_unique_behavior: bool,

    /// The rendered keys, in the order they should be shown.
    pub keys: Vec<String>,
}

/// Hints for submitting and for inserting a line break.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutHintLabels {
    /// How to submit.
    pub submit: ShortcutHint,

    /// How to insert a line break.
    pub line_break: ShortcutHint,
}

fn submit_keys(mode: SubmitMode, key: ModKey) -> Vec<KeyLabel> {
    match mode {
        SubmitMode::EnterSubmits => vec![KeyLabel::Enter],
        SubmitMode::ModifierEnterSubmits => vec![key.into(), KeyLabel::Enter],
    }
}

fn line_break_keys(mode: SubmitMode) -> Vec<KeyLabel> {
    match mode {
        SubmitMode::EnterSubmits => vec![KeyLabel::Shift, KeyLabel::Enter],
        SubmitMode::ModifierEnterSubmits => vec![KeyLabel::Enter],
    }
}

/// Build the hints for the current mode.
///
/// Returns `None` when the submit shortcut isn't known yet, or when the style needs to know the
/// platform and it hasn't been determined.
pub fn shortcut_hint_labels(
    mode: SubmitMode,
    modifier: ResolvedModifier,
    platform: Option<&PlatformSummary>,
    style: ShortcutHintLabelStyle,
) -> Option<ShortcutHintLabels> {
    let key = modifier.key()?;
    let is_apple = match style {
        ShortcutHintLabelStyle::Text => false,
        _ => platform?.is_apple_device,
    };

    let submit = ShortcutHint {
        is_unique_behavior: mode == SubmitMode::ModifierEnterSubmits,
        keys: beautify_keys(&submit_keys(mode, key), is_apple, style),
    };
    let line_break = ShortcutHint {
        is_unique_behavior: mode == SubmitMode::EnterSubmits,
        keys: beautify_keys(&line_break_keys(mode), is_apple, style),
    };

    Some(ShortcutHintLabels { submit, line_break })
}
