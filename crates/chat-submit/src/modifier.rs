//! # Modifier resolution
//!
//! Maps a [ModifierPreference] and what's known about the platform onto the concrete modifier
//! key that has to be held with Enter in [SubmitMode::ModifierEnterSubmits].
//!
//! [SubmitMode::ModifierEnterSubmits]: crate::config::SubmitMode::ModifierEnterSubmits
use crate::config::ModifierPreference;
use crate::key::Modifiers;
use crate::platform::PlatformSummary;

/// A concrete modifier key.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ModKey {
    /// Meta (Command on Apple devices).
    Meta,

    /// Control.
    Ctrl,
}

impl ModKey {
    /// Whether this key is among the held modifiers.
    pub fn is_held(&self, modifiers: Modifiers) -> bool {
        match self {
            ModKey::Meta => modifiers.contains(Modifiers::META),
            ModKey::Ctrl => modifiers.contains(Modifiers::CTRL),
        }
    }
}

/// The modifier in effect for a binding.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ResolvedModifier {
    /// Meta (Command on Apple devices).
    Meta,

    /// Control.
    Ctrl,

    /// The preference is [ModifierPreference::Auto] and the platform isn't known yet.
    Undetermined,
}

impl ResolvedModifier {
    /// Resolve a preference against the platform, if it's known.
    pub fn resolve(pref: ModifierPreference, platform: Option<&PlatformSummary>) -> Self {
        match (pref, platform) {
            (ModifierPreference::Meta, _) => ResolvedModifier::Meta,
            (ModifierPreference::Ctrl, _) => ResolvedModifier::Ctrl,
            (ModifierPreference::Auto, Some(p)) if p.is_apple_device => ResolvedModifier::Meta,
            (ModifierPreference::Auto, Some(_)) => ResolvedModifier::Ctrl,
            (ModifierPreference::Auto, None) => ResolvedModifier::Undetermined,
        }
    }

    /// The concrete key, unless it's undetermined.
    pub fn key(&self) -> Option<ModKey> {
        match self {
            ResolvedModifier::Meta => Some(ModKey::Meta),
            ResolvedModifier::Ctrl => Some(ModKey::Ctrl),
            ResolvedModifier::Undetermined => None,
        }
    }

    /// Whether the resolved key is held, or `None` if it's undetermined.
    pub fn is_pressed(&self, modifiers: Modifiers) -> Option<bool> {
        self.key().map(|key| key.is_held(modifiers))
    }
}
