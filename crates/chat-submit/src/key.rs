//! # Input keys
//!
//! ## Overview
//!
//! This module contains a host-neutral representation of the keys and low-level element signals
//! that the rest of this crate consumes. Hosts convert their native events into [KeyInput] and
//! [Signal] values before handing them over.
use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held while a key was pressed.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct Modifiers: u8 {
        /// The Shift key.
        const SHIFT = 0b0001;
        /// The Control key.
        const CTRL  = 0b0010;
        /// The Alt (or Option) key.
        const ALT   = 0b0100;
        /// The Meta key (Command on Apple platforms, Windows/Super elsewhere).
        const META  = 0b1000;
    }
}

/// The logical key carried by a key event.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Key {
    /// The Enter/Return key.
    Enter,

    /// Sentinel value reported while an input method is mediating the keystroke.
    Process,

    /// A key that produces a character.
    Char(char),

    /// Any other named key, such as `"Tab"` or `"Escape"`.
    Named(String),
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        let mut chars = name.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::Char(c),
            _ => {
                match name {
                    "Enter" => Key::Enter,
                    "Process" => Key::Process,
                    _ => Key::Named(name.to_string()),
                }
            },
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Enter => write!(f, "Enter"),
            Key::Process => write!(f, "Process"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Named(name) => write!(f, "{name}"),
        }
    }
}

/// A key event as reported by the host element.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct KeyInput {
    /// The logical key.
    pub key: Key,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// Whether this is an automatic repeat caused by holding the key down.
    pub repeat: bool,

    /// Whether the host reports that an input method composition is in progress.
    pub is_composing: bool,
}

impl KeyInput {
    /// Create a new key event that is neither repeating nor composing.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        KeyInput { key, modifiers, repeat: false, is_composing: false }
    }

    /// Mark this event as an automatic repeat.
    pub fn repeating(mut self) -> Self {
        self.repeat = true;
        self
    }

    /// Mark this event as occurring during an input method composition.
    pub fn composing(mut self) -> Self {
        self.is_composing = true;
        self
    }

    /// Whether this is the Enter key.
    pub fn is_enter(&self) -> bool {
        self.key == Key::Enter
    }

    /// Whether Shift is held.
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Whether Control is held.
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Whether Meta is held.
    pub fn meta(&self) -> bool {
        self.modifiers.contains(Modifiers::META)
    }
}

/// Low-level signals that an element emits and that listeners may observe.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Signal {
    /// A key was pressed.
    KeyDown(KeyInput),

    /// A key was released.
    KeyUp(KeyInput),

    /// An input method started composing text.
    CompositionStart,

    /// The text being composed changed.
    CompositionUpdate,

    /// An input method committed the composed text.
    CompositionEnd,

    /// An input method aborted the composition.
    CompositionCancel,
}

impl Signal {
    /// The kind of this signal, used for matching it against registered listeners.
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::KeyDown(_) => SignalKind::KeyDown,
            Signal::KeyUp(_) => SignalKind::KeyUp,
            Signal::CompositionStart => SignalKind::CompositionStart,
            Signal::CompositionUpdate => SignalKind::CompositionUpdate,
            Signal::CompositionEnd => SignalKind::CompositionEnd,
            Signal::CompositionCancel => SignalKind::CompositionCancel,
        }
    }
}

/// The kinds of [Signal] that a listener can be registered for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SignalKind {
    /// See [Signal::KeyDown].
    KeyDown,
    /// See [Signal::KeyUp].
    KeyUp,
    /// See [Signal::CompositionStart].
    CompositionStart,
    /// See [Signal::CompositionUpdate].
    CompositionUpdate,
    /// See [Signal::CompositionEnd].
    CompositionEnd,
    /// See [Signal::CompositionCancel].
    CompositionCancel,
}
