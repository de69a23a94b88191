//! # Terminal keys
//!
//! ## Overview
//!
//! Conversions from [crossterm] key events into the [KeyInput] and [Signal] values that
//! [chat_submit] works with.
//!
//! Most terminals can't tell Enter apart from Ctrl+Enter or Shift+Enter, and never report key
//! releases or repeats. Hosts that need these should call [crate::enable_enhanced_keys] first.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use chat_submit::{Key, KeyInput, Modifiers, Signal};

/// A key event read from a terminal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TerminalKey {
    input: KeyInput,
    kind: KeyEventKind,
}

impl TerminalKey {
    pub(crate) fn new(code: KeyCode, mut modifiers: KeyModifiers, kind: KeyEventKind) -> Self {
        if let KeyCode::Char(_) = code {
            // Some terminals include SHIFT for characters like ':' and '?', and some don't.
            modifiers -= KeyModifiers::SHIFT;
        }

        let mut input = KeyInput::new(convert_code(code), convert_modifiers(modifiers));
        input.repeat = kind == KeyEventKind::Repeat;

        TerminalKey { input, kind }
    }

    /// The key, as understood by the submit gate.
    pub fn input(&self) -> &KeyInput {
        &self.input
    }

    /// Whether this event reports the key being let go.
    pub fn is_release(&self) -> bool {
        self.kind == KeyEventKind::Release
    }

    /// The low-level signal for this event.
    pub fn signal(&self) -> Signal {
        if self.is_release() {
            Signal::KeyUp(self.input.clone())
        } else {
            Signal::KeyDown(self.input.clone())
        }
    }
}

impl From<KeyEvent> for TerminalKey {
    fn from(ke: KeyEvent) -> Self {
        TerminalKey::new(ke.code, ke.modifiers, ke.kind)
    }
}

impl From<KeyCode> for TerminalKey {
    fn from(code: KeyCode) -> Self {
        TerminalKey::new(code, KeyModifiers::NONE, KeyEventKind::Press)
    }
}

impl From<TerminalKey> for KeyInput {
    fn from(key: TerminalKey) -> Self {
        key.input
    }
}

fn convert_modifiers(modifiers: KeyModifiers) -> Modifiers {
    let mut res = Modifiers::empty();

    if modifiers.contains(KeyModifiers::SHIFT) {
        res |= Modifiers::SHIFT;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        res |= Modifiers::CTRL;
    }

    if modifiers.contains(KeyModifiers::ALT) {
        res |= Modifiers::ALT;
    }

    // Terminals report the Command and Windows keys as SUPER, and some report them as META.
    if modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META) {
        res |= Modifiers::META;
    }

    return res;
}

fn convert_code(code: KeyCode) -> Key {
    let name = match code {
        KeyCode::Enter => return Key::Enter,
        KeyCode::Char(c) => return Key::Char(c),
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Esc => "Escape",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::F(n) => return Key::Named(format!("F{n}")),
        other => return Key::Named(format!("{other:?}")),
    };

    Key::Named(name.to_string())
}
