//! # Terminal text area
//!
//! ## Overview
//!
//! [TerminalTextArea] is a minimal multi-line text buffer that reads [crossterm] events. It
//! implements the element traits from [chat_submit], so a [chat_submit::ChatSubmit] binding can
//! control it.
//!
//! Each key press is delivered in two stages, like in a browser: first as a [Signal] to the
//! listeners registered on the text area, and then to the key handlers in the installed
//! [TextareaProps]. If no handler prevents the default action, the text area edits its buffer.
//!
//! Terminals don't report input method composition. Hosts that learn about it some other way
//! can forward it with [TerminalTextArea::dispatch].
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossterm::event::{Event, KeyCode, KeyModifiers};
use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use chat_submit::{
    Cancellable,
    EventTarget,
    KeyDownEvent,
    Listener,
    ListenerId,
    ListenerSet,
    Signal,
    SignalKind,
    TextInput,
    TextareaProps,
};

use crate::key::TerminalKey;

/// What happened to an event delivered to a [TerminalTextArea].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EventOutcome {
    /// Whether a handler prevented the text area's default action.
    pub default_prevented: bool,

    /// Whether a handler asked for the event not to reach any enclosing widgets.
    pub propagation_stopped: bool,
}

/// A text buffer that can be edited with terminal key events.
#[derive(Debug, Default)]
pub struct TerminalTextArea {
    text: RefCell<String>,
    disabled: Cell<bool>,
    read_only: Cell<bool>,
    listeners: ListenerSet,
}

impl TerminalTextArea {
    /// Create an empty text area.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Create a text area containing `text`.
    pub fn with_text<T: Into<String>>(text: T) -> Rc<Self> {
        let area = Self::default();
        area.text.replace(text.into());

        Rc::new(area)
    }

    /// A copy of the current text.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Replace the current text.
    pub fn set_text<T: Into<String>>(&self, text: T) {
        self.text.replace(text.into());
    }

    /// Remove all text.
    pub fn clear(&self) {
        self.text.borrow_mut().clear();
    }

    /// Enable or disable the text area.
    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    /// Make the text area read-only, or writable again.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// Deliver a low-level signal to the registered listeners.
    pub fn dispatch(&self, signal: &Signal) {
        self.listeners.dispatch(signal);
    }

    /// Process a terminal event.
    pub fn handle_event(self: &Rc<Self>, props: &TextareaProps<Self>, event: &Event) -> EventOutcome {
        match event {
            Event::Key(ke) => {
                let key = TerminalKey::from(*ke);

                self.dispatch(&key.signal());

                if key.is_release() {
                    return EventOutcome::default();
                }

                let mut ev = KeyDownEvent::new(key.input().clone(), self.clone());
                props.key_down(&mut ev);

                let outcome = EventOutcome {
                    default_prevented: ev.is_default_prevented(),
                    propagation_stopped: ev.is_propagation_stopped(),
                };

                if !outcome.default_prevented {
                    self.edit(ke.code, ke.modifiers);
                }

                return outcome;
            },
            Event::Paste(text) => {
                if self.is_editable() {
                    self.text.borrow_mut().push_str(text);
                }

                return EventOutcome::default();
            },
            _ => {
                return EventOutcome::default();
            },
        }
    }

    fn edit(&self, code: KeyCode, modifiers: KeyModifiers) {
        if !self.is_editable() {
            return;
        }

        let mut text = self.text.borrow_mut();
        let plain = (modifiers - KeyModifiers::SHIFT).is_empty();

        match code {
            KeyCode::Enter => {
                text.push('\n');
            },
            KeyCode::Char(c) if plain => {
                text.push(c);
            },
            KeyCode::Backspace => {
                let last = text.grapheme_indices(true).next_back().map(|(idx, _)| idx);

                if let Some(idx) = last {
                    text.truncate(idx);
                }
            },
            _ => {
                trace!(?code, "no default action");
            },
        }
    }
}

impl TextInput for TerminalTextArea {
    fn value(&self) -> String {
        self.text()
    }

    fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    fn is_read_only(&self) -> bool {
        self.read_only.get()
    }
}

impl EventTarget for TerminalTextArea {
    fn add_listener(&self, kind: SignalKind, listener: Listener) -> ListenerId {
        self.listeners.add(kind, listener)
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.remove(id);
    }
}
