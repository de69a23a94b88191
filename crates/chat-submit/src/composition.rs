//! # Composition tracking
//!
//! ## Overview
//!
//! While an input method is composing text, Enter usually confirms a candidate rather than
//! ending the message. The [CompositionTracker] watches an element's low-level signals and keeps
//! a flag recording whether a composition is in progress.
//!
//! Engines disagree about when they report composition, so five signals feed the flag, and the
//! most recent one wins:
//!
//! | Signal                                         | Flag    |
//! |------------------------------------------------|---------|
//! | key down while composing, or the Process key   | `true`  |
//! | key up while not composing                     | `false` |
//! | composition start                              | `true`  |
//! | composition end                                | `false` |
//! | composition cancel                             | `false` |
//!
//! Only the tracker's own listeners write the flag. Everything else reads it through a
//! [CompositionReader].
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::element::{EventTarget, ListenerId};
use crate::key::{Key, Signal, SignalKind};

const OBSERVED: [SignalKind; 5] = [
    SignalKind::KeyDown,
    SignalKind::KeyUp,
    SignalKind::CompositionStart,
    SignalKind::CompositionEnd,
    SignalKind::CompositionCancel,
];

/// Compute the flag after observing `signal`.
pub fn next_state(composing: bool, signal: &Signal) -> bool {
    match signal {
        Signal::KeyDown(ke) if ke.is_composing || ke.key == Key::Process => true,
        Signal::KeyUp(ke) if !ke.is_composing => false,
        Signal::CompositionStart => true,
        Signal::CompositionEnd | Signal::CompositionCancel => false,
        _ => composing,
    }
}

/// Read-only access to a tracker's composition flag.
#[derive(Clone)]
pub struct CompositionReader {
    flag: Rc<Cell<bool>>,
}

impl CompositionReader {
    /// Whether a composition is currently in progress.
    pub fn get(&self) -> bool {
        self.flag.get()
    }
}

impl fmt::Debug for CompositionReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompositionReader").field(&self.get()).finish()
    }
}

struct Attachment<E: EventTarget> {
    target: Rc<E>,
    ids: Vec<ListenerId>,
}

/// Tracks input method composition on at most one element at a time.
pub struct CompositionTracker<E: EventTarget> {
    flag: Rc<Cell<bool>>,
    attachment: Option<Attachment<E>>,
}

impl<E: EventTarget> CompositionTracker<E> {
    /// Create a detached tracker.
    pub fn new() -> Self {
        CompositionTracker { flag: Rc::new(Cell::new(false)), attachment: None }
    }

    /// Get a reader for this tracker's flag.
    pub fn reader(&self) -> CompositionReader {
        CompositionReader { flag: self.flag.clone() }
    }

    /// Whether a composition is currently in progress.
    pub fn is_composing(&self) -> bool {
        self.flag.get()
    }

    /// The element currently being observed.
    pub fn target(&self) -> Option<&Rc<E>> {
        self.attachment.as_ref().map(|a| &a.target)
    }

    /// Whether the tracker is observing an element.
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Start observing `target`, detaching from any previous element first.
    ///
    /// Each attachment starts with the flag cleared.
    pub fn attach(&mut self, target: &Rc<E>) {
        self.detach();
        self.flag.set(false);

        let ids = OBSERVED
            .iter()
            .map(|kind| {
                let flag = self.flag.clone();
                let listener = Rc::new(move |signal: &Signal| {
                    let composing = next_state(flag.get(), signal);
                    trace!(?signal, composing, "composition signal");
                    flag.set(composing);
                });

                target.add_listener(*kind, listener)
            })
            .collect();

        debug!("composition listeners attached");
        self.attachment = Some(Attachment { target: target.clone(), ids });
    }

    /// Stop observing the current element, if there is one.
    ///
    /// The flag keeps its last value.
    pub fn detach(&mut self) {
        if let Some(Attachment { target, ids }) = self.attachment.take() {
            for id in ids {
                target.remove_listener(id);
            }

            debug!("composition listeners detached");
        }
    }
}

impl<E: EventTarget> Default for CompositionTracker<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EventTarget> Drop for CompositionTracker<E> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<E: EventTarget> fmt::Debug for CompositionTracker<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositionTracker")
            .field("composing", &self.is_composing())
            .field("attached", &self.is_attached())
            .finish()
    }
}
