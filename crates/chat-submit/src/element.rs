//! # Host elements
//!
//! ## Overview
//!
//! This crate doesn't own the text input it controls. Hosts describe their element through two
//! traits:
//!
//! - [TextInput], for reading its text and whether it currently accepts input
//! - [EventTarget], for registering listeners for low-level [Signal]s
//!
//! Any type implementing both is a [TextArea]. Hosts that don't already have a listener mechanism
//! can embed a [ListenerSet] and forward to it.
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::key::{Signal, SignalKind};
use crate::util::IdGenerator;

/// A callback invoked with each matching [Signal].
pub type Listener = Rc<dyn Fn(&Signal)>;

/// Identifies a registered [Listener] so that it can be removed later.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ListenerId(u64);

/// Read access to an element's text and state.
pub trait TextInput {
    /// The element's current text.
    fn value(&self) -> String;

    /// Whether the element is disabled.
    fn is_disabled(&self) -> bool {
        false
    }

    /// Whether the element is read-only.
    fn is_read_only(&self) -> bool {
        false
    }

    /// Whether the element is currently accepting input.
    fn is_editable(&self) -> bool {
        !self.is_disabled() && !self.is_read_only()
    }
}

/// An element that listeners can be attached to.
pub trait EventTarget {
    /// Register a listener for one kind of signal.
    fn add_listener(&self, kind: SignalKind, listener: Listener) -> ListenerId;

    /// Remove a previously registered listener. Unknown IDs are ignored.
    fn remove_listener(&self, id: ListenerId);
}

/// A text input that supports listeners.
pub trait TextArea: TextInput + EventTarget {}

impl<T> TextArea for T where T: TextInput + EventTarget + ?Sized {}

/// A registry of listeners that hosts can embed to implement [EventTarget].
#[derive(Default)]
pub struct ListenerSet {
    ids: RefCell<IdGenerator>,
    listeners: RefCell<Vec<(ListenerId, SignalKind, Listener)>>,
}

impl ListenerSet {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener, returning its identifier.
    pub fn add(&self, kind: SignalKind, listener: Listener) -> ListenerId {
        let next = self.ids.borrow_mut().next();
        let id = match next {
            Some(id) => ListenerId(id),
            None => self.unused_id(),
        };

        self.listeners.borrow_mut().push((id, kind, listener));

        return id;
    }

    fn unused_id(&self) -> ListenerId {
        let listeners = self.listeners.borrow();
        let mut id = 0;

        while listeners.iter().any(|(lid, _, _)| lid.0 == id) {
            id += 1;
        }

        ListenerId(id)
    }

    /// Whether a listener is currently registered.
    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|(lid, _, _)| *lid == id)
    }

    /// Remove a listener. Returns `false` if it wasn't registered.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();

        listeners.retain(|(lid, _, _)| *lid != id);

        return listeners.len() != before;
    }

    /// The number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// The number of listeners registered for one kind of signal.
    pub fn count(&self, kind: SignalKind) -> usize {
        self.listeners.borrow().iter().filter(|(_, k, _)| *k == kind).count()
    }

    /// Deliver a signal to every listener registered for its kind, in registration order.
    ///
    /// A listener removed by an earlier listener during the same dispatch is not called. Listeners
    /// added during a dispatch are first called on the next one.
    pub fn dispatch(&self, signal: &Signal) {
        let kind = signal.kind();
        let matching: Vec<(ListenerId, Listener)> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(id, _, l)| (*id, l.clone()))
            .collect();

        for (id, listener) in matching {
            if !self.contains(id) {
                continue;
            }

            listener(signal);
        }
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet").field("len", &self.len()).finish()
    }
}
