//! # Handler and reference composition
//!
//! ## Overview
//!
//! A binding has to share its element with the caller: both want to handle key presses, and both
//! want to know which element is mounted.
//!
//! [HandlerChain] runs handlers in order, and stops as soon as one of them cancels the event. The
//! caller's handler goes first, so it can always opt out of the library's behaviour by
//! preventing the default action or stopping propagation.
//!
//! [ElementRef] is how the host tells interested parties about the mounted element. A
//! [RefSlot] simply stores it, while a callback can react to it and hand back a [Detach] to run
//! once the element goes away. [compose_refs] merges several into one.
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// An event that handlers can cancel.
pub trait Cancellable {
    /// Whether a handler prevented the event's default action.
    fn is_default_prevented(&self) -> bool;

    /// Whether a handler stopped the event from propagating.
    fn is_propagation_stopped(&self) -> bool;

    /// Whether the remaining handlers in a chain should run.
    fn should_continue(&self) -> bool {
        !self.is_default_prevented() && !self.is_propagation_stopped()
    }
}

/// A single event handler.
pub type Handler<Ev> = Rc<dyn Fn(&mut Ev)>;

/// An ordered list of handlers that short-circuits once the event is cancelled.
///
/// The first handler always runs. Each later handler only runs if
/// [Cancellable::should_continue] still holds after the ones before it.
pub struct HandlerChain<Ev> {
    handlers: Vec<Handler<Ev>>,
}

impl<Ev: Cancellable> HandlerChain<Ev> {
    /// Create an empty chain.
    pub fn new() -> Self {
        HandlerChain { handlers: vec![] }
    }

    /// Append a handler to the end of the chain.
    pub fn push(&mut self, handler: Handler<Ev>) {
        self.handlers.push(handler);
    }

    /// Append a handler to the end of the chain, and return it.
    pub fn then(mut self, handler: Handler<Ev>) -> Self {
        self.push(handler);
        self
    }

    /// The number of handlers in the chain.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Run the chain on an event.
    pub fn call(&self, event: &mut Ev) {
        for (i, handler) in self.handlers.iter().enumerate() {
            if i > 0 && !event.should_continue() {
                return;
            }

            handler(event);
        }
    }
}

impl<Ev: Cancellable> Default for HandlerChain<Ev> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ev> Clone for HandlerChain<Ev> {
    fn clone(&self) -> Self {
        HandlerChain { handlers: self.handlers.clone() }
    }
}

impl<Ev> fmt::Debug for HandlerChain<Ev> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain").field("len", &self.handlers.len()).finish()
    }
}

impl<Ev: Cancellable> From<Handler<Ev>> for HandlerChain<Ev> {
    fn from(handler: Handler<Ev>) -> Self {
        HandlerChain::new().then(handler)
    }
}

/// Run the caller's handlers first, and then `lib` unless they cancelled the event.
pub fn compose_handlers<Ev: Cancellable>(
    user: Option<HandlerChain<Ev>>,
    lib: Handler<Ev>,
) -> HandlerChain<Ev> {
    user.unwrap_or_default().then(lib)
}

/// Cleanup to run once an element is detached.
pub struct Detach(Box<dyn FnOnce()>);

impl Detach {
    /// Wrap a cleanup function.
    pub fn new<F: FnOnce() + 'static>(f: F) -> Self {
        Detach(Box::new(f))
    }

    /// A cleanup that does nothing.
    pub fn noop() -> Self {
        Detach::new(|| ())
    }

    /// Run the cleanup.
    pub fn run(self) {
        (self.0)()
    }
}

impl fmt::Debug for Detach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Detach")
    }
}

/// A shared slot holding the currently mounted element, if any.
pub struct RefSlot<E> {
    current: Rc<RefCell<Option<Rc<E>>>>,
}

impl<E> RefSlot<E> {
    /// Create an empty slot.
    pub fn new() -> Self {
        RefSlot { current: Rc::new(RefCell::new(None)) }
    }

    /// The element currently stored in the slot.
    pub fn get(&self) -> Option<Rc<E>> {
        self.current.borrow().clone()
    }

    /// Whether an element is stored in the slot.
    pub fn is_set(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub(crate) fn set(&self, element: Option<Rc<E>>) {
        *self.current.borrow_mut() = element;
    }
}

impl<E> Clone for RefSlot<E> {
    fn clone(&self) -> Self {
        RefSlot { current: self.current.clone() }
    }
}

impl<E> Default for RefSlot<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for RefSlot<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefSlot").field("set", &self.is_set()).finish()
    }
}

/// A callback notified when an element is attached, or detached with `None`.
///
/// If it returns a [Detach] when attached, that runs on detachment instead of a `None` call.
pub type RefCallback<E> = Rc<dyn Fn(Option<&Rc<E>>) -> Option<Detach>>;

/// Something that wants to know which element is mounted.
pub enum ElementRef<E> {
    /// A callback to notify.
    Callback(RefCallback<E>),

    /// A slot to store the element in.
    Slot(RefSlot<E>),
}

impl<E: 'static> ElementRef<E> {
    /// Create a callback reference.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(Option<&Rc<E>>) -> Option<Detach> + 'static,
    {
        ElementRef::Callback(Rc::new(f))
    }

    /// Tell this reference about a newly mounted element.
    ///
    /// The returned [Detach] must be run once the element is unmounted or replaced.
    pub fn attach(&self, element: &Rc<E>) -> Detach {
        match self {
            ElementRef::Callback(cb) => {
                match cb(Some(element)) {
                    Some(detach) => detach,
                    None => {
                        let cb = cb.clone();

                        Detach::new(move || {
                            let _ = cb(None);
                        })
                    },
                }
            },
            ElementRef::Slot(slot) => {
                slot.set(Some(element.clone()));

                let slot = slot.clone();

                Detach::new(move || slot.set(None))
            },
        }
    }
}

impl<E> Clone for ElementRef<E> {
    fn clone(&self) -> Self {
        match self {
            ElementRef::Callback(cb) => ElementRef::Callback(cb.clone()),
            ElementRef::Slot(slot) => ElementRef::Slot(slot.clone()),
        }
    }
}

impl<E> fmt::Debug for ElementRef<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRef::Callback(_) => f.write_str("ElementRef::Callback"),
            ElementRef::Slot(slot) => f.debug_tuple("ElementRef::Slot").field(slot).finish(),
        }
    }
}

impl<E> From<RefSlot<E>> for ElementRef<E> {
    fn from(slot: RefSlot<E>) -> Self {
        ElementRef::Slot(slot)
    }
}

/// Merge several references into one callback that forwards to each of them in order.
///
/// Missing references are skipped. On detachment, the cleanups are run in the same order. If the
/// composed callback is called with `None`, slots are cleared and callbacks receive `None`.
pub fn compose_refs<E, I>(refs: I) -> ElementRef<E>
where
    E: 'static,
    I: IntoIterator<Item = Option<ElementRef<E>>>,
{
    let refs: Vec<ElementRef<E>> = refs.into_iter().flatten().collect();

    ElementRef::callback(move |element| {
        let Some(element) = element else {
            for r in refs.iter() {
                match r {
                    ElementRef::Callback(cb) => {
                        let _ = cb(None);
                    },
                    ElementRef::Slot(slot) => slot.set(None),
                }
            }

            return None;
        };

        let detaches: Vec<Detach> = refs.iter().map(|r| r.attach(element)).collect();

        Some(Detach::new(move || {
            for detach in detaches {
                detach.run();
            }
        }))
    })
}
