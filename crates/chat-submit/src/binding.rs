//! # Bindings
//!
//! ## Overview
//!
//! A [ChatSubmit] binds the gate, the composition tracker and the platform cache to one text
//! element. Hosts interact with it in three places:
//!
//! - [ChatSubmit::textarea_props] merges the caller's handlers and references with the
//!   binding's own, and the result is installed on the element
//! - the host dispatches key presses through [TextareaProps::key_down], and low-level signals
//!   through its [EventTarget](crate::element::EventTarget) listeners
//! - [ChatSubmit::resolve_platform] is called once the platform is known
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use chat_submit::{
//!     Cancellable, ChatSubmit, EventTarget, Key, KeyDownEvent, KeyInput, Listener, ListenerId,
//!     ListenerSet, Modifiers, PlatformSummary, SignalKind, SubmitConfig, TextInput,
//!     TextareaProps,
//! };
//!
//! #[derive(Default)]
//! struct Area {
//!     text: RefCell<String>,
//!     listeners: ListenerSet,
//! }
//!
//! impl TextInput for Area {
//!     fn value(&self) -> String {
//!         self.text.borrow().clone()
//!     }
//! }
//!
//! impl EventTarget for Area {
//!     fn add_listener(&self, kind: SignalKind, listener: Listener) -> ListenerId {
//!         self.listeners.add(kind, listener)
//!     }
//!
//!     fn remove_listener(&self, id: ListenerId) {
//!         self.listeners.remove(id);
//!     }
//! }
//!
//! let sent = Rc::new(RefCell::new(vec![]));
//! let s = sent.clone();
//! let config = SubmitConfig::default().with_platform_hint(PlatformSummary::new(false, false));
//! let binding = ChatSubmit::new(config, move |value: &str, _| s.borrow_mut().push(value.to_string()));
//!
//! let area = Rc::new(Area::default());
//! let props = binding.textarea_props(TextareaProps::new());
//! let _detach = props.attach(&area);
//!
//! area.text.borrow_mut().push_str("hello");
//!
//! let mut event = KeyDownEvent::new(KeyInput::new(Key::Enter, Modifiers::CTRL), area.clone());
//! props.key_down(&mut event);
//!
//! assert!(event.is_default_prevented());
//! assert_eq!(*sent.borrow(), vec!["hello"]);
//! ```
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::composition::{CompositionReader, CompositionTracker};
use crate::compose::{
    compose_handlers,
    compose_refs,
    Cancellable,
    Detach,
    ElementRef,
    Handler,
    HandlerChain,
    RefSlot,
};
use crate::config::SubmitConfig;
use crate::element::TextArea;
use crate::gate::{self, GateContext, GateDecision};
use crate::hints::{shortcut_hint_labels, ShortcutHintLabels};
use crate::key::KeyInput;
use crate::modifier::ResolvedModifier;
use crate::platform::{PlatformCell, PlatformSummary};

/// Extra information passed to the submit callback.
pub struct SubmitContext<'a, E> {
    /// The element whose text was submitted.
    pub target: &'a Rc<E>,
}

/// Callback invoked with the submitted text.
pub type SubmitCallback<E> = Rc<dyn Fn(&str, SubmitContext<'_, E>)>;

/// A key press delivered to an element, which handlers may cancel.
pub struct KeyDownEvent<E> {
    /// The key that was pressed.
    pub input: KeyInput,

    current_target: Rc<E>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl<E> KeyDownEvent<E> {
    /// Create an event for a key press on `target`.
    pub fn new(input: KeyInput, target: Rc<E>) -> Self {
        KeyDownEvent {
            input,
            current_target: target,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// The element that the event is being delivered to.
    pub fn current_target(&self) -> &Rc<E> {
        &self.current_target
    }

    /// Prevent the element's default action for this key press.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop this key press from propagating to enclosing elements.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

impl<E> Cancellable for KeyDownEvent<E> {
    fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

impl<E> fmt::Debug for KeyDownEvent<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyDownEvent")
            .field("input", &self.input)
            .field("default_prevented", &self.default_prevented)
            .field("propagation_stopped", &self.propagation_stopped)
            .finish()
    }
}

/// A key press handler.
pub type KeyDownHandler<E> = Handler<KeyDownEvent<E>>;

/// The attributes, key handlers and element reference to install on a text element.
pub struct TextareaProps<E> {
    /// Attributes that the binding passes through untouched.
    pub attributes: BTreeMap<String, String>,

    /// Handlers for key presses.
    pub on_key_down: Option<HandlerChain<KeyDownEvent<E>>>,

    /// The reference to notify about the mounted element.
    pub element_ref: Option<ElementRef<E>>,
}

impl<E: 'static> TextareaProps<E> {
    /// Create empty props.
    pub fn new() -> Self {
        TextareaProps { attributes: BTreeMap::new(), on_key_down: None, element_ref: None }
    }

    /// Set an attribute.
    pub fn attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set the key press handler.
    pub fn on_key_down<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut KeyDownEvent<E>) + 'static,
    {
        let handler: KeyDownHandler<E> = Rc::new(handler);
        self.on_key_down = Some(handler.into());
        self
    }

    /// Set the element reference.
    pub fn element_ref<R: Into<ElementRef<E>>>(mut self, element_ref: R) -> Self {
        self.element_ref = Some(element_ref.into());
        self
    }

    /// Deliver a key press to the handlers, if there are any.
    pub fn key_down(&self, event: &mut KeyDownEvent<E>) {
        if let Some(chain) = &self.on_key_down {
            chain.call(event);
        }
    }

    /// Tell the element reference about a mounted element.
    ///
    /// The returned [Detach] must be run when the element is unmounted, or before these props are
    /// replaced with new ones.
    pub fn attach(&self, element: &Rc<E>) -> Detach {
        match &self.element_ref {
            Some(r) => r.attach(element),
            None => Detach::noop(),
        }
    }
}

impl<E: 'static> Default for TextareaProps<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for TextareaProps<E> {
    fn clone(&self) -> Self {
        TextareaProps {
            attributes: self.attributes.clone(),
            on_key_down: self.on_key_down.clone(),
            element_ref: self.element_ref.clone(),
        }
    }
}

impl<E> fmt::Debug for TextareaProps<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextareaProps")
            .field("attributes", &self.attributes)
            .field("on_key_down", &self.on_key_down)
            .field("element_ref", &self.element_ref)
            .finish()
    }
}

struct Shared<E: TextArea> {
    config: RefCell<SubmitConfig>,
    on_submit: RefCell<SubmitCallback<E>>,
    platform: PlatformCell,
    textarea: RefSlot<E>,
    tracker: RefCell<CompositionTracker<E>>,
    composing: CompositionReader,
}

impl<E: TextArea + 'static> Shared<E> {
    fn is_enabled(&self) -> bool {
        self.config.borrow().enabled.is_enabled(self.platform.get().as_ref())
    }

    fn resolved_modifier(&self) -> ResolvedModifier {
        ResolvedModifier::resolve(self.config.borrow().mod_key, self.platform.get().as_ref())
    }

    /// Attach the tracker to the mounted element while enabled, and detach it otherwise.
    fn sync_listeners(&self) {
        let desired = if self.is_enabled() { self.textarea.get() } else { None };
        let mut tracker = self.tracker.borrow_mut();

        let unchanged = match (tracker.target(), desired.as_ref()) {
            (Some(current), Some(desired)) => Rc::ptr_eq(current, desired),
            (None, None) => true,
            _ => false,
        };

        if unchanged {
            return;
        }

        match desired {
            Some(desired) => tracker.attach(&desired),
            None => tracker.detach(),
        }
    }

    fn submit(&self) {
        let Some(target) = self.textarea.get() else {
            debug!("no mounted element; not submitting");
            return;
        };

        if !target.is_editable() {
            debug!("element is disabled or read-only; not submitting");
            return;
        }

        let value = target.value();

        if !self.config.borrow().allow_empty_submit && value.trim().is_empty() {
            debug!("empty value; not submitting");
            return;
        }

        let on_submit = self.on_submit.borrow().clone();

        debug!(len = value.len(), "submitting");
        on_submit(&value, SubmitContext { target: &target });
    }

    fn key_down(&self, event: &mut KeyDownEvent<E>) {
        let (ctx, stop_propagation) = {
            let config = self.config.borrow();
            let ctx = GateContext {
                mode: config.mode,
                modifier: self.resolved_modifier(),
                composing: self.composing.get(),
                enabled: self.is_enabled(),
            };

            (ctx, config.stop_propagation)
        };

        let target = event.current_target().clone();

        match gate::process(&event.input, &*target, &ctx) {
            GateDecision::Ignore => {},
            GateDecision::SuppressAndSubmit => {
                event.prevent_default();

                if stop_propagation {
                    event.stop_propagation();
                }

                self.submit();
            },
        }
    }
}

/// Decides when key presses in one text element should submit it.
///
/// Cloning a binding produces another handle to the same state.
pub struct ChatSubmit<E: TextArea + 'static> {
    shared: Rc<Shared<E>>,
}

impl<E: TextArea + 'static> ChatSubmit<E> {
    /// Create a binding that calls `on_submit` with the element's text when it's submitted.
    pub fn new<F>(config: SubmitConfig, on_submit: F) -> Self
    where
        F: Fn(&str, SubmitContext<'_, E>) + 'static,
    {
        let tracker = CompositionTracker::new();
        let composing = tracker.reader();
        let platform = PlatformCell::new(config.platform_hint);

        let shared = Shared {
            config: RefCell::new(config),
            on_submit: RefCell::new(Rc::new(on_submit)),
            platform,
            textarea: RefSlot::new(),
            tracker: RefCell::new(tracker),
            composing,
        };

        ChatSubmit { shared: Rc::new(shared) }
    }

    /// Merge the caller's props with the binding's own.
    ///
    /// The caller's key handlers run first; if they prevent the default action or stop
    /// propagation, the binding leaves the key press alone. The caller's element reference is
    /// notified before the binding's.
    ///
    /// While the binding is disabled, no key handler is added.
    pub fn textarea_props(&self, user: TextareaProps<E>) -> TextareaProps<E> {
        let TextareaProps { attributes, on_key_down, element_ref } = user;

        let textarea = Some(ElementRef::Slot(self.shared.textarea.clone()));

        if !self.is_enabled() {
            return TextareaProps {
                attributes,
                on_key_down,
                element_ref: Some(compose_refs([element_ref, textarea])),
            };
        }

        let instrumented = Some(self.instrumented_ref());
        let on_key_down = compose_handlers(on_key_down, self.key_handler());

        TextareaProps {
            attributes,
            on_key_down: Some(on_key_down),
            element_ref: Some(compose_refs([element_ref, textarea, instrumented])),
        }
    }

    fn key_handler(&self) -> KeyDownHandler<E> {
        let shared = Rc::downgrade(&self.shared);

        Rc::new(move |event: &mut KeyDownEvent<E>| {
            if let Some(shared) = shared.upgrade() {
                shared.key_down(event);
            }
        })
    }

    fn instrumented_ref(&self) -> ElementRef<E> {
        let shared: Weak<Shared<E>> = Rc::downgrade(&self.shared);

        ElementRef::callback(move |element: Option<&Rc<E>>| {
            let shared = shared.upgrade()?;

            shared.sync_listeners();

            element?;

            let shared = Rc::downgrade(&shared);

            Some(Detach::new(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.sync_listeners();
                }
            }))
        })
    }

    /// Read-only access to the mounted element.
    pub fn textarea_ref(&self) -> RefSlot<E> {
        self.shared.textarea.clone()
    }

    /// Submit the element's text now, even if gating is disabled.
    ///
    /// Nothing happens if no element is mounted, if it's disabled or read-only, or if its text is
    /// blank and empty submissions aren't allowed.
    pub fn trigger_submit(&self) {
        self.shared.submit();
    }

    /// Hints describing the current shortcuts, if they're known.
    pub fn shortcut_hint_labels(&self) -> Option<ShortcutHintLabels> {
        let config = self.shared.config.borrow();

        shortcut_hint_labels(
            config.mode,
            self.shared.resolved_modifier(),
            self.shared.platform.get().as_ref(),
            config.shortcut_hint_label_style,
        )
    }

    /// Whether keystroke gating is currently in effect.
    pub fn is_enabled(&self) -> bool {
        self.shared.is_enabled()
    }

    /// The modifier currently in effect.
    pub fn resolved_modifier(&self) -> ResolvedModifier {
        self.shared.resolved_modifier()
    }

    /// The platform summary, if it has been determined.
    pub fn platform(&self) -> Option<PlatformSummary> {
        self.shared.platform.get()
    }

    /// Whether an input method composition is in progress in the mounted element.
    pub fn is_composing(&self) -> bool {
        self.shared.composing.get()
    }

    /// Whether composition listeners are currently attached to an element.
    pub fn is_tracking(&self) -> bool {
        self.shared.tracker.borrow().is_attached()
    }

    /// A copy of the current configuration.
    pub fn config(&self) -> SubmitConfig {
        self.shared.config.borrow().clone()
    }

    /// Record the platform, if it hasn't been determined yet.
    ///
    /// Returns `true` if this call determined it. Hosts should then fetch fresh props, since the
    /// binding may have been enabled or disabled.
    pub fn resolve_platform(&self, summary: Option<PlatformSummary>) -> bool {
        if !self.shared.platform.resolve(summary) {
            return false;
        }

        self.shared.sync_listeners();

        return true;
    }

    /// Run `detect` if the platform hasn't been determined yet, and record its result.
    pub fn detect_platform<F>(&self, detect: F) -> bool
    where
        F: FnOnce() -> Option<PlatformSummary>,
    {
        if self.shared.platform.is_resolved() {
            return false;
        }

        self.resolve_platform(detect())
    }

    /// Replace the configuration.
    ///
    /// [SubmitConfig::platform_hint] only seeds a new binding, and is ignored here. Hosts should
    /// fetch fresh props afterwards.
    pub fn reconfigure(&self, config: SubmitConfig) {
        debug!(mode = %config.mode, enabled = %config.enabled, "reconfiguring");
        *self.shared.config.borrow_mut() = config;
        self.shared.sync_listeners();
    }

    /// Replace the submit callback.
    pub fn set_on_submit<F>(&self, on_submit: F)
    where
        F: Fn(&str, SubmitContext<'_, E>) + 'static,
    {
        *self.shared.on_submit.borrow_mut() = Rc::new(on_submit);
    }
}

impl<E: TextArea + 'static> Clone for ChatSubmit<E> {
    fn clone(&self) -> Self {
        ChatSubmit { shared: self.shared.clone() }
    }
}

impl<E: TextArea + 'static> fmt::Debug for ChatSubmit<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatSubmit")
            .field("config", &self.shared.config.borrow())
            .field("platform", &self.shared.platform.get())
            .field("tracker", &self.shared.tracker.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EnabledState, ModifierPreference, ShortcutHintLabelStyle, SubmitMode};
    use crate::element::{EventTarget, Listener, ListenerId, ListenerSet, TextInput};
    use crate::key::{Key, Modifiers, Signal, SignalKind};
    use std::cell::Cell;

    #[derive(Default)]
    struct Area {
        text: RefCell<String>,
        disabled: Cell<bool>,
        read_only: Cell<bool>,
        listeners: ListenerSet,
    }

    impl Area {
        fn with_text(text: &str) -> Rc<Self> {
            let area = Area::default();
            area.text.replace(text.to_string());
            Rc::new(area)
        }
    }

    impl TextInput for Area {
        fn value(&self) -> String {
            self.text.borrow().clone()
        }

        fn is_disabled(&self) -> bool {
            self.disabled.get()
        }

        fn is_read_only(&self) -> bool {
            self.read_only.get()
        }
    }

    impl EventTarget for Area {
        fn add_listener(&self, kind: SignalKind, listener: Listener) -> ListenerId {
            self.listeners.add(kind, listener)
        }

        fn remove_listener(&self, id: ListenerId) {
            self.listeners.remove(id);
        }
    }

    const DESKTOP: PlatformSummary = PlatformSummary { is_apple_device: false, is_touch_primary: false };
    const MAC: PlatformSummary = PlatformSummary { is_apple_device: true, is_touch_primary: false };
    const PHONE: PlatformSummary = PlatformSummary { is_apple_device: true, is_touch_primary: true };

    fn binding(config: SubmitConfig) -> (ChatSubmit<Area>, Rc<RefCell<Vec<String>>>) {
        let sent = Rc::new(RefCell::new(vec![]));
        let s = sent.clone();
        let binding = ChatSubmit::new(config, move |value: &str, _: SubmitContext<'_, Area>| {
            s.borrow_mut().push(value.to_string());
        });

        (binding, sent)
    }

    fn press(props: &TextareaProps<Area>, area: &Rc<Area>, input: KeyInput) -> KeyDownEvent<Area> {
        area.listeners.dispatch(&Signal::KeyDown(input.clone()));

        let mut event = KeyDownEvent::new(input, area.clone());
        props.key_down(&mut event);

        return event;
    }

    #[test]
    fn test_enter_submits() {
        let config = SubmitConfig::default().with_mode(SubmitMode::EnterSubmits);
        let (binding, sent) = binding(config);
        let area = Area::with_text("hello");
        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);

        let ev = press(&props, &area, enter!());
        assert!(ev.is_default_prevented());
        assert!(!ev.is_propagation_stopped());
        assert_eq!(*sent.borrow(), vec!["hello"]);

        let ev = press(&props, &area, enter!(Modifiers::SHIFT));
        assert!(!ev.is_default_prevented());
        assert_eq!(sent.borrow().len(), 1);
    }

    #[test]
    fn test_stop_propagation_option() {
        let config = SubmitConfig::default()
            .with_mode(SubmitMode::EnterSubmits)
            .with_stop_propagation(true);
        let (binding, sent) = binding(config);
        let area = Area::with_text("hello");
        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);

        let ev = press(&props, &area, enter!());
        assert!(ev.is_default_prevented());
        assert!(ev.is_propagation_stopped());
        assert_eq!(sent.borrow().len(), 1);
    }

    #[test]
    fn test_modifier_waits_for_platform() {
        let (binding, sent) = binding(SubmitConfig::default());
        let area = Area::with_text("hello");
        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);

        assert_eq!(binding.resolved_modifier(), ResolvedModifier::Undetermined);
        assert_eq!(binding.shortcut_hint_labels(), None);

        let ev = press(&props, &area, enter!(Modifiers::CTRL));
        assert!(!ev.is_default_prevented());
        let ev = press(&props, &area, enter!(Modifiers::META));
        assert!(!ev.is_default_prevented());
        assert!(sent.borrow().is_empty());

        assert_eq!(binding.resolve_platform(Some(MAC)), true);
        assert_eq!(binding.resolved_modifier(), ResolvedModifier::Meta);

        let ev = press(&props, &area, enter!(Modifiers::CTRL));
        assert!(!ev.is_default_prevented());
        let ev = press(&props, &area, enter!(Modifiers::META));
        assert!(ev.is_default_prevented());
        assert_eq!(*sent.borrow(), vec!["hello"]);
    }

    #[test]
    fn test_platform_first_determination_wins() {
        let (binding, _) = binding(SubmitConfig::default());

        assert_eq!(binding.resolve_platform(None), false);
        assert_eq!(binding.resolve_platform(Some(DESKTOP)), true);
        assert_eq!(binding.resolve_platform(Some(MAC)), false);
        assert_eq!(binding.detect_platform(|| panic!("already resolved")), false);
        assert_eq!(binding.platform(), Some(DESKTOP));
        assert_eq!(binding.resolved_modifier(), ResolvedModifier::Ctrl);
    }

    #[test]
    fn test_explicit_modifier() {
        let config = SubmitConfig::default().with_mod_key(ModifierPreference::Ctrl);
        let (binding, sent) = binding(config);
        let area = Area::with_text("hi");
        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);

        // Known without the platform.
        assert_eq!(binding.resolved_modifier(), ResolvedModifier::Ctrl);
        press(&props, &area, enter!(Modifiers::CTRL));
        assert_eq!(sent.borrow().len(), 1);
    }

    #[test]
    fn test_composition_blocks_submit() {
        let config = SubmitConfig::default().with_mode(SubmitMode::EnterSubmits);
        let (binding, sent) = binding(config);
        let area = Area::with_text("にほんご");
        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);

        area.listeners.dispatch(&Signal::CompositionStart);
        assert!(binding.is_composing());

        // Enter confirms the candidate.
        let ev = press(&props, &area, enter!());
        assert!(!ev.is_default_prevented());
        assert!(sent.borrow().is_empty());

        area.listeners.dispatch(&Signal::CompositionEnd);
        press(&props, &area, enter!());
        assert_eq!(*sent.borrow(), vec!["にほんご"]);

        // The Process key marks a composition before compositionstart arrives.
        let ev = press(&props, &area, key!(Key::Process));
        assert!(!ev.is_default_prevented());
        let ev = press(&props, &area, enter!());
        assert!(!ev.is_default_prevented());

        area.listeners.dispatch(&Signal::CompositionCancel);
        press(&props, &area, enter!());
        assert_eq!(sent.borrow().len(), 2);
    }

    #[test]
    fn test_repeat_does_not_submit() {
        let config = SubmitConfig::default().with_mode(SubmitMode::EnterSubmits);
        let (binding, sent) = binding(config);
        let area = Area::with_text("hello");
        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);

        let ev = press(&props, &area, enter!().repeating());
        assert!(!ev.is_default_prevented());
        assert!(sent.borrow().is_empty());
    }

    #[test]
    fn test_user_handler_opts_out() {
        let config = SubmitConfig::default().with_mode(SubmitMode::EnterSubmits);
        let (binding, sent) = binding(config);
        let area = Area::with_text("hello");
        let calls = Rc::new(Cell::new(0));

        let c = calls.clone();
        let user = TextareaProps::new().on_key_down(move |ev: &mut KeyDownEvent<Area>| {
            c.set(c.get() + 1);
            ev.prevent_default();
        });
        let props = binding.textarea_props(user);
        let _detach = props.attach(&area);

        press(&props, &area, enter!());
        assert_eq!(calls.get(), 1);
        assert!(sent.borrow().is_empty());
    }

    #[test]
    fn test_user_props_pass_through() {
        let (binding, _) = binding(SubmitConfig::default());
        let user_slot = RefSlot::new();
        let user = TextareaProps::new()
            .attribute("placeholder", "Say something")
            .element_ref(user_slot.clone());

        let props = binding.textarea_props(user);
        assert_eq!(props.attributes.get("placeholder").map(String::as_str), Some("Say something"));

        let area = Area::with_text("");
        let detach = props.attach(&area);
        assert!(Rc::ptr_eq(&user_slot.get().unwrap(), &area));
        assert!(Rc::ptr_eq(&binding.textarea_ref().get().unwrap(), &area));

        detach.run();
        assert!(user_slot.get().is_none());
        assert!(binding.textarea_ref().get().is_none());
    }

    #[test]
    fn test_empty_submissions() {
        let (binding, sent) = binding(SubmitConfig::default());
        let area = Area::with_text("   ");
        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);

        binding.trigger_submit();
        assert!(sent.borrow().is_empty());

        binding.reconfigure(SubmitConfig::default().with_allow_empty_submit(true));
        binding.trigger_submit();
        assert_eq!(*sent.borrow(), vec!["   "]);
    }

    #[test]
    fn test_blank_enter_is_suppressed() {
        let config = SubmitConfig::default().with_mode(SubmitMode::EnterSubmits);
        let (binding, sent) = binding(config.clone());
        let area = Area::with_text("   ");
        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);

        // Enter is still swallowed, but nothing is sent.
        let ev = press(&props, &area, enter!());
        assert!(ev.is_default_prevented());
        assert!(sent.borrow().is_empty());

        binding.reconfigure(config.with_allow_empty_submit(true));
        let ev = press(&props, &area, enter!());
        assert!(ev.is_default_prevented());
        assert_eq!(*sent.borrow(), vec!["   "]);
    }

    #[test]
    fn test_detaching_mid_dispatch_stops_tracking() {
        let config = SubmitConfig::default().with_enabled(EnabledState::AlwaysOn);
        let (binding, _) = binding(config);
        let area = Area::with_text("hello");

        // Registered before the binding's listeners, so it runs first.
        let b = binding.clone();
        area.add_listener(
            SignalKind::KeyDown,
            Rc::new(move |_: &Signal| {
                b.reconfigure(SubmitConfig::default().with_enabled(EnabledState::AlwaysOff));
            }),
        );

        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);
        assert!(binding.is_tracking());

        area.listeners.dispatch(&Signal::KeyDown(key!(Key::Process)));
        assert!(!binding.is_tracking());
        assert!(!binding.is_composing());
        assert_eq!(area.listeners.len(), 1);
    }

    #[test]
    fn test_manual_trigger_checks_element() {
        let config = SubmitConfig::default().with_enabled(EnabledState::AlwaysOff);
        let (binding, sent) = binding(config);

        // Nothing mounted.
        binding.trigger_submit();
        assert!(sent.borrow().is_empty());

        let area = Area::with_text("hello");
        let props = binding.textarea_props(TextareaProps::new());
        let detach = props.attach(&area);

        area.disabled.set(true);
        binding.trigger_submit();
        area.disabled.set(false);
        area.read_only.set(true);
        binding.trigger_submit();
        assert!(sent.borrow().is_empty());

        // Works while gating is disabled.
        area.read_only.set(false);
        binding.trigger_submit();
        assert_eq!(*sent.borrow(), vec!["hello"]);

        detach.run();
        binding.trigger_submit();
        assert_eq!(sent.borrow().len(), 1);
    }

    #[test]
    fn test_disabled_props() {
        let config = SubmitConfig::default()
            .with_mode(SubmitMode::EnterSubmits)
            .with_enabled(EnabledState::AlwaysOff);
        let (binding, sent) = binding(config);
        let area = Area::with_text("hello");
        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);

        assert!(!binding.is_enabled());
        assert!(props.on_key_down.is_none());
        assert!(!binding.is_tracking());
        assert_eq!(area.listeners.len(), 0);

        press(&props, &area, enter!());
        assert!(sent.borrow().is_empty());
    }

    #[test]
    fn test_non_mobile_platform_resolution() {
        let (binding, _) = binding(SubmitConfig::default());
        let area = Area::with_text("hello");
        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);

        assert!(binding.is_enabled());
        assert!(binding.is_tracking());
        assert_eq!(area.listeners.len(), 5);

        binding.resolve_platform(Some(PHONE));
        assert!(!binding.is_enabled());
        assert!(!binding.is_tracking());
        assert_eq!(area.listeners.len(), 0);

        // A composition signal after detaching doesn't change anything.
        area.listeners.dispatch(&Signal::CompositionStart);
        assert!(!binding.is_composing());
    }

    #[test]
    fn test_reconfigure_reattaches() {
        let config = SubmitConfig::default().with_enabled(EnabledState::AlwaysOff);
        let (binding, _) = binding(config);
        let area = Area::with_text("hello");
        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);
        assert_eq!(area.listeners.len(), 0);

        binding.reconfigure(SubmitConfig::default().with_enabled(EnabledState::AlwaysOn));
        assert_eq!(area.listeners.len(), 5);

        binding.reconfigure(SubmitConfig::default().with_enabled(EnabledState::AlwaysOn));
        assert_eq!(area.listeners.len(), 5);
    }

    #[test]
    fn test_replacing_element() {
        let (binding, _) = binding(SubmitConfig::default().with_enabled(EnabledState::AlwaysOn));
        let first = Area::with_text("one");
        let second = Area::with_text("two");
        let props = binding.textarea_props(TextareaProps::new());

        let detach = props.attach(&first);
        assert_eq!(first.listeners.len(), 5);

        detach.run();
        assert_eq!(first.listeners.len(), 0);
        assert!(!binding.is_tracking());

        let _detach = props.attach(&second);
        assert_eq!(first.listeners.len(), 0);
        assert_eq!(second.listeners.len(), 5);
    }

    #[test]
    fn test_submit_uses_mounted_element() {
        let config = SubmitConfig::default().with_mode(SubmitMode::EnterSubmits);
        let sent = Rc::new(RefCell::new(vec![]));
        let s = sent.clone();
        let binding = ChatSubmit::new(config, move |value: &str, ctx: SubmitContext<'_, Area>| {
            ctx.target.text.borrow_mut().clear();
            s.borrow_mut().push(value.to_string());
        });

        let area = Area::with_text("hello");
        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);

        press(&props, &area, enter!());
        assert_eq!(*sent.borrow(), vec!["hello"]);
        assert_eq!(area.value(), "");
    }

    #[test]
    fn test_hint_labels_follow_config() {
        let config = SubmitConfig::default()
            .with_label_style(ShortcutHintLabelStyle::Symbols)
            .with_platform_hint(MAC);
        let (binding, _) = binding(config);

        let labels = binding.shortcut_hint_labels().unwrap();
        assert_eq!(labels.submit.keys, vec!["⌘", "⏎"]);
        assert!(labels.submit.is_unique_behavior);

        binding.reconfigure(
            SubmitConfig::default()
                .with_mode(SubmitMode::EnterSubmits)
                .with_label_style(ShortcutHintLabelStyle::Text),
        );
        let labels = binding.shortcut_hint_labels().unwrap();
        assert_eq!(labels.submit.keys, vec!["Enter"]);
        assert_eq!(labels.line_break.keys, vec!["Shift", "Enter"]);
        assert!(labels.line_break.is_unique_behavior);
    }

    #[test]
    fn test_dropping_binding_detaches() {
        let (binding, _) = binding(SubmitConfig::default());
        let area = Area::with_text("hello");
        let props = binding.textarea_props(TextareaProps::new());
        let _detach = props.attach(&area);
        assert_eq!(area.listeners.len(), 5);

        drop(props);
        drop(binding);
        assert_eq!(area.listeners.len(), 0);
    }
}
