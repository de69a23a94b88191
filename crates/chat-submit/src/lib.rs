//! # chat-submit
//!
//! ## Overview
//!
//! This crate decides when a keystroke in a multi-line text input should submit the input's
//! contents, as in a chat composer, and when it should fall through to inserting a line break.
//!
//! Two policies are supported (see [SubmitMode]):
//!
//! - Enter submits, and Shift+Enter inserts a line break
//! - Meta+Enter or Ctrl+Enter submits, and Enter inserts a line break
//!
//! The decision takes into account input method composition (see [composition]), key
//! repetition, whether the element is editable, and the platform the user is on (see
//! [platform]). The [ChatSubmit] binding ties these together for one element, and also produces
//! [hints] describing the shortcuts.
//!
//! The crate is host-agnostic: elements are described by the traits in [element], and the
//! [chat-submit-crossterm] crate provides a terminal host.
//!
//! [chat-submit-crossterm]: https://docs.rs/chat-submit-crossterm/latest/chat_submit_crossterm/

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::bool_to_int_with_if)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::needless_return)]
#![allow(clippy::new_without_default)]
#![allow(clippy::type_complexity)]

#[macro_use]
mod util;

pub mod binding;
pub mod compose;
pub mod composition;
pub mod config;
pub mod element;
pub mod errors;
pub mod gate;
pub mod hints;
pub mod key;
pub mod modifier;
pub mod platform;

pub use self::binding::{ChatSubmit, KeyDownEvent, SubmitContext, TextareaProps};
pub use self::compose::{compose_handlers, compose_refs, Cancellable, Detach, ElementRef, RefSlot};
pub use self::composition::{CompositionReader, CompositionTracker};
pub use self::config::{
    EnabledState,
    ModifierPreference,
    ShortcutHintLabelStyle,
    SubmitConfig,
    SubmitMode,
};
pub use self::element::{EventTarget, Listener, ListenerId, ListenerSet, TextArea, TextInput};
pub use self::errors::{ConfigError, ConfigResult, DetectError};
pub use self::gate::{GateContext, GateDecision};
pub use self::hints::{ShortcutHint, ShortcutHintLabels};
pub use self::key::{Key, KeyInput, Modifiers, Signal, SignalKind};
pub use self::modifier::{ModKey, ResolvedModifier};
pub use self::platform::{PlatformCell, PlatformSummary, UserAgentData, UserAgentRules};
