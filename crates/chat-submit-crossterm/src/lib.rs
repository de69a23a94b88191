//! # chat-submit-crossterm
//!
//! ## Overview
//!
//! This crate connects [chat_submit] to terminal applications built on [crossterm]. It provides:
//!
//! - [TerminalKey], for converting crossterm key events
//! - [TerminalTextArea], a text buffer that a [chat_submit::ChatSubmit] binding can control
//!
//! ## Example
//!
//! ```no_run
//! use chat_submit::{ChatSubmit, PlatformSummary, SubmitConfig, SubmitContext, TextareaProps};
//! use chat_submit_crossterm::TerminalTextArea;
//! use crossterm::event::read;
//!
//! fn main() -> std::io::Result<()> {
//!     chat_submit_crossterm::enable_enhanced_keys(&mut std::io::stdout())?;
//!
//!     let binding = ChatSubmit::new(SubmitConfig::default(), |msg: &str, ctx: SubmitContext<'_, TerminalTextArea>| {
//!         println!("sent: {msg}");
//!         ctx.target.clear();
//!     });
//!     binding.resolve_platform(Some(PlatformSummary::from_target()));
//!
//!     let area = TerminalTextArea::new();
//!     let props = binding.textarea_props(TextareaProps::new());
//!     let _detach = props.attach(&area);
//!
//!     loop {
//!         area.handle_event(&props, &read()?);
//!     }
//! }
//! ```

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::needless_return)]
#![allow(clippy::type_complexity)]

use std::io::{self, Write};

use crossterm::event::{
    KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;

pub mod key;
pub mod textarea;

pub use self::key::TerminalKey;
pub use self::textarea::{EventOutcome, TerminalTextArea};

pub use chat_submit;
pub use crossterm;

/// Ask the terminal to report modified Enter keys, repeats and releases.
///
/// Terminals that don't support the kitty keyboard protocol ignore the request, in which case
/// Ctrl+Enter usually can't be told apart from Enter.
pub fn enable_enhanced_keys<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(
        writer,
        PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
        )
    )
}

/// Undo [enable_enhanced_keys].
pub fn disable_enhanced_keys<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, PopKeyboardEnhancementFlags)
}
