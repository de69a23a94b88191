//! # Submission gate
//!
//! ## Overview
//!
//! [process] decides what a key press means for a text input: submit it now, or leave the key to
//! the element's default behaviour (usually inserting a line break).
//!
//! Every check that fails falls back to [GateDecision::Ignore], so anything the gate can't be sure
//! about behaves like ordinary typing.
use tracing::trace;

use crate::config::SubmitMode;
use crate::element::TextInput;
use crate::key::KeyInput;
use crate::modifier::ResolvedModifier;

/// The outcome of gating a key press.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GateDecision {
    /// Leave the key press alone.
    Ignore,

    /// Prevent the default action and submit.
    SuppressAndSubmit,
}

/// Everything besides the key press that the gate depends on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GateContext {
    /// The configured submit mode.
    pub mode: SubmitMode,

    /// The modifier in effect.
    pub modifier: ResolvedModifier,

    /// Whether an input method composition is in progress.
    pub composing: bool,

    /// Whether gating is enabled.
    pub enabled: bool,
}

/// Decide whether a key press on `target` should submit.
pub fn process<T>(input: &KeyInput, target: &T, ctx: &GateContext) -> GateDecision
where
    T: TextInput + ?Sized,
{
    let (decision, reason) = decide(input, target, ctx);

    trace!(key = %input.key, ?decision, reason, "gated key press");

    return decision;
}

fn decide<T>(input: &KeyInput, target: &T, ctx: &GateContext) -> (GateDecision, &'static str)
where
    T: TextInput + ?Sized,
{
    use GateDecision::*;

    if !ctx.enabled {
        return (Ignore, "disabled");
    }

    if input.repeat {
        return (Ignore, "key repeat");
    }

    if ctx.composing {
        return (Ignore, "composing");
    }

    if !input.is_enter() {
        return (Ignore, "not enter");
    }

    if !target.is_editable() {
        return (Ignore, "target not editable");
    }

    match ctx.mode {
        SubmitMode::EnterSubmits => {
            if input.shift() {
                return (Ignore, "line break");
            }

            return (SuppressAndSubmit, "enter");
        },
        SubmitMode::ModifierEnterSubmits => {
            match ctx.modifier.is_pressed(input.modifiers) {
                Some(true) => (SuppressAndSubmit, "modifier enter"),
                Some(false) => (Ignore, "line break"),
                None => (Ignore, "modifier undetermined"),
            }
        },
    }
}
