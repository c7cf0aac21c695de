//! Raw keystroke handling with IME composition awareness.
//!
//! Two buffers, two entry points: every event updates the display buffer
//! (`Session.raw`), but text only flows into the scoring buffer when no
//! composition is in progress. A multi-keystroke IME sequence therefore
//! stays visible but inert until the editor commits it.

use crate::session::Session;

/// Handle a raw input event. Returns the text to commit into scoring, or
/// `None` while a composition is in progress.
pub fn apply_raw_input(session: &mut Session, text: &str, is_composing: bool) -> Option<String> {
    session.raw = text.to_string();
    session.composing = is_composing;
    if is_composing {
        None
    } else {
        Some(text.to_string())
    }
}

/// Handle the end of an IME composition, flushing the final buffer.
/// Flushing an empty or unchanged buffer is an idempotent no-op.
pub fn end_composition(session: &mut Session, text: &str) -> Option<String> {
    session.composing = false;
    session.raw = text.to_string();
    if text.is_empty() || text.chars().eq(session.committed.iter().copied()) {
        return None;
    }
    Some(text.to_string())
}
