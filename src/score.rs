//! Pure scoring math, shared by the periodic live snapshot and the final
//! completion snapshot.

use itertools::{EitherOrBoth, Itertools};
use std::time::SystemTime;

/// How a single target position compares against the committed buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharOutcome {
    Correct,
    Incorrect,
    /// Not yet reached by the committed buffer.
    Pending,
}

/// Characters per "word" for logographic text density.
pub const CHARS_PER_WORD: f64 = 2.0;

/// Words-per-minute over the committed buffer length.
///
/// Zero until the session has started, and zero when no time has elapsed
/// (a commit scored at the exact latch instant).
pub fn wpm(committed_len: usize, started_at: Option<SystemTime>, now: SystemTime) -> u32 {
    let Some(start) = started_at else {
        return 0;
    };
    let elapsed_ms = now
        .duration_since(start)
        .unwrap_or_default()
        .as_millis() as f64;
    if elapsed_ms == 0.0 {
        return 0;
    }
    let words = committed_len as f64 / CHARS_PER_WORD;
    let minutes = elapsed_ms / 60_000.0;
    (words / minutes).round() as u32
}

/// Positions in the committed prefix that disagree with the target.
pub fn mistakes(committed: &[char], target: &[char]) -> usize {
    committed
        .iter()
        .enumerate()
        .filter(|(i, c)| target.get(*i) != Some(*c))
        .count()
}

/// Percentage of the committed prefix that matches the target, rounded.
/// An empty committed buffer scores 100.
pub fn accuracy(committed: &[char], target: &[char]) -> u32 {
    if committed.is_empty() {
        return 100;
    }
    let errors = mistakes(committed, target);
    (((committed.len() - errors) as f64 / committed.len() as f64) * 100.0).round() as u32
}

/// Correct-character progress over the whole target, as a percentage.
///
/// A run with many mistakes shows less progress than its keystroke count
/// would suggest.
pub fn progress_percent(committed: &[char], target: &[char]) -> f64 {
    if target.is_empty() {
        return 0.0;
    }
    let correct = committed
        .iter()
        .enumerate()
        .filter(|(i, c)| target.get(*i) == Some(*c))
        .count();
    correct as f64 / target.len() as f64 * 100.0
}

/// Per-target-position outcome mask for character coloring.
pub fn match_mask(committed: &[char], target: &[char]) -> Vec<CharOutcome> {
    target
        .iter()
        .zip_longest(committed.iter())
        .filter_map(|pair| match pair {
            EitherOrBoth::Both(t, c) => Some(if t == c {
                CharOutcome::Correct
            } else {
                CharOutcome::Incorrect
            }),
            EitherOrBoth::Left(_) => Some(CharOutcome::Pending),
            // Committed is clamped to target length upstream.
            EitherOrBoth::Right(_) => None,
        })
        .collect()
}
