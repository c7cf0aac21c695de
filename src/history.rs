//! In-memory record of finished sessions.
//!
//! The log is append-only and survives `reset()`; it is never truncated.
//! Best metrics are tracked independently per axis: a single snapshot need
//! not hold both maxima.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::util::mean;

/// Immutable record of one finished session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub wpm: u32,
    pub accuracy: u32,
    pub recorded_at: DateTime<Local>,
}

/// Running maxima over all appended snapshots, per metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub wpm: u32,
    pub accuracy: u32,
}

#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Vec<ScoreSnapshot>,
    best: BestScore,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished-session snapshot. No dedup, no eviction.
    pub fn append(&mut self, snapshot: ScoreSnapshot) {
        self.best.wpm = self.best.wpm.max(snapshot.wpm);
        self.best.accuracy = self.best.accuracy.max(snapshot.accuracy);
        self.entries.push(snapshot);
    }

    pub fn entries(&self) -> &[ScoreSnapshot] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best_score(&self) -> BestScore {
        self.best
    }

    pub fn average_wpm(&self) -> u32 {
        let wpms: Vec<f64> = self.entries.iter().map(|s| f64::from(s.wpm)).collect();
        mean(&wpms).map_or(0, |m| m.round() as u32)
    }

    pub fn average_accuracy(&self) -> u32 {
        let accs: Vec<f64> = self.entries.iter().map(|s| f64::from(s.accuracy)).collect();
        mean(&accs).map_or(100, |m| m.round() as u32)
    }

    /// Read-only window over the most recent `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[ScoreSnapshot] {
        &self.entries[self.entries.len().saturating_sub(n)..]
    }

    /// Bar heights in `0.0..=1.0` for the recent window, normalized against
    /// the all-time best WPM so a new bar never rescales old sessions upward.
    pub fn bar_heights(&self, n: usize) -> Vec<f64> {
        if self.best.wpm == 0 {
            return vec![0.0; self.recent(n).len()];
        }
        let max = f64::from(self.best.wpm);
        self.recent(n)
            .iter()
            .map(|s| f64::from(s.wpm) / max)
            .collect()
    }
}
