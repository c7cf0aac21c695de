use std::time::SystemTime;

/// Lifecycle of a single practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    Idle,
    Countdown,
    Active,
    Finished,
}

/// All mutable state for one practice run, owned exclusively by the
/// controller. Other modules receive it as an explicit argument and never
/// hold a reference across calls.
///
/// `raw` is the display buffer and always mirrors the latest keystroke
/// event, including an uncommitted IME composition tail. `committed` is the
/// scoring buffer and only changes when composition is not in progress.
#[derive(Debug, Clone)]
pub struct Session {
    pub target: Vec<char>,
    pub committed: Vec<char>,
    pub raw: String,
    pub composing: bool,
    pub started_at: Option<SystemTime>,
    pub finished_at: Option<SystemTime>,
    pub mistakes: usize,
    pub countdown: Option<u32>,
    pub phase: Phase,
}

impl Session {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.chars().collect(),
            committed: Vec::new(),
            raw: String::new(),
            composing: false,
            started_at: None,
            finished_at: None,
            mistakes: 0,
            countdown: None,
            phase: Phase::Idle,
        }
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_complete(&self) -> bool {
        !self.target.is_empty() && self.committed.len() == self.target.len()
    }

    /// Time to score against: frozen at completion so a finished session's
    /// WPM does not keep drifting as wall time advances.
    pub fn score_instant(&self, now: SystemTime) -> SystemTime {
        self.finished_at.unwrap_or(now)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new("")
    }
}
