//! Session state machine: `Idle → Countdown(3,2,1) → Active → Finished`,
//! with `Finished → Countdown` via `reset()`.
//!
//! The controller is the sole mutator of the one `Session` value. Both
//! 1-second timers (countdown and live stats) are externalized into `tick()`
//! driven by the host scheduler; resetting replaces the session wholesale,
//! so a tick scheduled against an old session can only see the new one's
//! phase and act on that.

use std::time::SystemTime;

use crate::clock::{Clock, SystemClock};
use crate::composition;
use crate::config::Config;
use crate::history::{BestScore, HistoryStore, ScoreSnapshot};
use crate::sample_text::{BuiltinSamples, SampleProvider};
use crate::score::{self, CharOutcome};
use crate::session::{Phase, Session};
use crate::time_series::TimeSeriesPoint;

/// Point-in-time view consumed by the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub wpm: u32,
    pub accuracy: u32,
    pub phase: Phase,
    pub countdown: Option<u32>,
    pub progress_percent: f64,
    pub match_mask: Vec<CharOutcome>,
}

pub struct SessionController<C: Clock, P: SampleProvider> {
    clock: C,
    provider: P,
    config: Config,
    session: Session,
    history: HistoryStore,
    wpm_series: Vec<TimeSeriesPoint>,
}

impl SessionController<SystemClock, BuiltinSamples> {
    pub fn new() -> Self {
        Self::with_parts(SystemClock, BuiltinSamples, Config::default())
    }
}

impl Default for SessionController<SystemClock, BuiltinSamples> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, P: SampleProvider> SessionController<C, P> {
    pub fn with_parts(clock: C, provider: P, config: Config) -> Self {
        Self {
            clock,
            provider,
            config,
            session: Session::default(),
            history: HistoryStore::new(),
            wpm_series: Vec::new(),
        }
    }

    /// Start a fresh session over a newly picked target. History and best
    /// score are left untouched.
    pub fn reset(&mut self) {
        let target = self.provider.pick();
        self.session = Session::new(&target);
        self.session.phase = Phase::Countdown;
        self.session.countdown = Some(self.config.countdown_start);
        self.wpm_series.clear();
    }

    /// Raw keystroke event from the host. Rejected silently outside the
    /// `Active` phase. Within it, the display buffer always updates; scoring
    /// updates only when no composition is in progress.
    pub fn submit_raw_input(&mut self, text: &str, is_composing: bool) {
        if self.session.phase != Phase::Active {
            return;
        }
        if let Some(committed) = composition::apply_raw_input(&mut self.session, text, is_composing)
        {
            self.commit(&committed);
        }
    }

    /// IME composition finished; flush the final buffer into scoring.
    pub fn on_composition_end(&mut self, text: &str) {
        if self.session.phase != Phase::Active {
            return;
        }
        if let Some(committed) = composition::end_composition(&mut self.session, text) {
            self.commit(&committed);
        }
    }

    /// 1 Hz heartbeat from the host scheduler. Advances the countdown, or
    /// publishes a live snapshot while typing is active. A no-op in `Idle`
    /// and `Finished`.
    pub fn tick(&mut self) -> Option<ScoreSnapshot> {
        match self.session.phase {
            Phase::Countdown => {
                match self.session.countdown {
                    Some(n) if n > 1 => self.session.countdown = Some(n - 1),
                    _ => {
                        self.session.countdown = None;
                        self.session.phase = Phase::Active;
                    }
                }
                None
            }
            Phase::Active => {
                let now = self.clock.now();
                let snapshot = self.score_at(now);
                if let Some(start) = self.session.started_at {
                    let secs = now.duration_since(start).unwrap_or_default().as_secs_f64();
                    self.wpm_series
                        .push(TimeSeriesPoint::new(secs, f64::from(snapshot.wpm)));
                }
                Some(snapshot)
            }
            Phase::Idle | Phase::Finished => None,
        }
    }

    /// On-demand view of the current session; nothing here is cached.
    pub fn snapshot(&self) -> SessionSnapshot {
        let now = self.session.score_instant(self.clock.now());
        SessionSnapshot {
            wpm: score::wpm(self.session.committed.len(), self.session.started_at, now),
            accuracy: score::accuracy(&self.session.committed, &self.session.target),
            phase: self.session.phase,
            countdown: self.session.countdown,
            progress_percent: score::progress_percent(&self.session.committed, &self.session.target),
            match_mask: score::match_mask(&self.session.committed, &self.session.target),
        }
    }

    pub fn history(&self) -> &[ScoreSnapshot] {
        self.history.entries()
    }

    pub fn best_score(&self) -> BestScore {
        self.history.best_score()
    }

    pub fn average_wpm(&self) -> u32 {
        self.history.average_wpm()
    }

    pub fn average_accuracy(&self) -> u32 {
        self.history.average_accuracy()
    }

    /// Normalized bar heights for the recent-history chart, sized by the
    /// configured display window.
    pub fn history_bars(&self) -> Vec<f64> {
        self.history.bar_heights(self.config.history_window)
    }

    /// Live WPM samples collected so far in the current session.
    pub fn wpm_series(&self) -> &[TimeSeriesPoint] {
        &self.wpm_series
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // Commit pipeline: clamp, start latch, mistake recount, completion
    // check, history append, in that order.
    fn commit(&mut self, text: &str) {
        let mut committed: Vec<char> = text.chars().collect();
        committed.truncate(self.session.target.len());
        self.session.committed = committed;

        if !self.session.has_started() && !self.session.committed.is_empty() {
            self.session.started_at = Some(self.clock.now());
        }

        // Recomputed from scratch on every commit, never drifted incrementally.
        self.session.mistakes =
            score::mistakes(&self.session.committed, &self.session.target);

        if self.session.is_complete() {
            self.finish();
        }
    }

    fn finish(&mut self) {
        let now = self.clock.now();
        self.session.finished_at = Some(now);
        self.session.phase = Phase::Finished;

        let snapshot = self.score_at(now);
        self.history.append(snapshot);
    }

    fn score_at(&self, now: SystemTime) -> ScoreSnapshot {
        ScoreSnapshot {
            wpm: score::wpm(self.session.committed.len(), self.session.started_at, now),
            accuracy: score::accuracy(&self.session.committed, &self.session.target),
            recorded_at: now.into(),
        }
    }
}
