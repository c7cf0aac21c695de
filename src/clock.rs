use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, SystemTime};

/// Time source consumed by the session controller.
///
/// The engine never calls `SystemTime::now()` directly; injecting the clock
/// keeps WPM math deterministic under test.
pub trait Clock {
    fn now(&self) -> SystemTime;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Manually advanced clock for tests.
///
/// Clones share the same underlying instant, so a test can keep a handle
/// while the controller owns its own copy. The core is single-threaded, so
/// `Rc<Cell<..>>` is sufficient.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<SystemTime>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(SystemTime::UNIX_EPOCH)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        self.now.get()
    }
}
