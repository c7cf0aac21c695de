/// One point of the live WPM series sampled each active tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesPoint {
    /// Seconds since the session's start latch.
    pub secs: f64,
    pub wpm: f64,
}

impl TimeSeriesPoint {
    pub fn new(secs: f64, wpm: f64) -> Self {
        Self { secs, wpm }
    }
}

impl From<(f64, f64)> for TimeSeriesPoint {
    fn from(v: (f64, f64)) -> Self {
        TimeSeriesPoint { secs: v.0, wpm: v.1 }
    }
}

impl From<TimeSeriesPoint> for (f64, f64) {
    fn from(p: TimeSeriesPoint) -> Self {
        (p.secs, p.wpm)
    }
}
