use crate::log::EventLog;

/// Window lengths, in milliseconds, over which press rates are computed.
/// Fixed at build time, shortest first.
pub const INTERVALS_MS: [u64; 7] = [1_000, 2_000, 3_000, 5_000, 10_000, 20_000, 30_000];

/// Number of rate windows.
pub const NUM_INTERVALS: usize = INTERVALS_MS.len();

/// Whether an update refreshes the displayed rate or only the running maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Refresh both `current` and `best`.
    Full,
    /// Recompute rates only to raise `best`; `current` keeps its last
    /// full-update value.  Run between display refreshes so a brief spike
    /// is never missed.
    BestOnly,
}

/// Per-interval rates handed to the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateSnapshot {
    /// Presses per second as of the last full update.
    pub current: [f64; NUM_INTERVALS],
    /// Highest rate ever computed for each interval this session.
    /// Never decreases.
    pub best: [f64; NUM_INTERVALS],
}

/// Converts raw press counts into per-interval rates and tracks maxima.
#[derive(Debug, Default)]
pub struct RateAggregator {
    snapshot: RateSnapshot,
}

impl RateAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the rate over `log` for every interval as of `now`.
    ///
    /// `best` is raised unconditionally; `current` is rewritten only in
    /// [`UpdateMode::Full`].  An empty log yields all-zero rates and leaves
    /// `best` untouched.
    pub fn update(&mut self, now: u64, log: &EventLog, mode: UpdateMode) {
        for (i, &interval) in INTERVALS_MS.iter().enumerate() {
            let count = log.count_within(now, interval);
            let rate = count as f64 / interval as f64 * 1000.0;
            if rate > self.snapshot.best[i] {
                self.snapshot.best[i] = rate;
            }
            if mode == UpdateMode::Full {
                self.snapshot.current[i] = rate;
            }
        }
    }

    /// Latest rates.  `current` reflects the last full update only.
    pub fn snapshot(&self) -> RateSnapshot {
        self.snapshot
    }
}
