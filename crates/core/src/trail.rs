use crate::log::EventLog;

/// How far back, in milliseconds, the scrolling press trail reaches.
pub const TRAIL_WINDOW_MS: u64 = 1_000;

/// Project recent presses onto a trail of `width` cells.
///
/// Yields one offset per press inside [`TRAIL_WINDOW_MS`], newest first:
/// 0 at the origin for a press that just happened, sweeping toward `width`
/// as it ages out.  The scan stops at the first press past the window, so
/// the cost is bounded by the trail window rather than the whole log.
///
/// A read-only projection; nothing here holds state.
pub fn project(log: &EventLog, now: u64, width: u16) -> impl Iterator<Item = u16> + '_ {
    log.iter()
        .map(move |ts| now.saturating_sub(ts))
        .take_while(|&age| age < TRAIL_WINDOW_MS)
        .map(move |age| (age * width as u64 / TRAIL_WINDOW_MS) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ages_scale_linearly_across_the_trail() {
        let mut log = EventLog::new();
        log.record(500);
        log.record(750);
        log.record(1_000);

        let positions: Vec<u16> = project(&log, 1_000, 40).collect();
        // Newest first: ages 0, 250, 500 over a 40-cell trail.
        assert_eq!(positions, vec![0, 10, 20]);
    }

    #[test]
    fn presses_at_or_past_the_window_are_excluded() {
        let mut log = EventLog::new();
        log.record(0);
        log.record(1);
        log.record(600);

        let positions: Vec<u16> = project(&log, 1_000, 40).collect();
        // age 1_000 (t=0) is out; age 999 (t=1) is the last one in.
        assert_eq!(positions.len(), 2);
        assert!(positions.iter().all(|&p| p < 40));
    }

    #[test]
    fn future_timestamp_clamps_to_the_origin() {
        let mut log = EventLog::new();
        log.record(1_200);

        let positions: Vec<u16> = project(&log, 1_000, 40).collect();
        assert_eq!(positions, vec![0]);
    }

    #[test]
    fn empty_log_projects_nothing() {
        let log = EventLog::new();
        assert_eq!(project(&log, 5_000, 40).count(), 0);
    }
}
