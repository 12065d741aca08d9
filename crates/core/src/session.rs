use crate::event::InputEvent;
use crate::log::EventLog;
use crate::rate::{RateAggregator, RateSnapshot, UpdateMode};
use crate::trail;

/// Default minimum time, in milliseconds, between full (displayed-rate)
/// recomputations.
pub const DEFAULT_UPDATE_RATE_MS: u64 = 100;

/// Whether a controller is currently bound.
///
/// Deliberately independent of the input backend's own event enumeration;
/// the session only ever consumes the two transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// A pad is attached and presses are flowing.
    Bound,
    /// No pad right now.  The log and best rates are preserved so a
    /// reconnect resumes with history intact.
    #[default]
    Unbound,
}

impl ControllerState {
    fn bind(&mut self) {
        *self = ControllerState::Bound;
    }

    fn unbind(&mut self) {
        *self = ControllerState::Unbound;
    }

    pub fn is_bound(self) -> bool {
        self == ControllerState::Bound
    }
}

/// Read-only view of the session handed to the presentation layer once per
/// iteration.  The presentation owns no domain state.
#[derive(Debug, Clone, Copy)]
pub struct SessionView {
    /// Current and best rates for every interval.
    pub rates: RateSnapshot,
    /// Wall-time since session start; display formatting only.
    pub elapsed_ms: u64,
    /// `false` means show the no-controller fallback instead of data.
    pub controller_bound: bool,
}

/// Single-writer owner of the event log and aggregated rates.
///
/// Driven by one cooperative loop: input notifications land through
/// [`Session::handle_event`], and [`Session::tick`] advances the
/// prune/update cadence once per iteration.
#[derive(Debug)]
pub struct Session {
    log: EventLog,
    rates: RateAggregator,
    controller: ControllerState,
    visible: bool,
    running: bool,
    update_rate_ms: u64,
    last_full_update: u64,
}

impl Session {
    pub fn new(update_rate_ms: u64) -> Self {
        Self {
            log: EventLog::new(),
            rates: RateAggregator::new(),
            controller: ControllerState::default(),
            visible: true,
            running: true,
            update_rate_ms,
            last_full_update: 0,
        }
    }

    /// Apply one input notification.
    ///
    /// Presses are recorded immediately, independent of the update cadence;
    /// every reported press counts exactly once.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press(timestamp) => self.log.record(timestamp),
            InputEvent::ControllerConnected => self.controller.bind(),
            InputEvent::ControllerDisconnected => self.controller.unbind(),
            InputEvent::FocusGained => self.visible = true,
            InputEvent::FocusLost => self.visible = false,
            InputEvent::Quit => self.running = false,
        }
    }

    /// Advance one loop iteration at `now` (milliseconds since session
    /// start).
    ///
    /// The log is pruned on every call so the horizon bound holds
    /// continuously.  A full rate update runs once per cadence period; the
    /// iterations in between run best-only updates so the max column never
    /// misses a spike.
    pub fn tick(&mut self, now: u64) {
        self.log.prune(now);
        if now > self.last_full_update + self.update_rate_ms {
            self.rates.update(now, &self.log, UpdateMode::Full);
            self.last_full_update = now;
        } else {
            self.rates.update(now, &self.log, UpdateMode::BestOnly);
        }
    }

    /// Snapshot for the presentation layer.  Timestamps are anchored at
    /// session start, so `now` doubles as the elapsed display time.
    pub fn view(&self, now: u64) -> SessionView {
        SessionView {
            rates: self.rates.snapshot(),
            elapsed_ms: now,
            controller_bound: self.controller.is_bound(),
        }
    }

    /// Lazy trail positions for presses inside the display window.
    pub fn trail(&self, now: u64, width: u16) -> impl Iterator<Item = u16> + '_ {
        trail::project(&self.log, now, width)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mash(session: &mut Session, timestamps: &[u64]) {
        for &ts in timestamps {
            session.handle_event(InputEvent::Press(ts));
        }
    }

    #[test]
    fn full_updates_run_on_the_cadence_only() {
        let mut session = Session::new(100);
        mash(&mut session, &[0, 100, 200, 300, 400, 500, 600, 700, 800, 900]);

        session.tick(101);
        let first = session.view(101);
        assert_eq!(first.rates.current[0], 10.0);

        // Two more presses land between full updates.  The best-only tick
        // sees them; the displayed rate does not move yet.
        mash(&mut session, &[110, 120]);
        session.tick(150);
        let between = session.view(150);
        assert_eq!(between.rates.current[0], 10.0);
        assert_eq!(between.rates.best[0], 12.0);

        // The next cadence boundary folds them into the displayed rate.
        session.tick(202);
        let after = session.view(202);
        assert_eq!(after.rates.current[0], 12.0);
    }

    #[test]
    fn disconnect_preserves_history_and_best_rates() {
        let mut session = Session::new(100);
        mash(&mut session, &[0, 100, 200, 300, 400, 500, 600, 700, 800, 900]);
        session.handle_event(InputEvent::ControllerConnected);
        session.tick(101);

        session.handle_event(InputEvent::ControllerDisconnected);
        let lost = session.view(200);
        assert!(!lost.controller_bound);

        session.handle_event(InputEvent::ControllerConnected);
        let back = session.view(300);
        assert!(back.controller_bound);
        assert_eq!(back.rates.best[0], 10.0);
    }

    #[test]
    fn starts_unbound_with_zero_rates() {
        let mut session = Session::new(100);
        session.tick(101);
        let view = session.view(101);
        assert!(!view.controller_bound);
        assert!(view.rates.current.iter().all(|&r| r == 0.0));
    }

    #[test]
    fn focus_events_toggle_visibility() {
        let mut session = Session::new(100);
        assert!(session.is_visible());
        session.handle_event(InputEvent::FocusLost);
        assert!(!session.is_visible());

        // Hidden sessions still aggregate.
        mash(&mut session, &[10, 20, 30]);
        session.tick(101);
        assert!(session.view(101).rates.best[0] > 0.0);

        session.handle_event(InputEvent::FocusGained);
        assert!(session.is_visible());
    }

    #[test]
    fn quit_stops_the_session() {
        let mut session = Session::new(100);
        assert!(session.is_running());
        session.handle_event(InputEvent::Quit);
        assert!(!session.is_running());
    }

    #[test]
    fn tick_prunes_past_the_horizon() {
        let mut session = Session::new(100);
        mash(&mut session, &[0]);
        session.tick(50_000);
        assert_eq!(session.trail(50_000, 40).count(), 0);
        assert_eq!(session.view(50_000).rates.current[0], 0.0);
    }
}
