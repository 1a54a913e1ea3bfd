use foundation::time::Time;

/// A cancellable repeating timer for the cooperative event loop.
///
/// Invariants enforced by this type rather than by caller discipline:
/// - At most one schedule is live at a time. `start` while active cancels
///   the previous schedule first and bumps the generation counter, so a
///   stale schedule can never fire alongside a fresh one.
/// - Ticks are only produced by `poll`, on the caller's thread. There is
///   no background execution.
#[derive(Debug)]
pub struct Ticker {
    interval_s: f64,
    generation: u64,
    next_due: Option<Time>,
}

impl Ticker {
    /// `interval_s` must be positive; it is clamped to a small floor to
    /// keep `poll` loops finite.
    pub fn new(interval_s: f64) -> Self {
        Self {
            interval_s: interval_s.max(1e-6),
            generation: 0,
            next_due: None,
        }
    }

    pub fn interval_s(&self) -> f64 {
        self.interval_s
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Generation of the current (or most recent) schedule. Each `start`
    /// produces a new generation, including restarts while active.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts (or restarts) the schedule. The first tick is due one full
    /// interval after `now`. Returns the new generation.
    pub fn start(&mut self, now: Time) -> u64 {
        self.generation += 1;
        self.next_due = Some(now.advanced_by(self.interval_s));
        self.generation
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Number of ticks due at `now`; advances the schedule past `now`.
    /// Returns 0 when inactive.
    pub fn poll(&mut self, now: Time) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut ticks = 0u32;
        while due <= now {
            ticks += 1;
            due = due.advanced_by(self.interval_s);
        }
        self.next_due = Some(due);
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::Ticker;
    use foundation::time::Time;

    #[test]
    fn inactive_ticker_never_ticks() {
        let mut t = Ticker::new(0.5);
        assert!(!t.is_active());
        assert_eq!(t.poll(Time(100.0)), 0);
    }

    #[test]
    fn polls_due_ticks_and_advances() {
        let mut t = Ticker::new(0.5);
        t.start(Time::ZERO);
        assert_eq!(t.poll(Time(0.4)), 0);
        assert_eq!(t.poll(Time(0.5)), 1);
        assert_eq!(t.poll(Time(0.5)), 0);
        // Catch-up: two intervals elapsed since the last poll.
        assert_eq!(t.poll(Time(1.5)), 2);
    }

    #[test]
    fn cancel_stops_ticking() {
        let mut t = Ticker::new(0.1);
        t.start(Time::ZERO);
        t.cancel();
        assert!(!t.is_active());
        assert_eq!(t.poll(Time(10.0)), 0);
    }

    #[test]
    fn restart_replaces_schedule_and_bumps_generation() {
        let mut t = Ticker::new(1.0);
        let g1 = t.start(Time::ZERO);
        // Half an interval elapses, then the schedule is replaced.
        let g2 = t.start(Time(0.5));
        assert!(g2 > g1);
        // The old schedule (due at 1.0) must not fire; the new one is due at 1.5.
        assert_eq!(t.poll(Time(1.0)), 0);
        assert_eq!(t.poll(Time(1.5)), 1);
    }
}
