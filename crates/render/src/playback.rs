use foundation::time::Time;
use runtime::Ticker;

/// Year scrubber tick interval, seconds.
pub const YEAR_TICK_INTERVAL_S: f64 = 0.5;

/// The play/pause year animation driver.
///
/// Independent of the rotation ticker; owning its own [`Ticker`] keeps the
/// one-live-schedule invariant per driver. The session decides what a tick
/// means (advance the year or auto-stop at the range end).
#[derive(Debug)]
pub struct YearAnimator {
    ticker: Ticker,
    playing: bool,
}

impl Default for YearAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl YearAnimator {
    pub fn new() -> Self {
        Self {
            ticker: Ticker::new(YEAR_TICK_INTERVAL_S),
            playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self, now: Time) {
        self.ticker.start(now);
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.ticker.cancel();
        self.playing = false;
    }

    /// Due ticks at `now`; 0 while paused.
    pub fn poll(&mut self, now: Time) -> u32 {
        if !self.playing {
            return 0;
        }
        self.ticker.poll(now)
    }
}

#[cfg(test)]
mod tests {
    use super::{YEAR_TICK_INTERVAL_S, YearAnimator};
    use foundation::time::Time;

    #[test]
    fn paused_animator_never_ticks() {
        let mut a = YearAnimator::new();
        assert_eq!(a.poll(Time(10.0)), 0);
        assert!(!a.is_playing());
    }

    #[test]
    fn ticks_every_half_second_while_playing() {
        let mut a = YearAnimator::new();
        a.play(Time::ZERO);
        assert_eq!(a.poll(Time(0.4)), 0);
        assert_eq!(a.poll(Time(YEAR_TICK_INTERVAL_S)), 1);
        assert_eq!(a.poll(Time(2.0)), 3);
    }

    #[test]
    fn pause_stops_ticks() {
        let mut a = YearAnimator::new();
        a.play(Time::ZERO);
        a.pause();
        assert_eq!(a.poll(Time(5.0)), 0);
    }
}
