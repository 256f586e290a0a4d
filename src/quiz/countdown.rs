/// Seconds each question stays on screen.
pub const DEFAULT_QUESTION_SECONDS: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Not running; the tick was ignored.
    Idle,
    Running(u32),
    /// Reached zero on this tick. Reported once.
    Expired,
}

/// Per-question countdown, advanced one unit per tick by the host loop.
#[derive(Debug, Clone)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn new(duration: u32) -> Self {
        let duration = duration.max(1);
        Self {
            duration,
            remaining: duration,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.remaining = self.duration;
        self.running = true;
    }

    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) -> CountdownTick {
        if !self.running {
            return CountdownTick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            CountdownTick::Expired
        } else {
            CountdownTick::Running(self.remaining)
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Fraction of the budget left, for progress gauges.
    pub fn ratio(&self) -> f64 {
        self.remaining as f64 / self.duration as f64
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTION_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_full_duration() {
        let mut countdown = Countdown::new(3);
        countdown.start();
        assert_eq!(countdown.tick(), CountdownTick::Running(2));
        assert_eq!(countdown.tick(), CountdownTick::Running(1));
        assert_eq!(countdown.tick(), CountdownTick::Expired);
        assert_eq!(countdown.tick(), CountdownTick::Idle);
    }

    #[test]
    fn cancelled_countdown_ignores_ticks() {
        let mut countdown = Countdown::default();
        countdown.start();
        countdown.cancel();
        assert_eq!(countdown.tick(), CountdownTick::Idle);
        assert_eq!(countdown.remaining(), DEFAULT_QUESTION_SECONDS);
    }

    #[test]
    fn restart_resets_remaining() {
        let mut countdown = Countdown::new(5);
        countdown.start();
        countdown.tick();
        countdown.tick();
        countdown.start();
        assert_eq!(countdown.remaining(), 5);
        assert!(countdown.is_running());
    }

    #[test]
    fn zero_duration_is_bumped_to_one() {
        let mut countdown = Countdown::new(0);
        countdown.start();
        assert_eq!(countdown.tick(), CountdownTick::Expired);
    }
}
