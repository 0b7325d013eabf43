//! Repaint scheduling for a widget that mostly sits still
//!
//! egui only runs `update()` when something asks for a frame. slowPay has
//! three reasons to wake up without user input:
//!
//! 1. **Tickers** — the 1 Hz earnings refresh and the 5 Hz pointer poll.
//! 2. **Deadlines** — a pending auto-hide or the end of a slide.
//! 3. **Continuous** — a slide or drag in progress; repaint at ~60 Hz.
//!
//! Each frame the app calls [`RepaintController::begin_frame`], registers
//! whatever deadlines it has with [`RepaintController::wake_at`], and calls
//! [`RepaintController::end_frame`], which asks egui for exactly one repaint
//! at the earliest of them.

use std::time::{Duration, Instant};

/// Repaint interval while something is moving.
const CONTINUOUS_INTERVAL: Duration = Duration::from_millis(16);

/// A periodic task that fires at most once per interval and never queues
/// up missed ticks.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self { interval, next_due: None }
    }

    /// 1 Hz
    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` if the task should run now. The first poll always fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now < due => false,
            Some(due) => {
                // Stay on the original cadence unless we fell a whole interval behind
                let next = due + self.interval;
                self.next_due = Some(if next <= now { now + self.interval } else { next });
                true
            }
            None => {
                self.next_due = Some(now + self.interval);
                true
            }
        }
    }

    /// When this ticker next wants to run
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }
}

/// Controls when the egui context should request repaints.
pub struct RepaintController {
    continuous: bool,
    wake: Option<Instant>,
    frame: u64,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self { continuous: false, wake: None, frame: 0 }
    }

    /// Call at the **start** of `update()`.
    pub fn begin_frame(&mut self) {
        self.continuous = false;
        self.wake = None;
    }

    /// Keep painting at full rate for this frame's successor.
    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous |= continuous;
    }

    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    /// Make sure a frame runs no later than `at`.
    pub fn wake_at(&mut self, at: Option<Instant>) {
        if let Some(at) = at {
            self.wake = Some(self.wake.map_or(at, |w| w.min(at)));
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Delay until the next frame should run, if any.
    pub fn next_delay(&self, now: Instant) -> Option<Duration> {
        let until_wake = self.wake.map(|w| w.saturating_duration_since(now));
        if self.continuous {
            Some(until_wake.map_or(CONTINUOUS_INTERVAL, |d| d.min(CONTINUOUS_INTERVAL)))
        } else {
            until_wake
        }
    }

    /// Call at the **end** of `update()`.
    pub fn end_frame(&mut self, ctx: &egui::Context, now: Instant) {
        self.frame += 1;
        if let Some(delay) = self.next_delay(now) {
            ctx.request_repaint_after(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_first_poll_fires() {
        let t0 = Instant::now();
        let mut ticker = Ticker::every_second();
        assert!(ticker.poll(t0));
        assert!(!ticker.poll(t0 + Duration::from_millis(999)));
        assert!(ticker.poll(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn test_ticker_keeps_cadence() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(200));
        ticker.poll(t0);
        assert!(ticker.poll(t0 + Duration::from_millis(230)));
        assert_eq!(ticker.next_due(), Some(t0 + Duration::from_millis(400)));
    }

    #[test]
    fn test_ticker_does_not_stack() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(200));
        ticker.poll(t0);
        let late = t0 + Duration::from_secs(3);
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert_eq!(ticker.next_due(), Some(late + Duration::from_millis(200)));
    }

    #[test]
    fn test_controller_picks_earliest_wake() {
        let t0 = Instant::now();
        let mut rc = RepaintController::new();
        rc.begin_frame();
        rc.wake_at(Some(t0 + Duration::from_millis(800)));
        rc.wake_at(None);
        rc.wake_at(Some(t0 + Duration::from_millis(200)));
        assert_eq!(rc.next_delay(t0), Some(Duration::from_millis(200)));
    }

    #[test]
    fn test_controller_continuous_caps_delay() {
        let t0 = Instant::now();
        let mut rc = RepaintController::new();
        rc.begin_frame();
        rc.set_continuous(true);
        rc.set_continuous(false);
        rc.wake_at(Some(t0 + Duration::from_secs(1)));
        assert_eq!(rc.next_delay(t0), Some(CONTINUOUS_INTERVAL));

        rc.begin_frame();
        assert!(!rc.is_continuous());
        assert_eq!(rc.next_delay(t0), None);
    }

    #[test]
    fn test_past_wake_is_immediate() {
        let t0 = Instant::now();
        let mut rc = RepaintController::new();
        rc.begin_frame();
        rc.wake_at(Some(t0));
        assert_eq!(rc.next_delay(t0 + Duration::from_millis(5)), Some(Duration::ZERO));
    }
}
