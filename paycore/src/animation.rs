//! Slide animation for docking the window against a screen edge
//!
//! The widget slides its top-left corner from one position to another with a
//! quadratic ease-out. Progress is derived from wall time rather than
//! accumulated frame deltas so a stalled frame never leaves the window
//! half-way.

use egui::Pos2;
use std::time::{Duration, Instant};

/// Default slide duration
pub const SLIDE_DURATION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideAnimation {
    pub from: Pos2,
    pub to: Pos2,
    pub started: Instant,
    pub duration: Duration,
}

impl SlideAnimation {
    pub fn new(from: Pos2, to: Pos2, started: Instant, duration: Duration) -> Self {
        Self { from, to, started, duration }
    }

    /// Linear progress (0.0 to 1.0)
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Eased position at `now`; exactly `to` once finished
    pub fn position(&self, now: Instant) -> Pos2 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        lerp_pos(self.from, self.to, ease_out_quad(t))
    }

    pub fn ends_at(&self) -> Instant {
        self.started + self.duration
    }
}

/// Linear interpolation between two positions
fn lerp_pos(a: Pos2, b: Pos2, t: f32) -> Pos2 {
    Pos2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Linear interpolation between two values
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-out function for smooth deceleration
fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_endpoints() {
        let t0 = Instant::now();
        let anim = SlideAnimation::new(Pos2::new(0.0, 100.0), Pos2::new(-315.0, 100.0), t0, SLIDE_DURATION);
        assert_eq!(anim.position(t0), Pos2::new(0.0, 100.0));
        assert!(!anim.is_finished(t0));
        assert_eq!(anim.position(t0 + SLIDE_DURATION), Pos2::new(-315.0, 100.0));
        assert!(anim.is_finished(t0 + Duration::from_secs(5)));
        assert_eq!(anim.ends_at(), t0 + SLIDE_DURATION);
    }

    #[test]
    fn test_slide_eases_out() {
        let t0 = Instant::now();
        let anim = SlideAnimation::new(Pos2::ZERO, Pos2::new(100.0, 0.0), t0, Duration::from_millis(200));
        let half = anim.position(t0 + Duration::from_millis(100));
        // ease-out covers 75% of the distance in the first half
        assert!((half.x - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let t0 = Instant::now();
        let anim = SlideAnimation::new(Pos2::ZERO, Pos2::new(10.0, 10.0), t0, Duration::ZERO);
        assert!(anim.is_finished(t0));
        assert_eq!(anim.position(t0), Pos2::new(10.0, 10.0));
    }

    #[test]
    fn test_ease_out_quad() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
    }
}
