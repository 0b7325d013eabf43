//! Earnings engine
//!
//! A pure function of the time of day and the schedule. Nothing is cached
//! between ticks; the result view simply calls [`compute`] once a second.
//! Amounts keep full `f64` precision here and are rounded to cents only by
//! [`format_amount`].

use chrono::NaiveTime;

use crate::schedule::WorkScheduleConfig;

/// Working or not, as shown under the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkStatus {
    Working,
    OffWork,
}

impl WorkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::Working => "working",
            WorkStatus::OffWork => "off work",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarningsSnapshot {
    /// Seconds of the configured workday already behind us, clamped to the day
    pub seconds_worked: i64,
    pub status: WorkStatus,
    /// Seconds until clock-out, zero once past it
    pub countdown_seconds: i64,
    pub earned_amount: f64,
    /// The full day's wage
    pub day_total_amount: f64,
    /// Filled fraction of the progress bar, in [0, 1]
    pub progress_ratio: f64,
}

impl EarningsSnapshot {
    pub const fn zero() -> Self {
        Self {
            seconds_worked: 0,
            status: WorkStatus::OffWork,
            countdown_seconds: 0,
            earned_amount: 0.0,
            day_total_amount: 0.0,
            progress_ratio: 0.0,
        }
    }

    pub fn countdown_text(&self) -> String {
        format_countdown(self.countdown_seconds)
    }
}

impl Default for EarningsSnapshot {
    fn default() -> Self {
        Self::zero()
    }
}

/// Seconds from `from` to `to`, negative when `to` comes first.
fn secs_between(from: NaiveTime, to: NaiveTime) -> i64 {
    to.signed_duration_since(from).num_seconds()
}

/// Derive everything the result view shows for time-of-day `now`.
///
/// Both ends of the workday count as working. A workday of zero or negative
/// length yields [`EarningsSnapshot::zero`]; zero work days still produce the
/// countdown and progress, with both amounts left at zero.
pub fn compute(now: NaiveTime, cfg: &WorkScheduleConfig) -> EarningsSnapshot {
    let total = cfg.total_work_seconds();
    if total <= 0 {
        return EarningsSnapshot::zero();
    }

    let seconds_worked = if now < cfg.start_time {
        0
    } else if now > cfg.end_time {
        total
    } else {
        secs_between(cfg.start_time, now)
    };

    let status = if cfg.start_time <= now && now <= cfg.end_time {
        WorkStatus::Working
    } else {
        WorkStatus::OffWork
    };

    let countdown_seconds = secs_between(now, cfg.end_time).max(0);
    let progress_ratio = (seconds_worked as f64 / total as f64).min(1.0);

    let (earned_amount, day_total_amount) = if cfg.work_days_per_month == 0 {
        (0.0, 0.0)
    } else {
        let per_second = cfg.salary / f64::from(cfg.work_days_per_month) / total as f64;
        (per_second * seconds_worked as f64, per_second * total as f64)
    };

    EarningsSnapshot {
        seconds_worked,
        status,
        countdown_seconds,
        earned_amount,
        day_total_amount,
        progress_ratio,
    }
}

/// `HH:MM:SS`; hours are not wrapped.
pub fn format_countdown(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

pub fn format_amount(amount: f64) -> String {
    format!("¥{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn office() -> WorkScheduleConfig {
        WorkScheduleConfig {
            salary: 6600.0,
            work_days_per_month: 22,
            start_time: t(8, 30, 0),
            end_time: t(17, 30, 0),
        }
    }

    #[test]
    fn test_midday_example() {
        let snap = compute(t(13, 0, 0), &office());
        assert_eq!(snap.seconds_worked, 16200);
        assert_eq!(snap.status, WorkStatus::Working);
        assert_eq!(snap.countdown_seconds, 16200);
        assert!((snap.earned_amount - 150.0).abs() < 1e-9);
        assert!((snap.day_total_amount - 300.0).abs() < 1e-9);
        assert_eq!(snap.progress_ratio, 0.5);
        assert_eq!(format_amount(snap.earned_amount), "¥150.00");
        assert_eq!(snap.countdown_text(), "04:30:00");
    }

    #[test]
    fn test_before_start() {
        let cfg = office();
        for now in [t(0, 0, 0), t(6, 15, 30), t(8, 29, 59)] {
            let snap = compute(now, &cfg);
            assert_eq!(snap.seconds_worked, 0);
            assert_eq!(snap.status, WorkStatus::OffWork);
            assert_eq!(snap.earned_amount, 0.0);
            assert_eq!(snap.progress_ratio, 0.0);
        }
        assert_eq!(compute(t(8, 29, 59), &cfg).countdown_seconds, 32401);
    }

    #[test]
    fn test_after_end() {
        let cfg = office();
        for now in [t(17, 30, 1), t(20, 0, 0), t(23, 59, 59)] {
            let snap = compute(now, &cfg);
            assert_eq!(snap.seconds_worked, cfg.total_work_seconds());
            assert_eq!(snap.countdown_seconds, 0);
            assert_eq!(snap.status, WorkStatus::OffWork);
            assert_eq!(snap.progress_ratio, 1.0);
            assert_eq!(snap.earned_amount, snap.day_total_amount);
        }
    }

    #[test]
    fn test_boundaries_count_as_working() {
        let cfg = office();
        let open = compute(t(8, 30, 0), &cfg);
        assert_eq!(open.status, WorkStatus::Working);
        assert_eq!(open.seconds_worked, 0);

        let close = compute(t(17, 30, 0), &cfg);
        assert_eq!(close.status, WorkStatus::Working);
        assert_eq!(close.countdown_seconds, 0);
        assert_eq!(close.earned_amount, close.day_total_amount);
    }

    #[test]
    fn test_end_of_day_has_no_drift() {
        let configs = [
            (1234.56, 21, t(9, 0, 0), t(17, 0, 0)),
            (99999.99, 23, t(7, 45, 0), t(19, 10, 0)),
            (0.01, 1, t(0, 0, 0), t(23, 59, 0)),
        ];
        for (salary, days, start, end) in configs {
            let cfg = WorkScheduleConfig { salary, work_days_per_month: days, start_time: start, end_time: end };
            let snap = compute(end, &cfg);
            assert_eq!(snap.earned_amount, snap.day_total_amount);
        }
    }

    #[test]
    fn test_progress_is_monotonic() {
        let cfg = office();
        let mut last = 0.0;
        let mut now = cfg.start_time;
        while now <= cfg.end_time {
            let snap = compute(now, &cfg);
            assert!(snap.progress_ratio >= last);
            assert!((0.0..=1.0).contains(&snap.progress_ratio));
            last = snap.progress_ratio;
            now += chrono::Duration::seconds(97);
        }
    }

    #[test]
    fn test_compute_is_pure() {
        let cfg = office();
        assert_eq!(compute(t(10, 11, 12), &cfg), compute(t(10, 11, 12), &cfg));
    }

    #[test]
    fn test_degenerate_configs() {
        let mut cfg = office();
        cfg.end_time = cfg.start_time;
        assert_eq!(compute(t(8, 30, 0), &cfg), EarningsSnapshot::zero());

        cfg.end_time = t(7, 0, 0);
        assert_eq!(compute(t(12, 0, 0), &cfg), EarningsSnapshot::zero());

        let mut cfg = office();
        cfg.work_days_per_month = 0;
        let snap = compute(t(13, 0, 0), &cfg);
        assert_eq!(snap.earned_amount, 0.0);
        assert_eq!(snap.day_total_amount, 0.0);
        assert_eq!(snap.progress_ratio, 0.5);
        assert_eq!(snap.status, WorkStatus::Working);
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(0), "00:00:00");
        assert_eq!(format_countdown(59), "00:00:59");
        assert_eq!(format_countdown(3661), "01:01:01");
        assert_eq!(format_countdown(86399), "23:59:59");
        assert_eq!(format_countdown(-5), "00:00:00");
    }

    #[test]
    fn test_format_amount_rounds_to_cents() {
        assert_eq!(format_amount(0.0), "¥0.00");
        assert_eq!(format_amount(149.999), "¥150.00");
        assert_eq!(format_amount(12.344), "¥12.34");
    }
}
