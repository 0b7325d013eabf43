use chrono::{Local, NaiveTime, Timelike};

/// Source of the current time of day. Swapped for [`FixedClock`] in tests.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Wall clock in the local timezone, whole seconds only.
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveTime {
        let now = Local::now().time();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_clock_drops_subseconds() {
        assert_eq!(LocalClock.now().nanosecond(), 0);
    }

    #[test]
    fn test_fixed_clock() {
        let t = NaiveTime::from_hms_opt(9, 15, 0).unwrap();
        assert_eq!(FixedClock(t).now(), t);
    }
}
