//! Work schedule — the four values the user types in
//!
//! `ScheduleForm` holds raw text straight from the settings page.
//! `WorkScheduleConfig` is the validated form every computation runs on.

use chrono::NaiveTime;
use thiserror::Error;

/// Display and storage format for clock-in/out times.
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("salary must be a number, got {0:?}")]
    Salary(String),
    #[error("salary must be a non-negative amount")]
    NegativeSalary,
    #[error("work days must be a whole number, got {0:?}")]
    Days(String),
    #[error("work days must be at least 1")]
    ZeroDays,
    #[error("{field} time must look like HH:MM, got {value:?}")]
    Time { field: &'static str, value: String },
    #[error("clock-out must be later than clock-in")]
    EmptyWorkday,
}

/// Validated schedule. Replaced wholesale on every save.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkScheduleConfig {
    /// Monthly salary
    pub salary: f64,
    pub work_days_per_month: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl WorkScheduleConfig {
    /// Length of the working day in seconds. Only ever non-positive for
    /// configs that bypassed `ScheduleForm::parse`.
    pub fn total_work_seconds(&self) -> i64 {
        self.end_time.signed_duration_since(self.start_time).num_seconds()
    }

    /// Check the invariants `ScheduleForm::parse` enforces on a config built
    /// some other way (e.g. read back from disk).
    pub fn validate(&self) -> Result<(), ParseError> {
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(ParseError::NegativeSalary);
        }
        if self.work_days_per_month == 0 {
            return Err(ParseError::ZeroDays);
        }
        if self.start_time >= self.end_time {
            return Err(ParseError::EmptyWorkday);
        }
        Ok(())
    }
}

/// Raw settings page input
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleForm {
    pub salary: String,
    pub days: String,
    pub start: String,
    pub end: String,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            salary: String::new(),
            days: String::new(),
            start: "08:30".to_string(),
            end: "17:30".to_string(),
        }
    }
}

impl ScheduleForm {
    /// Pre-fill the form from an applied schedule
    pub fn from_config(cfg: &WorkScheduleConfig) -> Self {
        Self {
            salary: cfg.salary.to_string(),
            days: cfg.work_days_per_month.to_string(),
            start: format_time(cfg.start_time),
            end: format_time(cfg.end_time),
        }
    }

    pub fn parse(&self) -> Result<WorkScheduleConfig, ParseError> {
        let salary_text = self.salary.trim();
        let salary: f64 = salary_text
            .parse()
            .map_err(|_| ParseError::Salary(salary_text.to_string()))?;

        let days_text = self.days.trim();
        let work_days_per_month: u32 = days_text
            .parse()
            .map_err(|_| ParseError::Days(days_text.to_string()))?;

        let cfg = WorkScheduleConfig {
            salary,
            work_days_per_month,
            start_time: parse_time("start", &self.start)?,
            end_time: parse_time("end", &self.end)?,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Parse an `HH:MM` time of day.
pub fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, ParseError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| ParseError::Time {
        field,
        value: value.to_string(),
    })
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(salary: &str, days: &str, start: &str, end: &str) -> ScheduleForm {
        ScheduleForm {
            salary: salary.into(),
            days: days.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    #[test]
    fn test_parse_valid() {
        let cfg = form(" 6600 ", "22", "08:30", "17:30").parse().unwrap();
        assert_eq!(cfg.salary, 6600.0);
        assert_eq!(cfg.work_days_per_month, 22);
        assert_eq!(cfg.start_time, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(cfg.total_work_seconds(), 32400);
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        assert_eq!(
            form("lots", "22", "08:30", "17:30").parse(),
            Err(ParseError::Salary("lots".into()))
        );
        assert_eq!(
            form("6600", "22.5", "08:30", "17:30").parse(),
            Err(ParseError::Days("22.5".into()))
        );
        assert_eq!(form("-1", "22", "08:30", "17:30").parse(), Err(ParseError::NegativeSalary));
        assert_eq!(form("NaN", "22", "08:30", "17:30").parse(), Err(ParseError::NegativeSalary));
        assert_eq!(form("6600", "0", "08:30", "17:30").parse(), Err(ParseError::ZeroDays));
    }

    #[test]
    fn test_parse_rejects_bad_times() {
        assert_eq!(
            form("6600", "22", "8.30", "17:30").parse(),
            Err(ParseError::Time { field: "start", value: "8.30".into() })
        );
        assert_eq!(
            form("6600", "22", "08:30", "25:00").parse(),
            Err(ParseError::Time { field: "end", value: "25:00".into() })
        );
        assert_eq!(form("6600", "22", "17:30", "17:30").parse(), Err(ParseError::EmptyWorkday));
        assert_eq!(form("6600", "22", "18:00", "09:00").parse(), Err(ParseError::EmptyWorkday));
    }

    #[test]
    fn test_form_from_config() {
        let cfg = form("4321.5", "20", "09:05", "18:00").parse().unwrap();
        let filled = ScheduleForm::from_config(&cfg);
        assert_eq!(filled, form("4321.5", "20", "09:05", "18:00"));
        assert_eq!(filled.parse().unwrap(), cfg);
    }

    #[test]
    fn test_default_form_times() {
        let f = ScheduleForm::default();
        assert_eq!(f.start, "08:30");
        assert_eq!(f.end, "17:30");
        assert!(f.parse().is_err());
    }
}
