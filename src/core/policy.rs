use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{parse_time, parse_work_duration};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Deployment-specific thresholds for the lateness and short-shift flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendancePolicy {
    /// Check-ins strictly after this time of day are late.
    pub late_threshold: NaiveTime,
    /// Shifts strictly shorter than this are short.
    pub min_work: Duration,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            late_threshold: NaiveTime::from_hms_opt(8, 45, 0).unwrap_or(NaiveTime::MIN),
            min_work: Duration::minutes(8 * 60 + 30),
        }
    }
}

impl AttendancePolicy {
    pub fn new(late_threshold: NaiveTime, min_work: Duration) -> Self {
        Self {
            late_threshold,
            min_work,
        }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let late_threshold = parse_time(&cfg.late_threshold)
            .ok_or_else(|| AppError::InvalidTime(cfg.late_threshold.clone()))?;
        let min_work = parse_work_duration(&cfg.min_work_duration)?;

        Ok(Self::new(late_threshold, min_work))
    }

    /// The lateness threshold anchored to a calendar day.
    pub fn daily_threshold(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.late_threshold)
    }

    pub fn is_late(&self, at: NaiveDateTime) -> bool {
        at > self.daily_threshold(at.date())
    }

    pub fn is_short_shift(&self, elapsed: Duration) -> bool {
        elapsed < self.min_work
    }
}
