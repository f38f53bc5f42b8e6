//! Clock provider. Everything that needs "now" receives a `&dyn Clock`, so
//! multi-day scenarios can be replayed with a fixed time.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Parse a `--at` override.
///
/// Accepted forms: `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM`, the same with
/// seconds, or a bare `YYYY-MM-DD` (taken as 12:00).
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();

    for fmt in [
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ts);
        }
    }

    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;
    let noon = NaiveTime::from_hms_opt(12, 0, 0)
        .ok_or_else(|| AppError::InvalidTime("12:00".to_string()))?;
    Ok(d.and_time(noon))
}

/// Build the clock for this run: fixed when `--at` was given, wall clock
/// otherwise.
pub fn from_override(at: Option<&str>) -> AppResult<Box<dyn Clock>> {
    match at {
        Some(s) => Ok(Box::new(FixedClock(parse_timestamp(s)?))),
        None => Ok(Box::new(SystemClock)),
    }
}
