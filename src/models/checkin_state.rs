use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Persisted karma streak state.
///
/// `current_streak` is 0 only while `last_check_in` is `None`: a successful
/// check-in always counts today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInState {
    pub last_check_in: Option<NaiveDateTime>, // ⇔ kv['karma.checkin'].last_check_in
    pub current_streak: u32,                  // ⇔ kv['karma.checkin'].current_streak
}

impl CheckInState {
    pub fn new(last_check_in: Option<NaiveDateTime>, current_streak: u32) -> Self {
        Self {
            last_check_in,
            current_streak,
        }
    }

    /// Calendar date of the last check-in, if any.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.last_check_in.map(|ts| ts.date())
    }

    pub fn is_checked_in_on(&self, day: NaiveDate) -> bool {
        self.last_date() == Some(day)
    }

    /// Streak as seen on `today`: a streak whose last check-in is older than
    /// yesterday is already lost, even though the stored counter is untouched
    /// until the next check-in.
    pub fn live_streak(&self, today: NaiveDate) -> u32 {
        match self.last_date() {
            Some(d) if d == today || today.pred_opt() == Some(d) => self.current_streak,
            _ => 0,
        }
    }

    pub fn last_check_in_str(&self) -> String {
        self.last_check_in
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "--".to_string())
    }
}
