//! Daily check-in streak calculator.
//!
//! Works at calendar-day granularity: two check-ins at 23:59 and 00:01 are on
//! consecutive days even though only two minutes apart.

use crate::models::{CheckInState, Outcome};
use chrono::NaiveDateTime;

pub struct StreakTracker;

impl StreakTracker {
    /// Apply one check-in attempt made at `now` to `state`.
    ///
    /// Pure: the result depends only on the arguments. A `now` earlier than
    /// the last check-in leaves the state untouched and reports
    /// `AlreadyCheckedInToday`; use [`StreakTracker::is_clock_regression`] to
    /// detect that case.
    pub fn check_in(state: &CheckInState, now: NaiveDateTime) -> (CheckInState, Outcome) {
        if Self::is_clock_regression(state, now) {
            return (*state, Outcome::AlreadyCheckedInToday);
        }

        let today = now.date();

        let Some(last) = state.last_date() else {
            // A missing timestamp is a fresh start whatever the stored counter says.
            return (CheckInState::new(Some(now), 1), Outcome::StreakStarted);
        };

        if last == today {
            return (*state, Outcome::AlreadyCheckedInToday);
        }

        if today.pred_opt() == Some(last) {
            let next = CheckInState::new(Some(now), state.current_streak.saturating_add(1));
            (next, Outcome::StreakExtended)
        } else {
            (CheckInState::new(Some(now), 1), Outcome::StreakReset)
        }
    }

    /// `now` precedes the recorded check-in (clock skew or caller bug).
    pub fn is_clock_regression(state: &CheckInState, now: NaiveDateTime) -> bool {
        matches!(state.last_check_in, Some(last) if now < last)
    }
}
