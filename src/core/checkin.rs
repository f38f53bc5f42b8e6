use crate::core::store::{StateStore, Transition};
use crate::core::streak::StreakTracker;
use crate::errors::AppResult;
use crate::models::{CheckInState, Outcome};
use chrono::NaiveDateTime;

/// Everything the presentation layer needs after a check-in.
#[derive(Debug, Clone, Copy)]
pub struct CheckInReport {
    pub previous: CheckInState,
    pub state: CheckInState,
    pub outcome: Outcome,
    /// `now` was earlier than the stored check-in; nothing was changed.
    pub clock_regression: bool,
    pub longest_streak: u32,
}

/// High-level business logic for the `checkin` command.
pub struct CheckInLogic;

impl CheckInLogic {
    pub fn apply<S: StateStore>(store: &mut S, now: NaiveDateTime) -> AppResult<CheckInReport> {
        let (previous, next, outcome, clock_regression) = store.update(now, |state| {
            let regression = StreakTracker::is_clock_regression(&state, now);
            let (next, outcome) = StreakTracker::check_in(&state, now);
            Transition {
                state: next,
                record: outcome.is_recorded().then_some(outcome),
                value: (state, next, outcome, regression),
            }
        })?;

        let longest_streak = store.longest_streak()?.max(next.current_streak);

        Ok(CheckInReport {
            previous,
            state: next,
            outcome,
            clock_regression,
            longest_streak,
        })
    }
}
