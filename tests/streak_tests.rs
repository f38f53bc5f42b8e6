use gitawisdom::core::streak::StreakTracker;
use gitawisdom::models::{CheckInState, Outcome};

mod common;
use common::ts;

#[test]
fn first_check_in_starts_streak() {
    let (state, outcome) = StreakTracker::check_in(&CheckInState::default(), ts("2024-01-01 09:00"));

    assert_eq!(outcome, Outcome::StreakStarted);
    assert_eq!(state.current_streak, 1);
    assert_eq!(state.last_check_in, Some(ts("2024-01-01 09:00")));
}

#[test]
fn same_day_check_in_is_noop() {
    let (a, _) = StreakTracker::check_in(&CheckInState::default(), ts("2024-01-01 09:00"));
    let (b, outcome) = StreakTracker::check_in(&a, ts("2024-01-01 21:00"));

    assert_eq!(outcome, Outcome::AlreadyCheckedInToday);
    assert_eq!(b, a);
}

#[test]
fn next_day_extends_streak() {
    let (a, _) = StreakTracker::check_in(&CheckInState::default(), ts("2024-01-01 09:00"));
    let (c, outcome) = StreakTracker::check_in(&a, ts("2024-01-02 08:00"));

    assert_eq!(outcome, Outcome::StreakExtended);
    assert_eq!(c.current_streak, 2);
    assert_eq!(c.last_check_in, Some(ts("2024-01-02 08:00")));
}

#[test]
fn gap_resets_streak() {
    let (a, _) = StreakTracker::check_in(&CheckInState::default(), ts("2024-01-01 09:00"));
    let (c, _) = StreakTracker::check_in(&a, ts("2024-01-02 08:00"));
    let (d, outcome) = StreakTracker::check_in(&c, ts("2024-01-05 08:00"));

    assert_eq!(outcome, Outcome::StreakReset);
    assert_eq!(d.current_streak, 1);
    assert_eq!(d.last_check_in, Some(ts("2024-01-05 08:00")));
}

#[test]
fn minutes_apart_across_midnight_count_as_consecutive_days() {
    let state = CheckInState::new(Some(ts("2024-03-09 23:59")), 4);
    let (next, outcome) = StreakTracker::check_in(&state, ts("2024-03-10 00:01"));

    assert_eq!(outcome, Outcome::StreakExtended);
    assert_eq!(next.current_streak, 5);
}

#[test]
fn almost_two_days_apart_on_consecutive_dates_still_extends() {
    let state = CheckInState::new(Some(ts("2024-03-09 00:00")), 2);
    let (next, outcome) = StreakTracker::check_in(&state, ts("2024-03-10 23:59"));

    assert_eq!(outcome, Outcome::StreakExtended);
    assert_eq!(next.current_streak, 3);
}

#[test]
fn year_and_leap_day_boundaries_extend() {
    let state = CheckInState::new(Some(ts("2023-12-31 20:00")), 10);
    let (next, outcome) = StreakTracker::check_in(&state, ts("2024-01-01 07:00"));
    assert_eq!(outcome, Outcome::StreakExtended);
    assert_eq!(next.current_streak, 11);

    let state = CheckInState::new(Some(ts("2024-02-28 20:00")), 1);
    let (next, _) = StreakTracker::check_in(&state, ts("2024-02-29 07:00"));
    let (next, outcome) = StreakTracker::check_in(&next, ts("2024-03-01 07:00"));
    assert_eq!(outcome, Outcome::StreakExtended);
    assert_eq!(next.current_streak, 3);
}

#[test]
fn missing_timestamp_always_starts_at_one() {
    for stale in [0, 1, 7, 365] {
        let state = CheckInState::new(None, stale);
        let (next, outcome) = StreakTracker::check_in(&state, ts("2024-06-01 12:00"));

        assert_eq!(outcome, Outcome::StreakStarted);
        assert_eq!(next.current_streak, 1);
    }
}

#[test]
fn clock_regression_leaves_state_untouched() {
    let state = CheckInState::new(Some(ts("2024-01-05 08:00")), 3);
    let earlier = ts("2024-01-03 10:00");

    assert!(StreakTracker::is_clock_regression(&state, earlier));

    let (next, outcome) = StreakTracker::check_in(&state, earlier);
    assert_eq!(outcome, Outcome::AlreadyCheckedInToday);
    assert_eq!(next, state);
}

#[test]
fn earlier_time_on_same_day_is_also_regression() {
    let state = CheckInState::new(Some(ts("2024-01-05 18:00")), 3);

    assert!(StreakTracker::is_clock_regression(&state, ts("2024-01-05 07:00")));
    assert!(!StreakTracker::is_clock_regression(&state, ts("2024-01-05 18:00")));
    assert!(!StreakTracker::is_clock_regression(&CheckInState::default(), ts("1970-01-01 00:00")));
}

#[test]
fn streak_saturates_instead_of_overflowing() {
    let state = CheckInState::new(Some(ts("2024-01-01 09:00")), u32::MAX);
    let (next, outcome) = StreakTracker::check_in(&state, ts("2024-01-02 09:00"));

    assert_eq!(outcome, Outcome::StreakExtended);
    assert_eq!(next.current_streak, u32::MAX);
}

#[test]
fn streak_is_at_least_one_after_any_recorded_check_in() {
    let mut state = CheckInState::default();
    let days = [
        "2024-01-01 09:00",
        "2024-01-02 09:00",
        "2024-01-02 10:00",
        "2024-01-04 09:00",
        "2024-01-05 23:00",
        "2024-01-06 00:30",
        "2024-02-01 12:00",
    ];

    for d in days {
        let now = ts(d);
        let (next, outcome) = StreakTracker::check_in(&state, now);
        if outcome.is_recorded() {
            assert!(next.current_streak >= 1);
            assert_eq!(next.last_check_in, Some(now));
        } else {
            assert_eq!(next, state);
        }
        state = next;
    }

    assert_eq!(state.current_streak, 1);
}

#[test]
fn live_streak_drops_to_zero_after_a_missed_day() {
    let state = CheckInState::new(Some(ts("2024-01-10 09:00")), 6);

    assert_eq!(state.live_streak(ts("2024-01-10 00:00").date()), 6);
    assert_eq!(state.live_streak(ts("2024-01-11 00:00").date()), 6);
    assert_eq!(state.live_streak(ts("2024-01-12 00:00").date()), 0);
    assert_eq!(CheckInState::default().live_streak(ts("2024-01-12 00:00").date()), 0);
}
