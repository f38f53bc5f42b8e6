use crate::core::store::{SqliteStore, StateStore};
use crate::db::{kv, practices, saved_quotes};
use crate::errors::AppResult;
use crate::models::CheckInState;
use chrono::NaiveDate;
use rusqlite::Connection;

#[derive(Debug, Clone)]
pub struct ProfileStats {
    pub total_practices: i64,
    pub completed_practices: i64,
    pub state: CheckInState,
    /// Streak as of today (0 once a day was missed).
    pub current_streak: u32,
    pub longest_streak: u32,
    pub karma_points: i64,
    pub saved_quotes: i64,
}

impl ProfileStats {
    pub fn collect(conn: &Connection, today: NaiveDate) -> AppResult<Self> {
        let (total_practices, completed_practices) = practices::counts(conn)?;
        let karma_points = kv::karma_points(conn)?;
        let saved_quotes = saved_quotes::count(conn)?;

        let store = SqliteStore::new(conn);
        let state = store.load()?;
        let longest_streak = store.longest_streak()?.max(state.current_streak);

        Ok(Self {
            total_practices,
            completed_practices,
            state,
            current_streak: state.live_streak(today),
            longest_streak,
            karma_points,
            saved_quotes,
        })
    }
}
