use crate::db::log::audit;
use crate::db::practices;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use rusqlite::Connection;

pub struct PracticeLogic;

impl PracticeLogic {
    pub fn add(conn: &Connection, name: &str, now: NaiveDateTime) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Other("practice name cannot be empty".into()));
        }

        let created_at = now.format("%Y-%m-%dT%H:%M:%S").to_string();
        let id = practices::insert(conn, name, &created_at)?;
        audit(conn, now, "practice_add", &format!("#{}", id), name);
        Ok(id)
    }

    pub fn delete(conn: &Connection, id: i64, now: NaiveDateTime) -> AppResult<()> {
        practices::delete(conn, id)?;
        audit(conn, now, "practice_del", &format!("#{}", id), "Practice deleted");
        Ok(())
    }

    pub fn toggle(conn: &Connection, id: i64, now: NaiveDateTime) -> AppResult<bool> {
        let done = practices::toggle(conn, id)?;
        let msg = if done { "Marked as done" } else { "Marked as pending" };
        audit(conn, now, "practice_done", &format!("#{}", id), msg);
        Ok(done)
    }
}
