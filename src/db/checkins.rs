//! Check-in history: one row per recorded (state-changing) check-in.

use crate::errors::{AppError, AppResult};
use crate::models::Outcome;
use chrono::NaiveDateTime;
use rusqlite::{Connection, Row, params};

pub const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct CheckInRow {
    pub id: i64,
    pub at: NaiveDateTime,
    pub streak: u32,
    pub outcome: Outcome,
}

fn map_row(row: &Row) -> rusqlite::Result<CheckInRow> {
    let at_str: String = row.get("at")?;
    let at = NaiveDateTime::parse_from_str(&at_str, TS_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(at_str.clone())),
        )
    })?;

    let outcome_str: String = row.get("outcome")?;
    let outcome = Outcome::from_db_str(&outcome_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid outcome: {}", outcome_str))),
        )
    })?;

    Ok(CheckInRow {
        id: row.get("id")?,
        at,
        streak: row.get("streak")?,
        outcome,
    })
}

pub fn insert(conn: &Connection, at: NaiveDateTime, streak: u32, outcome: Outcome) -> AppResult<()> {
    conn.execute(
        "INSERT INTO checkins (at, streak, outcome) VALUES (?1, ?2, ?3)",
        params![at.format(TS_FORMAT).to_string(), streak, outcome.to_db_str()],
    )?;
    Ok(())
}

/// Most recent first; `limit = None` returns the whole history.
pub fn list(conn: &Connection, limit: Option<usize>) -> AppResult<Vec<CheckInRow>> {
    // SQLite treats a negative LIMIT as no limit
    let limit = limit.map(|l| i64::try_from(l).unwrap_or(i64::MAX)).unwrap_or(-1);
    let mut stmt = conn.prepare(
        "SELECT id, at, streak, outcome FROM checkins
         ORDER BY at DESC, id DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map([limit], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn longest_streak(conn: &Connection) -> AppResult<u32> {
    let max: Option<u32> =
        conn.query_row("SELECT MAX(streak) FROM checkins", [], |row| row.get(0))?;
    Ok(max.unwrap_or(0))
}

pub fn count(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM checkins", [], |row| row.get(0))?)
}
