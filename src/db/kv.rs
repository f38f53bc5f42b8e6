//! Key-value table: JSON-encoded values under string keys.

use crate::errors::AppResult;
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const KEY_CHECKIN_STATE: &str = "karma.checkin";
pub const KEY_KARMA_POINTS: &str = "karma.points";

/// Read and decode the value stored under `key`; `None` when absent.
pub fn get_json<T: DeserializeOwned>(conn: &Connection, key: &str) -> AppResult<Option<T>> {
    let raw: Option<String> = conn
        .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;

    match raw {
        Some(s) => Ok(Some(serde_json::from_str(&s)?)),
        None => Ok(None),
    }
}

/// Insert or replace the value stored under `key`.
pub fn put_json<T: Serialize + ?Sized>(
    conn: &Connection,
    key: &str,
    value: &T,
    at: NaiveDateTime,
) -> AppResult<()> {
    let encoded = serde_json::to_string(value)?;
    conn.execute(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, encoded, at.format("%Y-%m-%dT%H:%M:%S").to_string()],
    )?;
    Ok(())
}

pub fn karma_points(conn: &Connection) -> AppResult<i64> {
    Ok(get_json::<i64>(conn, KEY_KARMA_POINTS)?.unwrap_or(0))
}

pub fn add_karma_points(conn: &Connection, delta: i64, at: NaiveDateTime) -> AppResult<i64> {
    let total = karma_points(conn)?.saturating_add(delta);
    put_json(conn, KEY_KARMA_POINTS, &total, at)?;
    Ok(total)
}
