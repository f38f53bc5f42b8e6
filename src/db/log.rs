use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::NaiveDateTime;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(
    conn: &Connection,
    at: NaiveDateTime,
    operation: &str,
    target: &str,
    message: &str,
) -> AppResult<()> {
    // ISO 8601, local time of the run clock
    let now = at.format("%Y-%m-%dT%H:%M:%S").to_string();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Audit helper: a failed log write never aborts the command.
pub fn audit(conn: &Connection, at: NaiveDateTime, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, at, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
