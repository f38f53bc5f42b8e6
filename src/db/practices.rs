use crate::errors::{AppError, AppResult};
use crate::models::practice::Practice;
use rusqlite::{Connection, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<Practice> {
    Ok(Practice {
        id: row.get("id")?,
        name: row.get("name")?,
        completed: row.get::<_, i32>("completed")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn list(conn: &Connection) -> AppResult<Vec<Practice>> {
    let mut stmt =
        conn.prepare("SELECT id, name, completed, created_at FROM practices ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert(conn: &Connection, name: &str, created_at: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO practices (name, completed, created_at) VALUES (?1, 0, ?2)",
        params![name, created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM practices WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::NotFound(format!("practice #{}", id)));
    }
    Ok(())
}

/// Flip the completion flag; returns the new value.
pub fn toggle(conn: &Connection, id: i64) -> AppResult<bool> {
    let n = conn.execute(
        "UPDATE practices SET completed = 1 - completed WHERE id = ?1",
        [id],
    )?;
    if n == 0 {
        return Err(AppError::NotFound(format!("practice #{}", id)));
    }
    let completed: i32 =
        conn.query_row("SELECT completed FROM practices WHERE id = ?1", [id], |row| {
            row.get(0)
        })?;
    Ok(completed == 1)
}

/// (total, completed)
pub fn counts(conn: &Connection) -> AppResult<(i64, i64)> {
    Ok(conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM practices",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?)
}
