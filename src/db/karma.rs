use crate::errors::{AppError, AppResult};
use crate::models::karma_task::KarmaTask;
use crate::utils::date::{format_date, parse_date};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<KarmaTask> {
    let completed_on: Option<String> = row.get("completed_on")?;
    Ok(KarmaTask {
        id: row.get("id")?,
        title: row.get("title")?,
        points: row.get("points")?,
        completed_on: completed_on.as_deref().and_then(parse_date),
    })
}

pub fn list(conn: &Connection) -> AppResult<Vec<KarmaTask>> {
    let mut stmt =
        conn.prepare("SELECT id, title, points, completed_on FROM karma_tasks ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get(conn: &Connection, id: i64) -> AppResult<KarmaTask> {
    conn.query_row(
        "SELECT id, title, points, completed_on FROM karma_tasks WHERE id = ?1",
        [id],
        map_row,
    )
    .optional()?
    .ok_or_else(|| AppError::NotFound(format!("karma act #{}", id)))
}

pub fn insert(conn: &Connection, title: &str, points: i64) -> AppResult<i64> {
    if points <= 0 {
        return Err(AppError::InvalidPoints(points));
    }
    conn.execute(
        "INSERT INTO karma_tasks (title, points) VALUES (?1, ?2)",
        params![title, points],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn mark_completed(conn: &Connection, id: i64, day: NaiveDate) -> AppResult<()> {
    conn.execute(
        "UPDATE karma_tasks SET completed_on = ?1 WHERE id = ?2",
        params![format_date(&day), id],
    )?;
    Ok(())
}
