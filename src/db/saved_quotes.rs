use crate::errors::AppResult;
use crate::models::{Quote, QuoteRef};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<Quote> {
    Ok(Quote {
        chapter: row.get("chapter")?,
        verse_number: row.get("verse_number")?,
        verse: row.get("verse")?,
        translation: row.get("translation")?,
        explanation: row.get("explanation")?,
    })
}

/// Save a quote. Returns `false` when the same verse was already saved.
pub fn save(conn: &Connection, q: &Quote, at: NaiveDateTime) -> AppResult<bool> {
    let n = conn.execute(
        "INSERT OR IGNORE INTO saved_quotes
            (chapter, verse_number, verse, translation, explanation, saved_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            q.chapter,
            q.verse_number,
            q.verse,
            q.translation,
            q.explanation,
            at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        ],
    )?;
    Ok(n > 0)
}

/// Remove a saved verse. Returns `false` when it was not saved.
pub fn remove(conn: &Connection, r: QuoteRef) -> AppResult<bool> {
    let n = conn.execute(
        "DELETE FROM saved_quotes WHERE chapter = ?1 AND verse_number = ?2",
        params![r.chapter, r.verse_number],
    )?;
    Ok(n > 0)
}

pub fn find(conn: &Connection, r: QuoteRef) -> AppResult<Option<Quote>> {
    Ok(conn
        .query_row(
            "SELECT chapter, verse_number, verse, translation, explanation
             FROM saved_quotes WHERE chapter = ?1 AND verse_number = ?2",
            params![r.chapter, r.verse_number],
            map_row,
        )
        .optional()?)
}

/// Saved quotes in the order they were saved.
pub fn list(conn: &Connection) -> AppResult<Vec<Quote>> {
    let mut stmt = conn.prepare(
        "SELECT chapter, verse_number, verse, translation, explanation
         FROM saved_quotes ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM saved_quotes", [], |row| row.get(0))?)
}
