//! Schema migrations.
//!
//! Each migration runs once. Applied versions are recorded in the `log` table
//! as `migration_applied` rows, so the log doubles as the schema history.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_kv",
        description: "Created kv table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250301_0002_create_checkins",
        description: "Created checkins history table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS checkins (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            at      TEXT NOT NULL,
            streak  INTEGER NOT NULL CHECK(streak > 0),
            outcome TEXT NOT NULL CHECK(outcome IN ('started','extended','reset'))
        );

        CREATE INDEX IF NOT EXISTS idx_checkins_at ON checkins(at);
        "#,
    },
    Migration {
        version: "20250301_0003_create_saved_quotes",
        description: "Created saved_quotes table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS saved_quotes (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            chapter      INTEGER NOT NULL,
            verse_number INTEGER NOT NULL,
            verse        TEXT NOT NULL,
            translation  TEXT NOT NULL,
            explanation  TEXT NOT NULL DEFAULT '',
            saved_at     TEXT NOT NULL,
            UNIQUE(chapter, verse_number)
        );
        "#,
    },
    Migration {
        version: "20250301_0004_create_karma_tasks",
        description: "Created karma_tasks table with default acts",
        sql: r#"
        CREATE TABLE IF NOT EXISTS karma_tasks (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            title        TEXT NOT NULL,
            points       INTEGER NOT NULL CHECK(points > 0),
            completed_on TEXT
        );

        INSERT INTO karma_tasks (title, points) VALUES
            ('Chant Hare Krishna Maha-mantra', 108),
            ('Read Bhagavad Gita (1 chapter)', 50),
            ('Help someone in need', 30),
            ('Offer food to Krishna', 25),
            ('Practice meditation', 20);
        "#,
    },
    Migration {
        version: "20250301_0005_create_practices",
        description: "Created practices table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS practices (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            completed  INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Returns the versions applied by this call (empty when up to date).
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied.push(m.version);
    }

    Ok(applied)
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
