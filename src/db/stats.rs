use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, table: &str) -> AppResult<i64> {
    // table names come from the fixed list below, never from user input
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    Ok(pool.conn.query_row(&sql, [], |row| row.get(0))?)
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    for (label, table) in [
        ("Check-ins", "checkins"),
        ("Saved quotes", "saved_quotes"),
        ("Karma acts", "karma_tasks"),
        ("Practices", "practices"),
        ("Log rows", "log"),
    ] {
        println!(
            "{}• {}:{} {}{}{}",
            CYAN,
            label,
            RESET,
            GREEN,
            count(pool, table)?,
            RESET
        );
    }

    //
    // 3) CHECK-IN RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row("SELECT at FROM checkins ORDER BY at ASC LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row("SELECT at FROM checkins ORDER BY at DESC LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    let dash = || format!("{GREY}--{RESET}");
    println!("{}• Check-in range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(dash));
    println!("    to:   {}", last.unwrap_or_else(dash));

    //
    // 4) SCHEMA
    //
    let versions = applied_versions(&pool.conn)?;
    println!(
        "{}• Schema:{} {} migrations (latest {})",
        CYAN,
        RESET,
        versions.len(),
        versions.last().map(String::as_str).unwrap_or("--")
    );

    println!();
    Ok(())
}
