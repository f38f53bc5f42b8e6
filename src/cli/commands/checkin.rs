use crate::cli::context::Context;
use crate::core::checkin::{CheckInLogic, CheckInReport};
use crate::core::store::{MemoryStore, SqliteStore};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Outcome;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{RESET, color_for_streak};
use rusqlite::Connection;

/// Handle the `checkin` command.
///
/// When the database cannot be opened the check-in still runs against an
/// in-memory store, so the user sees the result even though it is not kept.
pub fn handle(ctx: &mut Context) -> AppResult<()> {
    let now = ctx.clock.now();

    let pool = match DbPool::new(&ctx.cfg.database) {
        Ok(p) => p,
        Err(e) => {
            warning(format!(
                "Database unavailable ({}): this check-in is kept for this session only.",
                e
            ));
            let mut store = MemoryStore::new();
            let report = CheckInLogic::apply(&mut store, now)?;
            render(ctx, &report);
            return Ok(());
        }
    };

    let report = {
        let mut store = SqliteStore::new(&pool.conn);
        CheckInLogic::apply(&mut store, now)?
    };

    log_report(&pool.conn, &report, now);
    render(ctx, &report);
    Ok(())
}

/// Audit trail for one check-in attempt.
pub fn log_report(conn: &Connection, report: &CheckInReport, now: chrono::NaiveDateTime) {
    if report.clock_regression {
        audit(
            conn,
            now,
            "clock_skew",
            &now.format("%Y-%m-%d %H:%M").to_string(),
            &format!(
                "Check-in time precedes last check-in {}; ignored",
                report.previous.last_check_in_str()
            ),
        );
    } else if report.outcome.is_recorded() {
        audit(
            conn,
            now,
            "checkin",
            report.outcome.to_db_str(),
            &format!("Streak {} at {}", report.state.current_streak, report.state.last_check_in_str()),
        );
    }
}

/// Print the translated outcome message and the streak summary.
pub fn render(ctx: &Context, report: &CheckInReport) {
    if report.clock_regression {
        warning(format!(
            "The clock is earlier than your last check-in ({}). Nothing was recorded.",
            report.previous.last_check_in_str()
        ));
    }

    let count = report.state.current_streak.to_string();
    let msg = ctx
        .tr
        .t_with(report.outcome.message_key(), &[("count", count.as_str())]);

    match report.outcome {
        Outcome::AlreadyCheckedInToday => info(msg),
        Outcome::StreakStarted | Outcome::StreakExtended => success(msg),
        Outcome::StreakReset => warning(msg),
    }

    let color = color_for_streak(report.state.current_streak);
    println!(
        "{}🔥{} {}: {} | {}: {}",
        color,
        RESET,
        ctx.t("currentStreak"),
        report.state.current_streak,
        ctx.t("longestStreak"),
        report.longest_streak
    );
}
