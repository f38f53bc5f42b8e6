use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::store::{SqliteStore, StateStore};
use crate::db::checkins;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::days;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &mut Context) -> AppResult<()> {
    if let Commands::Streak { history, limit } = cmd {
        let pool = ctx.open_db()?;
        let today = ctx.clock.today();

        let (state, longest) = {
            let store = SqliteStore::new(&pool.conn);
            let state = store.load()?;
            (state, store.longest_streak()?.max(state.current_streak))
        };

        let live = state.live_streak(today);

        header(ctx.t("karma"), &ctx.cfg.separator_char);
        println!("🔥 {}: {}", ctx.t("currentStreak"), days(live));
        println!("🏆 {}: {}", ctx.t("longestStreak"), days(longest));
        println!("🕉  {}: {}", ctx.t("lastCheckIn"), state.last_check_in_str());

        if state.is_checked_in_on(today) {
            info(ctx.t("checkIn.doneToday"));
        } else if live > 0 {
            info(ctx.t("checkIn.atRisk"));
        } else {
            info(ctx.t("buildStreak"));
        }

        if *history {
            let rows = checkins::list(&pool.conn, *limit)?;
            println!();

            if rows.is_empty() {
                println!("No check-ins recorded yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("Date", 10),
                Column::new("Time", 5),
                Column::new("Streak", 6),
                Column::new("Outcome", 8),
            ]);
            for r in rows {
                table.add_row(vec![
                    r.at.format("%Y-%m-%d").to_string(),
                    r.at.format("%H:%M").to_string(),
                    r.streak.to_string(),
                    r.outcome.to_db_str().to_string(),
                ]);
            }
            print!("{}", table.render(&ctx.cfg.separator_char));
        }
    }

    Ok(())
}
