use crate::cli::commands::checkin;
use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::karma::{Completion, KarmaLogic};
use crate::db::{karma, kv};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &mut Context) -> AppResult<()> {
    if let Commands::Karma {
        list: _,
        add,
        points,
        complete,
    } = cmd
    {
        let mut pool = ctx.open_db()?;
        let now = ctx.clock.now();

        // ---- ADD ----
        if let (Some(title), Some(points)) = (add, points) {
            let id = KarmaLogic::add(&pool.conn, title, *points, now)?;
            success(format!("{} (#{}): {} +{}", ctx.t("taskAdded"), id, title.trim(), points));
            return Ok(());
        }

        // ---- COMPLETE ----
        if let Some(id) = complete {
            match KarmaLogic::complete(&mut pool.conn, *id, now)? {
                Completion::AlreadyCompleted(task) => {
                    info(format!("{} ({})", ctx.t("taskAlreadyCompleted"), task.title));
                }
                Completion::Completed {
                    task,
                    total_points,
                    checkin: report,
                } => {
                    let pts = task.points.to_string();
                    success(ctx.tr.t_with("taskCompleted", &[("points", pts.as_str())]));
                    println!("🏆 {}: {}", ctx.t("karmaPoints"), total_points);
                    checkin::log_report(&pool.conn, &report, now);
                    checkin::render(ctx, &report);
                }
            }
            return Ok(());
        }

        // ---- LIST (default) ----
        let today = now.date();
        let tasks = karma::list(&pool.conn)?;
        let total = kv::karma_points(&pool.conn)?;

        header(ctx.t("karma"), &ctx.cfg.separator_char);
        println!("🏆 {}: {}\n", ctx.t("karmaPoints"), total);

        let mut table = Table::new(vec![
            Column::new("ID", 2),
            Column::new("Act", 10),
            Column::new("Points", 6),
            Column::new("Today", 5),
        ]);
        for t in &tasks {
            table.add_row(vec![
                t.id.to_string(),
                t.title.clone(),
                format!("+{}", t.points),
                if t.is_completed_on(today) { "✔" } else { "·" }.to_string(),
            ]);
        }
        print!("{}", table.render(&ctx.cfg.separator_char));

        let done = tasks.iter().filter(|t| t.is_completed_on(today)).count();
        println!("\n{}: {}/{}", ctx.t("todayProgress"), done, tasks.len());
    }

    Ok(())
}
