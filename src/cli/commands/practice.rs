use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::practice::PracticeLogic;
use crate::db::practices;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::check_mark;

pub fn handle(cmd: &Commands, ctx: &mut Context) -> AppResult<()> {
    if let Commands::Practice {
        list: _,
        add,
        done,
        del,
    } = cmd
    {
        let pool = ctx.open_db()?;

        if let Some(name) = add {
            let id = PracticeLogic::add(&pool.conn, name, ctx.clock.now())?;
            success(format!("{} (#{}): {}", ctx.t("practiceAdded"), id, name.trim()));
            return Ok(());
        }

        if let Some(id) = done {
            let completed = PracticeLogic::toggle(&pool.conn, *id, ctx.clock.now())?;
            let state = if completed { ctx.t("complete") } else { "pending".to_string() };
            success(format!("#{} {}", id, state));
            return Ok(());
        }

        if let Some(id) = del {
            PracticeLogic::delete(&pool.conn, *id, ctx.clock.now())?;
            success(format!("{} (#{})", ctx.t("practiceDeleted"), id));
            return Ok(());
        }

        // ---- LIST (default) ----
        let items = practices::list(&pool.conn)?;
        header(ctx.t("dailyPractice"), &ctx.cfg.separator_char);

        if items.is_empty() {
            info(ctx.t("noPractices"));
            return Ok(());
        }

        for p in &items {
            println!("{} #{:<3} {}", check_mark(p.completed), p.id, p.name);
        }

        let done_count = items.iter().filter(|p| p.completed).count();
        println!("\n{}: {}/{}", ctx.t("todayProgress"), done_count, items.len());
    }

    Ok(())
}
