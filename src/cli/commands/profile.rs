use crate::cli::context::Context;
use crate::core::profile::ProfileStats;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{bold, days};

pub fn handle(ctx: &mut Context) -> AppResult<()> {
    let pool = ctx.open_db()?;
    let stats = ProfileStats::collect(&pool.conn, ctx.clock.today())?;

    header(ctx.t("profile"), &ctx.cfg.separator_char);
    println!("{}", bold(&ctx.t("yourStatistics")));

    let rows = [
        (ctx.t("totalPractices"), stats.total_practices.to_string()),
        (ctx.t("completedPractices"), stats.completed_practices.to_string()),
        (ctx.t("currentStreak"), days(stats.current_streak)),
        (ctx.t("longestStreak"), days(stats.longest_streak)),
        (ctx.t("karmaPoints"), stats.karma_points.to_string()),
        (ctx.t("savedQuotes"), stats.saved_quotes.to_string()),
        (ctx.t("lastCheckIn"), stats.state.last_check_in_str()),
        (ctx.t("language"), ctx.tr.language().name().to_string()),
    ];

    for (label, value) in rows {
        println!("  {}: {}", label, value);
    }

    Ok(())
}
