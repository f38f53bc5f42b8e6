use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::db::log::audit;
use crate::db::saved_quotes;
use crate::errors::{AppError, AppResult};
use crate::models::QuoteRef;
use crate::ui::messages::{header, info, success};
use crate::utils::formatting::wrap;

pub fn handle(cmd: &Commands, ctx: &mut Context) -> AppResult<()> {
    if let Commands::Saved {
        list: _,
        remove,
        share,
    } = cmd
    {
        let pool = ctx.open_db()?;

        // ---- REMOVE ----
        if let Some(r) = remove {
            let r = QuoteRef::parse(r)?;
            if !saved_quotes::remove(&pool.conn, r)? {
                return Err(AppError::NotFound(format!("verse {} is not saved", r)));
            }
            audit(&pool.conn, ctx.clock.now(), "remove_quote", &r.to_string(), "Quote removed");
            success(format!(
                "{}: {}",
                ctx.t("quoteDeleted"),
                ctx.t("quoteDeletedMessage")
            ));
            return Ok(());
        }

        // ---- SHARE ----
        if let Some(r) = share {
            let r = QuoteRef::parse(r)?;
            let q = saved_quotes::find(&pool.conn, r)?
                .ok_or_else(|| AppError::NotFound(format!("verse {} is not saved", r)))?;
            println!("{}", q.share_text());
            return Ok(());
        }

        // ---- LIST (default) ----
        let quotes = saved_quotes::list(&pool.conn)?;
        header(ctx.t("savedQuotes"), &ctx.cfg.separator_char);

        if quotes.is_empty() {
            info(ctx.t("noSavedQuotes"));
            println!("{}", ctx.t("savedQuotesDescription"));
            return Ok(());
        }

        for q in quotes {
            println!("📜 {}", q.reference());
            println!("{}\n", wrap(&q.translation, ctx.cfg.wrap_width, "   "));
        }
    }

    Ok(())
}
