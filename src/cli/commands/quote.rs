use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::quotes::QuoteCatalog;
use crate::db::log::audit;
use crate::db::saved_quotes;
use crate::errors::{AppError, AppResult};
use crate::models::Quote;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_date;
use crate::utils::formatting::{bold, italic, wrap};

pub fn handle(cmd: &Commands, ctx: &mut Context) -> AppResult<()> {
    if let Commands::Quote {
        random,
        date,
        save,
        share,
    } = cmd
    {
        let catalog = QuoteCatalog::load()?;

        let quote = if *random {
            catalog.random(&mut rand::thread_rng())
        } else {
            let day = match date {
                Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
                None => ctx.clock.today(),
            };
            catalog.quote_of_day(day)
        };

        if *share {
            println!("{}", quote.share_text());
        } else {
            print_quote(ctx, quote);
        }

        if *save {
            save_quote(ctx, quote)?;
        }
    }

    Ok(())
}

pub fn print_quote(ctx: &Context, q: &Quote) {
    let width = ctx.cfg.wrap_width;

    println!(
        "📖 {} · Bhagavad Gita {}\n",
        bold(&ctx.t("dailyWisdom")),
        q.reference()
    );
    println!("{}\n", wrap(&q.verse, width, "   "));
    println!("{}\n", italic(&wrap(&q.translation, width, "   ")));
    println!("{}", wrap(&q.explanation, width, "   "));
    println!();
}

fn save_quote(ctx: &Context, q: &Quote) -> AppResult<()> {
    let pool = ctx.open_db()?;
    let now = ctx.clock.now();

    if saved_quotes::save(&pool.conn, q, now)? {
        audit(
            &pool.conn,
            now,
            "save_quote",
            &q.reference().to_string(),
            "Quote saved",
        );
        success(ctx.t("quoteSaved"));
    } else {
        info(ctx.t("quoteAlreadySaved"));
    }

    Ok(())
}
