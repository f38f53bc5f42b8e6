use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reading::ReadingCatalog;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &mut Context) -> AppResult<()> {
    if let Commands::Read {
        chapter,
        translation,
    } = cmd
    {
        let catalog = ReadingCatalog::load()?;

        // ---- SELECT TRANSLATION ----
        if let Some(id) = translation {
            let chosen = catalog.translation(id)?;
            ctx.cfg.translation = chosen.id.clone();

            if !ctx.is_test {
                let mut on_disk = Config::load()?;
                on_disk.translation = chosen.id.clone();
                on_disk.save()?;
            }

            success(
                ctx.tr
                    .t_with("gitaReading.translationSelected", &[("name", chosen.name.as_str())]),
            );
            return Ok(());
        }

        // ---- ONE CHAPTER ----
        if let Some(n) = chapter {
            let c = catalog.chapter(*n)?;
            let selected = catalog.translation(&ctx.cfg.translation).ok();

            header(
                format!("{} {}: {}", ctx.t("gitaReading.chapter"), c.number, c.title),
                &ctx.cfg.separator_char,
            );
            println!("{}: {}", ctx.t("gitaReading.verses"), c.verses);
            if let Some(t) = selected {
                println!("📖 {} ({})", t.name, t.author);
            }
            return Ok(());
        }

        // ---- LIST (default) ----
        header(ctx.t("gitaReading.title"), &ctx.cfg.separator_char);
        println!("{}", bold(&ctx.t("gitaReading.availableTranslations")));

        for t in catalog.translations() {
            let marker = if t.id == ctx.cfg.translation { "▶" } else { " " };
            println!("{} {:<17} {} · {} ({})", marker, t.id, t.name, t.author, t.language);
        }
        println!();

        let mut table = Table::new(vec![
            Column::new("#", 2),
            Column::new(&ctx.t("gitaReading.chapter"), 7),
            Column::new(&ctx.t("gitaReading.verses"), 6),
        ]);
        for c in catalog.chapters() {
            table.add_row(vec![c.number.to_string(), c.title.clone(), c.verses.to_string()]);
        }
        print!("{}", table.render(&ctx.cfg.separator_char));
        println!(
            "\n{} {} · {} {}",
            catalog.chapters().len(),
            ctx.t("gitaReading.chapter"),
            catalog.total_verses(),
            ctx.t("gitaReading.verses")
        );
    }

    Ok(())
}
