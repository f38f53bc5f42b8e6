use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Language;
use crate::ui::messages::{header, success};

pub fn handle(cmd: &Commands, ctx: &mut Context) -> AppResult<()> {
    if let Commands::Lang { set } = cmd {
        if let Some(code) = set {
            let language =
                Language::from_code(code).ok_or_else(|| AppError::InvalidLanguage(code.clone()))?;

            ctx.tr.set_language(language);
            ctx.cfg.language = language;

            if !ctx.is_test {
                // Reload so CLI overrides such as --db are not persisted.
                let mut on_disk = Config::load()?;
                on_disk.language = language;
                on_disk.save()?;
            }

            success(format!("{}: {} ({})", ctx.t("language"), language.name(), language.code()));
            return Ok(());
        }

        let current = ctx.tr.language();
        header(ctx.t("language"), &ctx.cfg.separator_char);
        for l in Language::ALL {
            let marker = if l == current { "▶" } else { " " };
            println!("{} {}  {}", marker, l.code(), l.name());
        }
    }

    Ok(())
}
