use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &mut Context) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = ctx.open_db()?;
        LogLogic::print_log(&pool)?;
    }

    Ok(())
}
