//! gitawisdom library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (streak tracker, stores, translations, quotes).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::context::Context;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &mut Context) -> AppResult<()> {
    use cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli, ctx),
        Commands::Config { .. } => c::config::handle(&cli.command, ctx),
        Commands::Db { .. } => c::db::handle(&cli.command, ctx),
        Commands::Log { .. } => c::log::handle(&cli.command, ctx),
        Commands::Checkin => c::checkin::handle(ctx),
        Commands::Streak { .. } => c::streak::handle(&cli.command, ctx),
        Commands::Quote { .. } => c::quote::handle(&cli.command, ctx),
        Commands::Saved { .. } => c::saved::handle(&cli.command, ctx),
        Commands::Karma { .. } => c::karma::handle(&cli.command, ctx),
        Commands::Practice { .. } => c::practice::handle(&cli.command, ctx),
        Commands::Read { .. } => c::read::handle(&cli.command, ctx),
        Commands::Profile => c::profile::handle(ctx),
        Commands::Lang { .. } => c::lang::handle(&cli.command, ctx),
        Commands::Translate { key } => {
            println!("{}", ctx.t(key));
            Ok(())
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let cfg = Config::load()?;

    // 3️⃣ apply --db / --lang / --at overrides
    let mut ctx = Context::from_cli(&cli, cfg)?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &mut ctx)
}
