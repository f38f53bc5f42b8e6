use crate::cli::context::Context;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use rusqlite::Connection;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli, ctx: &mut Context) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURATION
    //
    let cfg = Config::init_all(cli.db.as_deref(), ctx.is_test)?;
    ctx.cfg.database = cfg.database.clone();

    println!("⚙️  Initializing gitawisdom…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &ctx.cfg.database);

    //
    // 2️⃣ DATABASE (tables + migrations)
    //
    if let Some(parent) = Path::new(&ctx.cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(&ctx.cfg.database)?;
    let applied = init_db(&conn)?;
    for v in &applied {
        success(format!("Migration applied: {}", v));
    }
    if applied.is_empty() {
        info("Database schema is up to date.");
    }

    //
    // 3️⃣ INTERNAL LOG (non-blocking)
    //
    audit(
        &conn,
        ctx.clock.now(),
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &ctx.cfg.database),
    );

    println!("🎉 gitawisdom initialization completed!");
    Ok(())
}
