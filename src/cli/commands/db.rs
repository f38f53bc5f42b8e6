use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use rusqlite::Connection;

pub fn handle(cmd: &Commands, ctx: &mut Context) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        //
        // 1) MIGRATE (raw connection, so the applied versions can be reported)
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let conn = Connection::open(&ctx.cfg.database)?;
            let applied = run_pending_migrations(&conn)?;
            for v in &applied {
                println!("  • {}", v);
            }
            println!(
                "{}✔ Migration completed ({} applied).{}\n",
                GREEN,
                applied.len(),
                RESET
            );
        }

        if !(*info || *check || *vacuum) {
            return Ok(());
        }

        let pool = DbPool::new(&ctx.cfg.database)?;

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&pool, &ctx.cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Database optimized.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
