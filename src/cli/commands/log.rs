use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::list_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::open(&cfg.database)?;
        let entries = list_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        for e in entries {
            println!("[{}] {} {} — {}", e.date, e.operation, e.target, e.message);
        }
    }

    Ok(())
}
