use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::oplog;
use crate::errors::AppResult;
use crate::ui::messages::success;
use rusqlite::Connection;
use std::fs;
use std::io;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file } = cmd {
        let src = Path::new(&cfg.database);
        let dest = Path::new(file);

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        if let Ok(conn) = Connection::open(src) {
            let _ = oplog(
                &conn,
                "backup",
                &dest.to_string_lossy(),
                "Backup created",
            );
        }
    }

    Ok(())
}
