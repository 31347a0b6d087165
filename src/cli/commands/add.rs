use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_tool;
use crate::errors::AppResult;
use crate::form::{EditForm, split_values};
use crate::grid::GridModel;
use crate::ui::messages::success;

/// Add a tool record from comma-separated field values.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { values } = cmd {
        //
        // 1. Capture the values through the form contract: blank prefill,
        //    positional overlay, count-mismatch rejection.
        //
        let mut form = EditForm::blank();
        form.apply(&split_values(values))?;

        //
        // 2. Write through the store.
        //
        let pool = DbPool::open(&cfg.database)?;
        let id = insert_tool(&pool.conn, &form.into_values())?;

        //
        // 3. Reload the grid: the displayed row count must match the store.
        //
        let mut grid = GridModel::new();
        grid.reload(&pool.conn)?;

        let _ = oplog(&pool.conn, "add", &id.to_string(), "Tool added");
        success(format!("Added tool #{} ({} rows)", id, grid.len()));
    }

    Ok(())
}
