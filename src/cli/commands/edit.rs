use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{get_tool, update_tool};
use crate::errors::{AppError, AppResult};
use crate::form::{EditForm, split_values};
use crate::grid::GridModel;
use crate::ui::messages::success;

/// Replace the fields of an existing tool record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, values } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        //
        // 1. Prefill the form from the stored record.
        //
        let record = get_tool(&pool.conn, *id)?.ok_or(AppError::NotFound(*id))?;
        let mut form = EditForm::prefilled(&record);

        //
        // 2. Overlay the entered values (count-mismatch rejected here,
        //    before any store mutation).
        //
        form.apply(&split_values(values))?;

        //
        // 3. Write back all non-id fields.
        //
        update_tool(&pool.conn, *id, &form.into_values())?;

        //
        // 4. Reload and re-locate the edited row, mirroring the grid's
        //    select-after-save behavior.
        //
        let mut grid = GridModel::new();
        grid.reload(&pool.conn)?;
        let row = grid
            .locate_by_id(*id)
            .map(|i| format!("row {}", i + 1))
            .unwrap_or_else(|| "not visible".to_string());

        let _ = oplog(&pool.conn, "edit", &id.to_string(), "Tool updated");
        success(format!("Updated tool #{} ({})", id, row));
    }

    Ok(())
}
