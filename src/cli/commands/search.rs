use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::grid::GridModel;
use crate::models::schema::{GRID_COLUMNS, grid_column_name};
use crate::ui::messages::{info, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { text } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        let mut grid = GridModel::new();
        grid.reload(&pool.conn)?;

        let matches = grid.filter(text);
        if matches.is_empty() {
            warning(format!("No rows match '{}'", text));
            return Ok(());
        }

        let mut table = Table::new(
            (0..GRID_COLUMNS)
                .map(|c| grid_column_name(c).to_string())
                .collect(),
        );
        for &i in &matches {
            let row = &grid.rows()[i];
            table.add_row((0..GRID_COLUMNS).map(|c| row.cell_text(c)).collect());
        }

        print!("{}", table.render());
        info(format!(
            "{} matching rows, first match: tool #{}",
            matches.len(),
            grid.rows()[matches[0]].id
        ));
    }

    Ok(())
}
