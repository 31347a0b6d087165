use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::grid::{GridModel, SortDirection};
use crate::models::schema::{GRID_COLUMNS, grid_column_index, grid_column_name};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { sort, desc, filter } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        let mut grid = GridModel::new();
        grid.reload(&pool.conn)?;

        if let Some(name) = sort {
            let col = grid_column_index(name)
                .ok_or_else(|| AppError::InvalidColumn(name.clone()))?;
            grid.sort_column(col, *desc);
        }

        let visible = grid.filter(filter.as_deref().unwrap_or(""));

        let mut table = Table::new(headers(&grid));
        for &i in &visible {
            let row = &grid.rows()[i];
            table.add_row((0..GRID_COLUMNS).map(|c| row.cell_text(c)).collect());
        }

        print!("{}", table.render());
        println!("{} of {} rows", visible.len(), grid.len());
    }

    Ok(())
}

/// Column headers, with the direction arrow on the sorted column.
fn headers(grid: &GridModel) -> Vec<String> {
    (0..GRID_COLUMNS)
        .map(|c| {
            let name = grid_column_name(c);
            match grid.indicator(c) {
                Some(SortDirection::Ascending) => format!("{} ↑", name),
                Some(SortDirection::Descending) => format!("{} ↓", name),
                None => name.to_string(),
            }
        })
        .collect()
}
