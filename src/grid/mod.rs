//! In-memory projection of the store's rows.
//!
//! The grid is a read-through cache: a full reload exactly reflects the
//! current store contents and the grid holds no state the store does not
//! already have, apart from the transient sort indicator.

use crate::db::queries::list_tools;
use crate::errors::AppResult;
use crate::models::cell::{CellValue, compare_values};
use crate::models::record::ToolRecord;
use crate::models::schema::{COLUMNS, GRID_COLUMNS};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One display row: the record id plus one typed cell per editable column.
#[derive(Debug, Clone)]
pub struct GridRow {
    pub id: i64,
    cells: Vec<CellValue>,
}

impl GridRow {
    fn from_record(rec: &ToolRecord) -> Self {
        let cells = COLUMNS
            .iter()
            .zip(&rec.fields)
            .map(|(col, raw)| CellValue::from_field(col.kind, raw))
            .collect();
        Self { id: rec.id, cells }
    }

    /// Display text of a grid column (0 = id).
    pub fn cell_text(&self, col: usize) -> String {
        if col == 0 {
            self.id.to_string()
        } else {
            self.cells[col - 1].display()
        }
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }
}

#[derive(Default)]
pub struct GridModel {
    rows: Vec<GridRow>,
    sort: Option<(usize, SortDirection)>,
}

impl GridModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all rows and re-populate from the store.
    /// The sort indicator is reset: the reloaded order is the store's order.
    pub fn reload(&mut self, conn: &Connection) -> AppResult<()> {
        let records = list_tools(conn)?;
        self.rows = records.iter().map(GridRow::from_record).collect();
        self.sort = None;
        Ok(())
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the row currently showing the given id.
    pub fn locate_by_id(&self, id: i64) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    /// Stable sort of all rows by one column's comparator.
    pub fn sort_column(&mut self, col: usize, descending: bool) {
        debug_assert!(col < GRID_COLUMNS);
        self.rows.sort_by(|a, b| {
            let ord = compare_values(&a.cell_text(col), &b.cell_text(col));
            if descending { ord.reverse() } else { ord }
        });
        self.sort = Some((
            col,
            if descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        ));
    }

    /// Sort by a column, flipping direction when the same column is sorted
    /// again; a different column starts ascending.
    pub fn toggle_sort(&mut self, col: usize) -> SortDirection {
        let descending = matches!(self.sort, Some((c, SortDirection::Ascending)) if c == col);
        self.sort_column(col, descending);
        if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    /// Current sort direction of a column, if it is the sorted one.
    pub fn indicator(&self, col: usize) -> Option<SortDirection> {
        match self.sort {
            Some((c, dir)) if c == col => Some(dir),
            _ => None,
        }
    }

    /// Indexes of the rows visible under a case-insensitive substring filter.
    /// A row is visible iff at least one column's text matches; an empty
    /// needle matches everything.
    pub fn filter(&self, needle: &str) -> Vec<usize> {
        if needle.is_empty() {
            return (0..self.rows.len()).collect();
        }
        let needle = needle.to_lowercase();
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                (0..GRID_COLUMNS).any(|c| row.cell_text(c).to_lowercase().contains(&needle))
            })
            .map(|(i, _)| i)
            .collect()
    }
}
