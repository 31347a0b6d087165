use super::cell::CellKind;

/// Declaration of one editable column of the `tools` table.
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: CellKind,
    /// Insert/update refuse a blank value for required columns.
    pub required: bool,
}

/// The editable columns in schema order. `id` is not listed here:
/// it is assigned by the store and immutable for the record's lifetime.
pub const COLUMNS: [ColumnSpec; 11] = [
    ColumnSpec { name: "T", kind: CellKind::Text, required: false },
    ColumnSpec { name: "Name", kind: CellKind::Text, required: true },
    ColumnSpec { name: "L", kind: CellKind::Real, required: false },
    ColumnSpec { name: "R", kind: CellKind::Real, required: false },
    ColumnSpec { name: "Type", kind: CellKind::Text, required: false },
    ColumnSpec { name: "Description", kind: CellKind::Text, required: false },
    ColumnSpec { name: "LCut", kind: CellKind::Real, required: false },
    ColumnSpec { name: "Cuts", kind: CellKind::Integer, required: false },
    ColumnSpec { name: "ROffset", kind: CellKind::Real, required: false },
    ColumnSpec { name: "LOffset", kind: CellKind::Real, required: false },
    ColumnSpec { name: "PType", kind: CellKind::Text, required: false },
];

pub const FIELD_COUNT: usize = COLUMNS.len();

/// Grid columns: `id` at position 0, then the editable columns.
pub const GRID_COLUMNS: usize = FIELD_COUNT + 1;

/// Resolve a user-supplied column name to its grid column index
/// (0 = id). Matching is case-insensitive.
pub fn grid_column_index(name: &str) -> Option<usize> {
    if name.eq_ignore_ascii_case("id") {
        return Some(0);
    }
    COLUMNS
        .iter()
        .position(|c| c.name.eq_ignore_ascii_case(name))
        .map(|i| i + 1)
}

/// Header name of a grid column.
pub fn grid_column_name(col: usize) -> &'static str {
    if col == 0 { "ID" } else { COLUMNS[col - 1].name }
}
