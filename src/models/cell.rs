use std::cmp::Ordering;

/// Comparison type of a column, declared once in the schema and used by
/// both the grid projection and the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Integer,
    Real,
    Text,
}

/// One typed display cell of the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Int(i64),
    Real(f64),
    Text(String),
}

impl CellValue {
    /// Convert a raw stored field into its column's comparison type.
    /// Non-parseable numeric input falls back to 0 / 0.0 instead of raising.
    pub fn from_field(kind: CellKind, raw: &str) -> Self {
        match kind {
            CellKind::Integer => CellValue::Int(raw.trim().parse().unwrap_or(0)),
            CellKind::Real => CellValue::Real(raw.trim().parse().unwrap_or(0.0)),
            CellKind::Text => CellValue::Text(raw.to_string()),
        }
    }

    pub fn display(&self) -> String {
        match self {
            CellValue::Int(i) => i.to_string(),
            CellValue::Real(f) => f.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

/// Numeric-aware comparison of two cell texts.
///
/// If both sides parse as a floating-point number the comparison is numeric,
/// otherwise case-sensitive lexical. Signed and exponent forms are accepted:
/// the schema carries signed offset columns (ROffset, LOffset), so `-0.3`
/// must order below `0`.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        _ => a.cmp(b),
    }
}
