use crate::models::schema::FIELD_COUNT;

/// One row of the `tools` table.
///
/// Field values travel as strings: the edit form performs no coercion and
/// SQLite column affinity does the typing on write. The grid projection is
/// where values become typed cells.
#[derive(Debug, Clone)]
pub struct ToolRecord {
    pub id: i64,
    /// FIELD_COUNT entries, in schema order.
    pub fields: Vec<String>,
}

impl ToolRecord {
    pub fn new(id: i64, fields: Vec<String>) -> Self {
        debug_assert_eq!(fields.len(), FIELD_COUNT);
        Self { id, fields }
    }

    pub fn field(&self, idx: usize) -> &str {
        &self.fields[idx]
    }

    /// Case-insensitive substring match across the id and every field.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        if self.id.to_string().contains(&needle) {
            return true;
        }
        self.fields
            .iter()
            .any(|f| f.to_lowercase().contains(&needle))
    }
}
