//! Generic edit form over the fixed field list.
//!
//! The form is a pure data contract: one text entry per schema field,
//! pre-populated from an existing record (edit) or all blank (add). It
//! performs no type coercion; that happens at the store boundary.

use crate::errors::{AppError, AppResult};
use crate::models::record::ToolRecord;
use crate::models::schema::FIELD_COUNT;

pub struct EditForm {
    entries: Vec<String>,
}

impl EditForm {
    /// All-blank form, for adding a record.
    pub fn blank() -> Self {
        Self {
            entries: vec![String::new(); FIELD_COUNT],
        }
    }

    /// Form pre-populated from an existing record, for editing.
    pub fn prefilled(record: &ToolRecord) -> Self {
        Self {
            entries: record.fields.clone(),
        }
    }

    /// Overlay entered values positionally. Fewer values than fields leave
    /// the remaining entries at their prefill; more than the declared field
    /// count is rejected with a count-mismatch error, never truncated.
    pub fn apply(&mut self, values: &[&str]) -> AppResult<()> {
        if values.len() > FIELD_COUNT {
            return Err(AppError::FieldCount {
                expected: FIELD_COUNT,
                got: values.len(),
            });
        }
        for (entry, value) in self.entries.iter_mut().zip(values) {
            *entry = value.trim().to_string();
        }
        Ok(())
    }

    pub fn entry(&self, idx: usize) -> &str {
        &self.entries[idx]
    }

    pub fn set_entry(&mut self, idx: usize, value: &str) {
        self.entries[idx] = value.to_string();
    }

    /// Confirm the form: the ordered list of entered strings, one per field.
    pub fn into_values(self) -> Vec<String> {
        self.entries
    }
}

/// Split a comma-separated CLI value string into its field values.
pub fn split_values(input: &str) -> Vec<&str> {
    input.split(',').collect()
}
