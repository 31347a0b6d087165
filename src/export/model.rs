use crate::models::record::ToolRecord;
use serde::Serialize;

/// Flat export row: the record id plus the fields under their column names.
/// Fields stay strings: the store is permissive about what a numeric column
/// actually holds, and the export must not invent values.
#[derive(Debug, Serialize)]
pub struct ToolExport {
    pub id: i64,
    #[serde(rename = "T")]
    pub t: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "L")]
    pub l: String,
    #[serde(rename = "R")]
    pub r: String,
    #[serde(rename = "Type")]
    pub tool_type: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "LCut")]
    pub lcut: String,
    #[serde(rename = "Cuts")]
    pub cuts: String,
    #[serde(rename = "ROffset")]
    pub roffset: String,
    #[serde(rename = "LOffset")]
    pub loffset: String,
    #[serde(rename = "PType")]
    pub ptype: String,
}

impl From<&ToolRecord> for ToolExport {
    fn from(rec: &ToolRecord) -> Self {
        let f = |i: usize| rec.fields[i].clone();
        Self {
            id: rec.id,
            t: f(0),
            name: f(1),
            l: f(2),
            r: f(3),
            tool_type: f(4),
            description: f(5),
            lcut: f(6),
            cuts: f(7),
            roffset: f(8),
            loffset: f(9),
            ptype: f(10),
        }
    }
}
