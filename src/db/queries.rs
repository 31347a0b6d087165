use crate::errors::{AppError, AppResult};
use crate::models::record::ToolRecord;
use crate::models::schema::{COLUMNS, FIELD_COUNT};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row, ToSql, params_from_iter};

const INSERT_SQL: &str = "INSERT INTO tools \
    (T, Name, L, R, Type, Description, LCut, Cuts, ROffset, LOffset, PType) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";

const UPDATE_SQL: &str = "UPDATE tools SET \
    T = ?1, Name = ?2, L = ?3, R = ?4, Type = ?5, Description = ?6, \
    LCut = ?7, Cuts = ?8, ROffset = ?9, LOffset = ?10, PType = ?11 \
    WHERE id = ?12";

const SELECT_SQL: &str = "SELECT id, T, Name, L, R, Type, Description, \
    LCut, Cuts, ROffset, LOffset, PType FROM tools";

/// Refuse a blank value in a column the schema declares required.
fn check_required(values: &[String]) -> AppResult<()> {
    for (col, value) in COLUMNS.iter().zip(values) {
        if col.required && value.trim().is_empty() {
            return Err(AppError::RequiredField(col.name));
        }
    }
    Ok(())
}

/// Surface constraint failures as user input errors instead of raw DB errors.
fn map_constraint(e: rusqlite::Error) -> AppError {
    match &e {
        rusqlite::Error::SqliteFailure(err, msg)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppError::Constraint(msg.clone().unwrap_or_else(|| err.to_string()))
        }
        _ => AppError::Db(e),
    }
}

/// Insert a new tool record. Returns the store-assigned id.
pub fn insert_tool(conn: &Connection, values: &[String]) -> AppResult<i64> {
    debug_assert_eq!(values.len(), FIELD_COUNT);
    check_required(values)?;
    conn.execute(INSERT_SQL, params_from_iter(values.iter()))
        .map_err(map_constraint)?;
    Ok(conn.last_insert_rowid())
}

/// Replace all non-id fields of an existing record.
/// An id matching zero rows is a distinct NotFound error, not silent success.
pub fn update_tool(conn: &Connection, id: i64, values: &[String]) -> AppResult<()> {
    debug_assert_eq!(values.len(), FIELD_COUNT);
    check_required(values)?;

    let mut params: Vec<&dyn ToSql> = values.iter().map(|v| v as &dyn ToSql).collect();
    params.push(&id);

    let changed = conn
        .execute(UPDATE_SQL, params_from_iter(params))
        .map_err(map_constraint)?;
    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

/// Hard delete by id. NotFound when no row matched.
pub fn delete_tool(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM tools WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

/// Retrieve a single record by id.
pub fn get_tool(conn: &Connection, id: i64) -> AppResult<Option<ToolRecord>> {
    let mut stmt = conn.prepare_cached(&format!("{} WHERE id = ?1", SELECT_SQL))?;
    match stmt.query_row([id], map_row) {
        Ok(rec) => Ok(Some(rec)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Full scan of the table. No ORDER BY: row order is implementation-defined;
/// ordering for display is the grid's job.
pub fn list_tools(conn: &Connection) -> AppResult<Vec<ToolRecord>> {
    let mut stmt = conn.prepare_cached(SELECT_SQL)?;
    let rows = stmt.query_map([], map_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_tools(conn: &Connection) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached("SELECT COUNT(*) FROM tools")?;
    let n: i64 = stmt.query_row([], |r| r.get(0))?;
    Ok(n)
}

/// Read a field back as its string representation, whatever affinity SQLite
/// gave the stored value.
fn field_text(row: &Row, idx: usize) -> rusqlite::Result<String> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => String::from_utf8_lossy(b).into_owned(),
    })
}

pub(crate) fn map_row(row: &Row) -> rusqlite::Result<ToolRecord> {
    let id: i64 = row.get(0)?;
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    for i in 0..FIELD_COUNT {
        fields.push(field_text(row, i + 1)?);
    }
    Ok(ToolRecord::new(id, fields))
}
