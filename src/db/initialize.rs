use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
///
/// Idempotent: creates the `tools` and `log` tables if absent and never
/// alters an existing schema.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS tools (
            id          INTEGER PRIMARY KEY,
            T           TEXT,
            Name        TEXT,
            L           REAL,
            R           REAL,
            Type        TEXT,
            Description TEXT,
            LCut        REAL,
            Cuts        INTEGER,
            ROffset     REAL,
            LOffset     REAL,
            PType       TEXT
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}
