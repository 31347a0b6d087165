use crate::db::pool::DbPool;
use crate::ui::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM tools", [], |row| row.get(0))?;
    println!("{}• Total tools:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    let min_id: Option<i64> = pool
        .conn
        .query_row("SELECT MIN(id) FROM tools", [], |row| row.get(0))?;
    let max_id: Option<i64> = pool
        .conn
        .query_row("SELECT MAX(id) FROM tools", [], |row| row.get(0))?;

    let fmt_id = |id: Option<i64>| match id {
        Some(v) => v.to_string(),
        None => format!("{GREY}--{RESET}"),
    };

    println!("{}• Id range:{}", CYAN, RESET);
    println!("    from: {}", fmt_id(min_id));
    println!("    to:   {}", fmt_id(max_id));

    let distinct_types: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT Type) FROM tools WHERE Type <> ''",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Distinct tool types:{} {}",
        CYAN, RESET, distinct_types
    );

    println!();
    Ok(())
}
