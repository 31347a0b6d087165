#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ttab() -> Command {
    cargo_bin_cmd!("tooltab")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tooltab.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates schema, skips config write)
    ttab()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ttab()
        .args([
            "--db",
            db_path,
            "add",
            "1,Drill 6mm,60,3,drill,HSS twist drill,25,2,0,0,flat",
        ])
        .assert()
        .success();

    ttab()
        .args([
            "--db",
            db_path,
            "add",
            "2,End Mill 10mm,75,5,mill,Carbide end mill,30,4,0.05,-0.1,flat",
        ])
        .assert()
        .success();
}

/// Helper to populate many tools directly via the library DB API
pub fn populate_many_tools(db_path: &str, n: usize) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    tooltab::db::initialize::init_db(&conn).expect("init db");
    for i in 0..n {
        let values = tool_values(&format!("Tool {i}"), &format!("{}.5", i % 10), "1");
        tooltab::db::queries::insert_tool(&conn, &values).expect("insert tool");
    }
}

/// Build a full field-value vector (schema order) from the interesting parts.
pub fn tool_values(name: &str, l: &str, t: &str) -> Vec<String> {
    vec![
        t.to_string(),      // T
        name.to_string(),   // Name
        l.to_string(),      // L
        "0".to_string(),    // R
        String::new(),      // Type
        String::new(),      // Description
        "0".to_string(),    // LCut
        "0".to_string(),    // Cuts
        "0".to_string(),    // ROffset
        "0".to_string(),    // LOffset
        String::new(),      // PType
    ]
}
