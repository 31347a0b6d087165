use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, temp_out, ttab};

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    ttab()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    let header = lines.next().expect("header line");
    assert!(header.contains("Name"));
    assert!(header.contains("ROffset"));
    assert!(content.contains("Drill 6mm"));
    assert!(content.contains("End Mill 10mm"));
}

#[test]
fn test_export_json_roundtrip() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_json", "json");

    ttab()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array of records");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Name"], "Drill 6mm");
    assert!(rows[0]["id"].is_i64());
}

#[test]
fn test_export_with_filter() {
    let db_path = setup_test_db("export_filter");
    init_db_with_data(&db_path);

    let out = temp_out("export_filter", "csv");

    ttab()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--filter",
            "drill", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Drill 6mm"));
    assert!(!content.contains("End Mill 10mm"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    ttab()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_filter_warns() {
    let db_path = setup_test_db("export_empty");
    init_db_with_data(&db_path);

    let out = temp_out("export_empty", "csv");

    ttab()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--filter",
            "zzz-no-match", "--force",
        ])
        .assert()
        .success()
        .stdout(contains("No tools found"));

    assert!(!std::path::Path::new(&out).exists());
}
