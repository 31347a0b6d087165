//! Library-level tests for the grid projection, the comparator, sorting
//! and filtering.

use rusqlite::Connection;
use std::cmp::Ordering;
use tooltab::db::initialize::init_db;
use tooltab::db::queries::{count_tools, delete_tool, insert_tool};
use tooltab::grid::{GridModel, SortDirection};
use tooltab::models::cell::{CellKind, CellValue, compare_values};
use tooltab::models::schema::grid_column_index;

mod common;
use common::tool_values;

fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init schema");
    conn
}

#[test]
fn comparator_is_numeric_when_both_sides_parse() {
    assert_eq!(compare_values("2.5", "10"), Ordering::Less);
    assert_eq!(compare_values("10", "2.5"), Ordering::Greater);
    assert_eq!(compare_values("3", "3.0"), Ordering::Equal);
    // signed offsets must order numerically
    assert_eq!(compare_values("-0.3", "0"), Ordering::Less);
    assert_eq!(compare_values("-2", "-10"), Ordering::Greater);
}

#[test]
fn comparator_falls_back_to_lexical() {
    // one non-numeric side makes the whole comparison lexical
    assert_eq!(compare_values("abc", "2"), Ordering::Greater);
    assert_eq!(compare_values("B", "a"), Ordering::Less); // case-sensitive
    assert_eq!(compare_values("", "x"), Ordering::Less);
}

#[test]
fn comparator_is_reflexive() {
    for v in ["", "0", "-1.5", "abc", "2.5"] {
        assert_eq!(compare_values(v, v), Ordering::Equal);
    }
}

#[test]
fn cell_projection_falls_back_to_defaults() {
    assert_eq!(
        CellValue::from_field(CellKind::Real, "not a number"),
        CellValue::Real(0.0)
    );
    assert_eq!(
        CellValue::from_field(CellKind::Integer, "2.5"),
        CellValue::Int(0)
    );
    assert_eq!(
        CellValue::from_field(CellKind::Real, " 2.5 "),
        CellValue::Real(2.5)
    );
    assert_eq!(
        CellValue::from_field(CellKind::Text, "2.5"),
        CellValue::Text("2.5".to_string())
    );
}

#[test]
fn reload_row_count_matches_store() {
    let conn = test_conn();
    let mut grid = GridModel::new();

    for i in 0..5 {
        insert_tool(&conn, &tool_values(&format!("Tool {i}"), "1.0", "1")).unwrap();
    }
    grid.reload(&conn).unwrap();
    assert_eq!(grid.len() as i64, count_tools(&conn).unwrap());
    assert_eq!(grid.len(), 5);

    let id = grid.rows()[0].id;
    delete_tool(&conn, id).unwrap();
    grid.reload(&conn).unwrap();
    assert_eq!(grid.len() as i64, count_tools(&conn).unwrap());
    assert_eq!(grid.len(), 4);
}

#[test]
fn locate_by_id_finds_current_row() {
    let conn = test_conn();
    let id_a = insert_tool(&conn, &tool_values("A", "1", "1")).unwrap();
    let id_b = insert_tool(&conn, &tool_values("B", "2", "2")).unwrap();

    let mut grid = GridModel::new();
    grid.reload(&conn).unwrap();

    let row = grid.locate_by_id(id_b).expect("B is displayed");
    assert_eq!(grid.rows()[row].id, id_b);
    assert!(grid.locate_by_id(9999).is_none());

    delete_tool(&conn, id_a).unwrap();
    grid.reload(&conn).unwrap();
    assert!(grid.locate_by_id(id_a).is_none());
}

#[test]
fn numeric_column_sorts_by_value_not_text() {
    let conn = test_conn();
    insert_tool(&conn, &tool_values("Long", "10", "1")).unwrap();
    insert_tool(&conn, &tool_values("Drill", "2.5", "1")).unwrap();

    let mut grid = GridModel::new();
    grid.reload(&conn).unwrap();

    let l_col = grid_column_index("L").unwrap();
    grid.sort_column(l_col, false);

    let first = &grid.rows()[0];
    assert_eq!(first.cell_text(l_col), "2.5");
    assert_eq!(first.cells()[l_col - 1], CellValue::Real(2.5));
    assert_eq!(
        grid.locate_by_id(first.id),
        Some(0),
        "Drill (L=2.5) sorts before L=10"
    );
}

#[test]
fn sort_is_stable_and_toggle_flips_direction() {
    let conn = test_conn();
    // equal sort keys (same T), distinct ids in insertion order
    let id1 = insert_tool(&conn, &tool_values("First", "1", "5")).unwrap();
    let id2 = insert_tool(&conn, &tool_values("Second", "2", "5")).unwrap();
    let id3 = insert_tool(&conn, &tool_values("Third", "3", "5")).unwrap();

    let mut grid = GridModel::new();
    grid.reload(&conn).unwrap();

    let t_col = grid_column_index("T").unwrap();

    let dir = grid.toggle_sort(t_col);
    assert_eq!(dir, SortDirection::Ascending);
    let order_asc: Vec<i64> = grid.rows().iter().map(|r| r.id).collect();
    assert_eq!(order_asc, vec![id1, id2, id3], "equal keys keep store order");

    let dir = grid.toggle_sort(t_col);
    assert_eq!(dir, SortDirection::Descending);
    let order_desc: Vec<i64> = grid.rows().iter().map(|r| r.id).collect();
    assert_eq!(
        order_desc,
        vec![id1, id2, id3],
        "reversing equal keys must not reorder them"
    );

    // a different column starts ascending again
    let name_col = grid_column_index("Name").unwrap();
    assert_eq!(grid.toggle_sort(name_col), SortDirection::Ascending);
}

#[test]
fn sort_indicator_tracks_the_sorted_column() {
    let conn = test_conn();
    insert_tool(&conn, &tool_values("A", "1", "1")).unwrap();

    let mut grid = GridModel::new();
    grid.reload(&conn).unwrap();

    let l_col = grid_column_index("L").unwrap();
    assert!(grid.indicator(l_col).is_none());

    grid.sort_column(l_col, true);
    assert_eq!(grid.indicator(l_col), Some(SortDirection::Descending));
    assert!(grid.indicator(0).is_none());

    // reload resets the indicator: the displayed order is the store's again
    grid.reload(&conn).unwrap();
    assert!(grid.indicator(l_col).is_none());
}

#[test]
fn filter_matches_any_column_case_insensitively() {
    let conn = test_conn();
    insert_tool(&conn, &tool_values("Drill 6mm", "2.5", "1")).unwrap();
    insert_tool(&conn, &tool_values("End Mill", "10", "2")).unwrap();

    let mut grid = GridModel::new();
    grid.reload(&conn).unwrap();

    // empty needle matches everything
    assert_eq!(grid.filter("").len(), grid.len());

    let hits = grid.filter("DRILL");
    assert_eq!(hits.len(), 1);
    assert_eq!(grid.rows()[hits[0]].cell_text(2), "Drill 6mm");

    // id column participates in matching
    let by_id = grid.filter(&grid.rows()[1].id.to_string());
    assert!(!by_id.is_empty());

    // idempotent: filtering again with the same needle changes nothing
    assert_eq!(grid.filter("mill"), grid.filter("mill"));
}
