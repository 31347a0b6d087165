//! Unified application error type.
//! All modules (db, grid, form, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("No record with id {0}")]
    NotFound(i64),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Too many values: expected at most {expected}, got {got}")]
    FieldCount { expected: usize, got: usize },

    #[error("Required field '{0}' is empty")]
    RequiredField(&'static str),

    #[error("Unknown column: {0}")]
    InvalidColumn(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
