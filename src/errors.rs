//! Unified application error type.
//! Every layer (db, store, core, cli) returns AppError so that the CLI can
//! report failures in one place.

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
    // Persistence
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid workout day id: {0} (expected <week>_<day>, e.g. 3_Mon)")]
    InvalidDayId(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Enter a valid weight and reps (both must be positive numbers)")]
    InvalidOneRepMax,

    #[error("Invalid program file: {0}")]
    InvalidProgram(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Day {0} is not part of the active program")]
    UnknownDay(String),

    #[error("No workout logged for {0}")]
    NoWorkoutForDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

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
