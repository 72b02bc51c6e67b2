//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Precondition violations (start while active, stop while idle)
    // ---------------------------
    #[error("{0}")]
    Precondition(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("error reading session: {0}")]
    Session(String),

    #[error("Log error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Session record error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Notification errors
    // ---------------------------
    #[error("Notification error: {0}")]
    Notify(String),
}

impl AppError {
    /// Precondition violations are reported on stdout and must leave state
    /// untouched; everything else goes to stderr.
    pub fn is_precondition(&self) -> bool {
        matches!(self, AppError::Precondition(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
