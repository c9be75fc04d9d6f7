//! Unified application error type.
//! Every layer (store, core, archive, cli) returns AppError so that the
//! binary has one place where failures are reported to the user.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Row-level decoding
    // ---------------------------
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    // ---------------------------
    // Input parsing
    // ---------------------------
    #[error("Invalid event string: {0}")]
    InvalidEventString(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Access
    // ---------------------------
    #[error("User '{0}' is not in the allow-list")]
    Unauthorized(String),

    // ---------------------------
    // Config / archive
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote archive error: {0}")]
    Archive(String),
}

impl AppError {
    /// True for failures of the underlying storage (the `IOFailure` class),
    /// as opposed to row-level decoding problems.
    pub fn is_io_failure(&self) -> bool {
        match self {
            AppError::Io(_) => true,
            AppError::Csv(e) => e.is_io_error(),
            _ => false,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
