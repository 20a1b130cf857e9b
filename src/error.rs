// File: src/error.rs
//! Error types for the fallible edges of the crate: configuration, export and
//! the C ABI. Analysis itself never fails.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChandasError {
    /// I/O errors (reading input, writing reports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid analyzer configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Input that cannot be analyzed at all, e.g. non-UTF-8 bytes over FFI
    #[error("Input error: {0}")]
    Input(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Atomic rename of an export file failed
    #[error("Persist error: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Result type alias for operations that may fail with ChandasError.
pub type Result<T> = std::result::Result<T, ChandasError>;

impl ChandasError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ChandasError::Config(msg.into())
    }

    pub fn input<S: Into<String>>(msg: S) -> Self {
        ChandasError::Input(msg.into())
    }
}
