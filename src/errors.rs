//! Unified application error type.
//! All modules (core, store, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid expected work hours: {0}")]
    InvalidQuota(String),

    #[error("{0}")]
    Usage(String),

    // ---------------------------
    // Session list errors
    // ---------------------------
    #[error("No punch with id {0}")]
    SessionNotFound(u64),

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("{0}")]
    NoValidRows(String),

    #[error("{0}")]
    EmptyBulkInput(String),

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
