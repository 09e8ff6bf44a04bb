// src/error.rs
//! Error types for the crate edges (store, settings, CLI input).
//!
//! The engine itself never fails: malformed rows become [`MalformedRecord`]s
//! that are counted, and missing baselines resolve to zero.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid timestamp '{0}' (expected DD-MM-YYYY HH:MM:SS)")]
    InvalidTimestamp(String),

    #[error("Unknown window '{0}' (expected hour, day, week or month)")]
    InvalidWindow(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A raw row the normalizer had to drop. Reported as a count, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {reason}")]
pub struct MalformedRecord {
    /// 1-based line in the source file (0 when the row did not come from a file).
    pub line: usize,
    pub reason: String,
}
