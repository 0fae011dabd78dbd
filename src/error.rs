//! Error handling for AQS reducer operations.
//!
//! Provides error types with context for file ingestion, terminal
//! configuration, and interactive prompt failures. Per-field decoding
//! problems are deliberately not errors: malformed numerics and over-length
//! text degrade to defaults inside the decoder.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AqsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not allocate record storage for {path}")]
    Allocation { path: PathBuf },

    #[error("Input file contains no records: {path}")]
    NoRecords { path: PathBuf },

    #[error("Terminal error: {message}")]
    Terminal {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Interrupted by user")]
    Interrupted,
}

impl AqsError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a terminal error with the underlying IO failure
    pub fn terminal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            message: message.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AqsError>;
