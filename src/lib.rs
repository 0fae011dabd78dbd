//! AQS Reducer Library
//!
//! A Rust library for ingesting US EPA Air Quality System (AQS) annual
//! summary CSV extracts and selecting a pollutant parameter interactively.
//!
//! This library provides tools for:
//! - Quote-aware line tokenization that rewrites unquoted commas into a
//!   private single-byte delimiter
//! - Positional decoding of rows into a fixed 55-field record schema with
//!   never-fail field semantics
//! - Distinct parameter-name extraction with digit-before-letter ordering
//! - A raw-mode terminal autocomplete prompt with tab cycling

pub mod constants;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod reader;
pub mod record;
pub mod schema;
pub mod store;
pub mod tokenizer;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use error::{AqsError, Result};
pub use record::AqsRecord;
pub use store::RecordStore;
