//! User input utilities for interactive CLI prompts
//!
//! Line-based prompting used before the raw-mode autocomplete prompt takes
//! over: asking for the input file path when it was not given as an
//! argument.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::{AqsError, Result};

/// Ask the user for the input file path.
pub fn prompt_file_path() -> Result<PathBuf> {
    print!("Enter path to AQS annual summary CSV file: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AqsError::configuration("No input file provided"));
    }

    Ok(PathBuf::from(trimmed))
}
