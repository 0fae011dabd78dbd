//! Command-line argument definitions for the AQS reducer
//!
//! This module defines the CLI interface using the clap derive API.

use clap::Parser;
use std::path::PathBuf;

use crate::error::{AqsError, Result};

/// CLI arguments for the AQS reducer
///
/// Ingests a US EPA Air Quality System annual summary CSV extract, lists the
/// distinct pollutant parameters it contains, and lets the user pick one via
/// an interactive autocomplete prompt.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "aqs-reducer",
    version,
    about = "Pick a pollutant parameter from an EPA AQS annual summary CSV extract",
    long_about = "Reads a US EPA Air Quality System (AQS) annual summary CSV extract, decodes \
                  every row against the fixed 55-column schema, prints the distinct parameter \
                  names as a numbered list, and launches an interactive autocomplete prompt to \
                  select one."
)]
pub struct Args {
    /// Path to the AQS annual summary CSV extract
    ///
    /// If omitted, the path is requested interactively.
    #[arg(value_name = "FILE", help = "Path to the AQS annual summary CSV file")]
    pub input: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if input.is_dir() {
                return Err(AqsError::configuration(format!(
                    "Input path is a directory, not a file: {}",
                    input.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the ingestion progress spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
