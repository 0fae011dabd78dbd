//! Command execution for the AQS reducer CLI
//!
//! Drives the full pipeline: logging setup, path resolution, ingestion,
//! distinct-parameter extraction, list printing, and the interactive prompt.

use colored::Colorize;
use tracing::{debug, info};

use crate::cli::args::Args;
use crate::cli::input;
use crate::constants::UNIQUE_PARAMETERS_HEADING;
use crate::error::{AqsError, Result};
use crate::{extract, prompt, reader};

/// Run the reducer end to end and return the selected parameter name.
pub fn run(args: Args) -> Result<String> {
    setup_logging(&args);
    args.validate()?;

    let path = match &args.input {
        Some(path) => path.clone(),
        None => input::prompt_file_path()?,
    };

    info!("reading AQS records from {}", path.display());
    let store = reader::read_records(&path, args.show_progress())?;
    if store.is_empty() {
        return Err(AqsError::NoRecords { path });
    }
    debug!("{} lines stored, header included", store.len());

    let parameters = extract::distinct_parameter_names(&store);
    let display = extract::strip_quotes(&parameters);
    // Records are no longer needed once the distinct list exists.
    drop(store);

    println!("{}", UNIQUE_PARAMETERS_HEADING.bold());
    for (i, name) in display.iter().enumerate() {
        println!("Parameter {}: {}", i + 1, name);
    }

    let selected = prompt::read_parameter(&display)?;
    println!("Selected parameter: {}", selected.green());

    Ok(selected)
}

/// Set up structured logging on stderr from the verbosity flags.
fn setup_logging(args: &Args) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aqs_reducer={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("logging initialized at level: {}", log_level);
}
