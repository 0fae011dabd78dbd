//! File ingestion
//!
//! Reads the input file line by line, tokenizes each line in place, decodes
//! it, and appends it to a [`RecordStore`]. Blocking, single-threaded; one
//! line-read per tokenizer/decoder cycle.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::constants::{MAX_LINE_LENGTH, PROGRESS_UPDATE_INTERVAL};
use crate::error::{AqsError, Result};
use crate::record;
use crate::store::RecordStore;
use crate::tokenizer;

/// Read every line of `path` into a store of decoded records.
///
/// The header line is decoded and stored like any other record. A blank
/// line still produces one all-default record, so the store's count equals
/// the file's line count; callers needing meaningful records only must
/// filter empties themselves.
///
/// If record storage cannot grow mid-stream, everything parsed so far is
/// returned and a warning is logged; only a failure before the first record
/// is fatal.
pub fn read_records(path: &Path, show_progress: bool) -> Result<RecordStore> {
    let file = File::open(path).map_err(|source| AqsError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let mut store = RecordStore::new();

    let progress = show_progress.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message("Reading records");
        pb
    });

    let mut line = Vec::with_capacity(MAX_LINE_LENGTH);
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        while matches!(line.last(), Some(b'\n') | Some(b'\r')) {
            line.pop();
        }
        // Input-length bound; excess bytes on a pathological line are dropped.
        line.truncate(MAX_LINE_LENGTH);

        tokenizer::tokenize(&mut line);
        let record = record::decode(&line);

        if store.try_append(record).is_err() {
            if store.is_empty() {
                return Err(AqsError::Allocation {
                    path: path.to_path_buf(),
                });
            }
            warn!(
                "record storage exhausted after {} records; continuing with the partial store",
                store.len()
            );
            break;
        }

        if let Some(pb) = &progress {
            if store.len() % PROGRESS_UPDATE_INTERVAL == 0 {
                pb.set_message(format!("Reading records: {}", store.len()));
                pb.tick();
            }
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    debug!("read {} lines from {}", store.len(), path.display());
    Ok(store)
}
