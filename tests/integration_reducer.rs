//! End-to-end integration tests for the ingest/extract pipeline
//!
//! Writes real CSV content to temporary files and drives the public API the
//! same way the CLI does: read, then extract the distinct parameter names.

use std::io::Write;

use tempfile::NamedTempFile;

use aqs_reducer::{extract, reader};

const HEADER: &str = "State Code,County Code,Site Num,Parameter Code,POC,Latitude,Longitude,\
                      Datum,Parameter Name,Sample Duration";

fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_full_pipeline_distinct_parameters() {
    let file = write_csv(&[
        "01,003,0010,44201,1,30.49,-87.88,NAD83,Ozone,1 HOUR",
        "01,003,0010,44201,1,30.49,-87.88,NAD83,Ozone,8-HR RUN AVG",
        "01,003,0010,12128,1,30.49,-87.88,NAD83,Lead,24 HOUR",
        "01,003,0010,88101,1,30.49,-87.88,NAD83,\"PM2.5 - Local Conditions\",24 HOUR",
    ]);

    let store = reader::read_records(file.path(), false).unwrap();
    assert_eq!(store.len(), 5);

    let parameters = extract::distinct_parameter_names(&store);
    // Lower-cased at tokenization time, deduplicated, sorted.
    assert_eq!(parameters, ["\"pm2.5 - local conditions\"", "lead", "ozone"]);

    let display = extract::strip_quotes(&parameters);
    assert_eq!(display, ["pm2.5 - local conditions", "lead", "ozone"]);
}

#[test]
fn test_header_row_never_reaches_the_candidate_list() {
    let file = write_csv(&["01,003,0010,44201,1,30.49,-87.88,NAD83,Ozone,1 HOUR"]);

    let store = reader::read_records(file.path(), false).unwrap();
    let parameters = extract::distinct_parameter_names(&store);

    assert_eq!(parameters, ["ozone"]);
}

#[test]
fn test_digit_leading_parameters_sort_before_letters() {
    let file = write_csv(&[
        "01,003,0010,44201,1,30.49,-87.88,NAD83,Ozone,1 HOUR",
        "01,003,0010,99999,1,30.49,-87.88,NAD83,5,1 HOUR",
        "01,003,0010,12128,1,30.49,-87.88,NAD83,Lead,24 HOUR",
    ]);

    let store = reader::read_records(file.path(), false).unwrap();
    let parameters = extract::distinct_parameter_names(&store);

    assert_eq!(parameters, ["5", "lead", "ozone"]);
}

#[test]
fn test_quoted_commas_do_not_split_fields() {
    let file = write_csv(&[
        "01,003,0010,88101,1,30.49,-87.88,NAD83,\"PM2.5, Local\",24 HOUR",
    ]);

    let store = reader::read_records(file.path(), false).unwrap();
    let record = store.get(1).unwrap();

    assert_eq!(record.parameter_name, "\"pm2.5, local\"");
    assert_eq!(record.sample_duration, "24 hour");
}

#[test]
fn test_short_and_blank_lines_degrade_to_defaults() {
    let file = write_csv(&["01,003", ""]);

    let store = reader::read_records(file.path(), false).unwrap();
    assert_eq!(store.len(), 3);

    let short = store.get(1).unwrap();
    assert_eq!(short.state_code, "01");
    assert_eq!(short.county_code, "003");
    assert_eq!(short.parameter_name, "");
    assert_eq!(short.latitude, 0.0);

    let blank = store.get(2).unwrap();
    assert_eq!(blank, &aqs_reducer::AqsRecord::default());
}
