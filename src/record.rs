//! Record model and positional decoding for AQS annual summary rows
//!
//! One [`AqsRecord`] holds every field of the fixed schema. Decoding never
//! fails: missing tokens leave fields at their defaults, malformed numerics
//! become zero, and over-length text is truncated at its declared bound.

use crate::constants::UNIT_SEPARATOR;
use crate::schema::SCHEMA;

/// One decoded AQS annual summary row.
///
/// Every field is populated after decoding, regardless of how many tokens
/// the source line contained; short lines leave trailing fields at their
/// zero/empty defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AqsRecord {
    // Site and parameter identifiers
    pub state_code: String,
    pub county_code: String,
    pub site_num: String,
    pub parameter_code: String,
    pub poc: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub datum: String,
    pub parameter_name: String,

    // Sampling metadata
    pub sample_duration: String,
    pub pollutant_standard: String,
    pub metric_used: String,
    pub method_name: String,
    pub year: i32,
    pub units_of_measure: String,
    pub event_type: String,

    // Observation and day counts
    pub observation_count: i32,
    pub observation_percent: i32,
    pub completeness_indicator: Option<char>,
    pub valid_day_count: i32,
    pub required_day_count: i32,
    pub exceptional_data_count: i32,
    pub null_data_count: i32,
    pub primary_exceedance_count: i32,
    pub secondary_exceedance_count: i32,
    pub certification_indicator: String,
    pub num_obs_below_mdl: i32,

    // Summary statistics
    pub arithmetic_mean: f64,
    pub arithmetic_std_dev: f64,
    pub first_max_value: f64,
    pub first_max_datetime: String,
    pub second_max_value: f64,
    pub second_max_datetime: String,
    pub third_max_value: f64,
    pub third_max_datetime: String,
    pub fourth_max_value: f64,
    pub fourth_max_datetime: String,
    pub first_no_max_value: f64,
    pub first_no_max_datetime: String,
    pub second_no_max_value: f64,
    pub second_no_max_datetime: String,
    pub percentile_99: f64,
    pub percentile_98: f64,
    pub percentile_95: f64,
    pub percentile_90: f64,
    pub percentile_75: f64,
    pub percentile_50: f64,
    pub percentile_10: f64,

    // Site location descriptors
    pub local_site_name: String,
    pub address: String,
    pub state_name: String,
    pub county_name: String,
    pub city_name: String,
    pub cbsa_name: String,
    pub date_of_last_change: String,
}

/// Decode one tokenized line into a record.
///
/// The line is split on the unit separator; consecutive separators yield
/// empty tokens, not skipped ones. Tokens are routed by position through the
/// schema table. Tokens beyond the schema are ignored; fewer tokens than the
/// schema leave remaining fields at their defaults. Non-UTF-8 bytes degrade
/// via lossy conversion rather than failing the record.
pub fn decode(line: &[u8]) -> AqsRecord {
    let mut record = AqsRecord::default();

    for (def, raw) in SCHEMA.iter().zip(line.split(|&b| b == UNIT_SEPARATOR)) {
        let token = String::from_utf8_lossy(raw);
        def.apply(&mut record, &token);
    }

    record
}
