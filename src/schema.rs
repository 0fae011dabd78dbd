//! Fixed positional schema for AQS annual summary rows
//!
//! The schema is a data-driven table mapping column index to field name,
//! semantic type, and assignment target, consumed by a generic routine in
//! the decoder. Each text field declares the maximum length it retains;
//! assignment truncates at that bound instead of failing.
//!
//! Canonical layout: 55 columns, indices 0-54, with `county_name`,
//! `city_name`, `cbsa_name`, and `date_of_last_change` at 51-54 and
//! `parameter_name` at its 199-character width. Earlier extracts circulated
//! with an off-by-one in columns 51-53; this table is the authoritative
//! variant.

use crate::record::AqsRecord;

/// Semantic type of one schema column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Bounded text; values longer than `max_len` bytes are truncated
    Text { max_len: usize },
    /// Integer count; malformed or empty tokens yield 0
    Int,
    /// Floating-point statistic; malformed or empty tokens yield 0.0
    Float,
    /// Single-character indicator; only the token's first character is kept
    Char,
}

/// A parsed field value, ready for assignment into a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i32),
    Float(f64),
    Char(Option<char>),
}

impl FieldKind {
    /// Parse one raw token according to this kind. Never fails: malformed
    /// numerics become zero and over-length text is truncated.
    pub fn parse(self, token: &str) -> FieldValue {
        match self {
            FieldKind::Text { max_len } => FieldValue::Text(truncate_to(token, max_len)),
            FieldKind::Int => FieldValue::Int(token.trim().parse().unwrap_or(0)),
            FieldKind::Float => FieldValue::Float(token.trim().parse().unwrap_or(0.0)),
            FieldKind::Char => FieldValue::Char(token.chars().next()),
        }
    }
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            _ => String::new(),
        }
    }

    fn into_int(self) -> i32 {
        match self {
            FieldValue::Int(v) => v,
            _ => 0,
        }
    }

    fn into_float(self) -> f64 {
        match self {
            FieldValue::Float(v) => v,
            _ => 0.0,
        }
    }

    fn into_char(self) -> Option<char> {
        match self {
            FieldValue::Char(c) => c,
            _ => None,
        }
    }
}

/// Truncate to at most `max_len` bytes, backing off to a character boundary
/// so lossy-decoded replacement characters cannot split.
fn truncate_to(token: &str, max_len: usize) -> String {
    if token.len() <= max_len {
        return token.to_string();
    }
    let mut end = max_len;
    while !token.is_char_boundary(end) {
        end -= 1;
    }
    token[..end].to_string()
}

/// One column of the schema: name, semantic type, and assignment target.
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    assign: fn(&mut AqsRecord, FieldValue),
}

impl FieldDef {
    /// Parse `token` per this column's kind and assign it into the record.
    pub fn apply(&self, record: &mut AqsRecord, token: &str) {
        (self.assign)(record, self.kind.parse(token));
    }
}

const fn text(max_len: usize) -> FieldKind {
    FieldKind::Text { max_len }
}

/// The full 55-column schema, ordered by column index.
pub static SCHEMA: [FieldDef; 55] = [
    FieldDef { name: "state_code", kind: text(2), assign: |r, v| r.state_code = v.into_text() },
    FieldDef { name: "county_code", kind: text(3), assign: |r, v| r.county_code = v.into_text() },
    FieldDef { name: "site_num", kind: text(4), assign: |r, v| r.site_num = v.into_text() },
    FieldDef { name: "parameter_code", kind: text(5), assign: |r, v| r.parameter_code = v.into_text() },
    FieldDef { name: "poc", kind: FieldKind::Int, assign: |r, v| r.poc = v.into_int() },
    FieldDef { name: "latitude", kind: FieldKind::Float, assign: |r, v| r.latitude = v.into_float() },
    FieldDef { name: "longitude", kind: FieldKind::Float, assign: |r, v| r.longitude = v.into_float() },
    FieldDef { name: "datum", kind: text(9), assign: |r, v| r.datum = v.into_text() },
    FieldDef { name: "parameter_name", kind: text(199), assign: |r, v| r.parameter_name = v.into_text() },
    FieldDef { name: "sample_duration", kind: text(19), assign: |r, v| r.sample_duration = v.into_text() },
    FieldDef { name: "pollutant_standard", kind: text(49), assign: |r, v| r.pollutant_standard = v.into_text() },
    FieldDef { name: "metric_used", kind: text(149), assign: |r, v| r.metric_used = v.into_text() },
    FieldDef { name: "method_name", kind: text(199), assign: |r, v| r.method_name = v.into_text() },
    FieldDef { name: "year", kind: FieldKind::Int, assign: |r, v| r.year = v.into_int() },
    FieldDef { name: "units_of_measure", kind: text(19), assign: |r, v| r.units_of_measure = v.into_text() },
    FieldDef { name: "event_type", kind: text(19), assign: |r, v| r.event_type = v.into_text() },
    FieldDef { name: "observation_count", kind: FieldKind::Int, assign: |r, v| r.observation_count = v.into_int() },
    FieldDef { name: "observation_percent", kind: FieldKind::Int, assign: |r, v| r.observation_percent = v.into_int() },
    FieldDef { name: "completeness_indicator", kind: FieldKind::Char, assign: |r, v| r.completeness_indicator = v.into_char() },
    FieldDef { name: "valid_day_count", kind: FieldKind::Int, assign: |r, v| r.valid_day_count = v.into_int() },
    FieldDef { name: "required_day_count", kind: FieldKind::Int, assign: |r, v| r.required_day_count = v.into_int() },
    FieldDef { name: "exceptional_data_count", kind: FieldKind::Int, assign: |r, v| r.exceptional_data_count = v.into_int() },
    FieldDef { name: "null_data_count", kind: FieldKind::Int, assign: |r, v| r.null_data_count = v.into_int() },
    FieldDef { name: "primary_exceedance_count", kind: FieldKind::Int, assign: |r, v| r.primary_exceedance_count = v.into_int() },
    FieldDef { name: "secondary_exceedance_count", kind: FieldKind::Int, assign: |r, v| r.secondary_exceedance_count = v.into_int() },
    FieldDef { name: "certification_indicator", kind: text(19), assign: |r, v| r.certification_indicator = v.into_text() },
    FieldDef { name: "num_obs_below_mdl", kind: FieldKind::Int, assign: |r, v| r.num_obs_below_mdl = v.into_int() },
    FieldDef { name: "arithmetic_mean", kind: FieldKind::Float, assign: |r, v| r.arithmetic_mean = v.into_float() },
    FieldDef { name: "arithmetic_std_dev", kind: FieldKind::Float, assign: |r, v| r.arithmetic_std_dev = v.into_float() },
    FieldDef { name: "first_max_value", kind: FieldKind::Float, assign: |r, v| r.first_max_value = v.into_float() },
    FieldDef { name: "first_max_datetime", kind: text(19), assign: |r, v| r.first_max_datetime = v.into_text() },
    FieldDef { name: "second_max_value", kind: FieldKind::Float, assign: |r, v| r.second_max_value = v.into_float() },
    FieldDef { name: "second_max_datetime", kind: text(19), assign: |r, v| r.second_max_datetime = v.into_text() },
    FieldDef { name: "third_max_value", kind: FieldKind::Float, assign: |r, v| r.third_max_value = v.into_float() },
    FieldDef { name: "third_max_datetime", kind: text(19), assign: |r, v| r.third_max_datetime = v.into_text() },
    FieldDef { name: "fourth_max_value", kind: FieldKind::Float, assign: |r, v| r.fourth_max_value = v.into_float() },
    FieldDef { name: "fourth_max_datetime", kind: text(19), assign: |r, v| r.fourth_max_datetime = v.into_text() },
    FieldDef { name: "first_no_max_value", kind: FieldKind::Float, assign: |r, v| r.first_no_max_value = v.into_float() },
    FieldDef { name: "first_no_max_datetime", kind: text(19), assign: |r, v| r.first_no_max_datetime = v.into_text() },
    FieldDef { name: "second_no_max_value", kind: FieldKind::Float, assign: |r, v| r.second_no_max_value = v.into_float() },
    FieldDef { name: "second_no_max_datetime", kind: text(19), assign: |r, v| r.second_no_max_datetime = v.into_text() },
    FieldDef { name: "percentile_99", kind: FieldKind::Float, assign: |r, v| r.percentile_99 = v.into_float() },
    FieldDef { name: "percentile_98", kind: FieldKind::Float, assign: |r, v| r.percentile_98 = v.into_float() },
    FieldDef { name: "percentile_95", kind: FieldKind::Float, assign: |r, v| r.percentile_95 = v.into_float() },
    FieldDef { name: "percentile_90", kind: FieldKind::Float, assign: |r, v| r.percentile_90 = v.into_float() },
    FieldDef { name: "percentile_75", kind: FieldKind::Float, assign: |r, v| r.percentile_75 = v.into_float() },
    FieldDef { name: "percentile_50", kind: FieldKind::Float, assign: |r, v| r.percentile_50 = v.into_float() },
    FieldDef { name: "percentile_10", kind: FieldKind::Float, assign: |r, v| r.percentile_10 = v.into_float() },
    FieldDef { name: "local_site_name", kind: text(49), assign: |r, v| r.local_site_name = v.into_text() },
    FieldDef { name: "address", kind: text(199), assign: |r, v| r.address = v.into_text() },
    FieldDef { name: "state_name", kind: text(19), assign: |r, v| r.state_name = v.into_text() },
    FieldDef { name: "county_name", kind: text(49), assign: |r, v| r.county_name = v.into_text() },
    FieldDef { name: "city_name", kind: text(49), assign: |r, v| r.city_name = v.into_text() },
    FieldDef { name: "cbsa_name", kind: text(49), assign: |r, v| r.cbsa_name = v.into_text() },
    FieldDef { name: "date_of_last_change", kind: text(14), assign: |r, v| r.date_of_last_change = v.into_text() },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_FIELDS;
    use std::collections::HashSet;

    #[test]
    fn test_schema_covers_every_column() {
        assert_eq!(SCHEMA.len(), MAX_FIELDS);
    }

    #[test]
    fn test_schema_names_are_unique() {
        // Two columns must never write to the same destination field.
        let names: HashSet<&str> = SCHEMA.iter().map(|def| def.name).collect();
        assert_eq!(names.len(), SCHEMA.len());
    }

    #[test]
    fn test_schema_column_positions() {
        assert_eq!(SCHEMA[0].name, "state_code");
        assert_eq!(SCHEMA[8].name, "parameter_name");
        assert_eq!(SCHEMA[18].name, "completeness_indicator");
        assert_eq!(SCHEMA[41].name, "percentile_99");
        assert_eq!(SCHEMA[51].name, "county_name");
        assert_eq!(SCHEMA[52].name, "city_name");
        assert_eq!(SCHEMA[53].name, "cbsa_name");
        assert_eq!(SCHEMA[54].name, "date_of_last_change");
    }

    #[test]
    fn test_parse_int_silent_zero() {
        assert_eq!(FieldKind::Int.parse("42"), FieldValue::Int(42));
        assert_eq!(FieldKind::Int.parse(""), FieldValue::Int(0));
        assert_eq!(FieldKind::Int.parse("n/a"), FieldValue::Int(0));
        assert_eq!(FieldKind::Int.parse(" 7 "), FieldValue::Int(7));
    }

    #[test]
    fn test_parse_float_silent_zero() {
        assert_eq!(FieldKind::Float.parse("-87.88"), FieldValue::Float(-87.88));
        assert_eq!(FieldKind::Float.parse(""), FieldValue::Float(0.0));
        assert_eq!(FieldKind::Float.parse("12,5"), FieldValue::Float(0.0));
    }

    #[test]
    fn test_parse_text_truncates_at_bound() {
        let value = text(4).parse("abcdefgh");
        assert_eq!(value, FieldValue::Text("abcd".to_string()));

        let value = text(4).parse("ab");
        assert_eq!(value, FieldValue::Text("ab".to_string()));
    }

    #[test]
    fn test_parse_char_takes_first_character() {
        assert_eq!(FieldKind::Char.parse("yes"), FieldValue::Char(Some('y')));
        assert_eq!(FieldKind::Char.parse(""), FieldValue::Char(None));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // Lossy decoding of bad bytes yields U+FFFD, which is 3 bytes long.
        let value = text(4).parse("ab\u{fffd}cd");
        assert_eq!(value, FieldValue::Text("ab".to_string()));
    }
}
