//! In-memory record store
//!
//! Owns the decoded records in insertion order. Record 0 is the decoded
//! header line; [`RecordStore::data_records`] starts iteration at record 1
//! so downstream consumers never see it.

use std::collections::TryReserveError;

use crate::record::AqsRecord;

/// Ordered, append-only store of decoded records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<AqsRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, header included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AqsRecord> {
        self.records.get(index)
    }

    /// Append one record, all-or-nothing.
    ///
    /// Growth is attempted through `try_reserve` so an allocation failure
    /// leaves every previously stored record intact; the caller decides
    /// whether the resulting partial store is acceptable.
    pub fn try_append(&mut self, record: AqsRecord) -> Result<(), TryReserveError> {
        self.records.try_reserve(1)?;
        self.records.push(record);
        Ok(())
    }

    /// All records in insertion order, header included.
    pub fn records(&self) -> &[AqsRecord] {
        &self.records
    }

    /// Data records only: everything after the decoded header line.
    pub fn data_records(&self) -> impl Iterator<Item = &AqsRecord> {
        self.records.iter().skip(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(parameter_name: &str) -> AqsRecord {
        AqsRecord {
            parameter_name: parameter_name.to_string(),
            ..AqsRecord::default()
        }
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = RecordStore::new();
        store.try_append(named("header")).unwrap();
        store.try_append(named("ozone")).unwrap();
        store.try_append(named("lead")).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(1).unwrap().parameter_name, "ozone");
        assert_eq!(store.get(2).unwrap().parameter_name, "lead");
    }

    #[test]
    fn test_data_records_skip_the_header() {
        let mut store = RecordStore::new();
        store.try_append(named("parameter name")).unwrap();
        store.try_append(named("ozone")).unwrap();

        let names: Vec<&str> = store
            .data_records()
            .map(|r| r.parameter_name.as_str())
            .collect();
        assert_eq!(names, ["ozone"]);
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.data_records().count(), 0);
        assert!(store.get(0).is_none());
    }
}
