/*!
# Record Store

The working dataset: an ordered sequence of [`PersonnelRecord`] held entirely
in memory and owned by the composing application.

The store exposes wholesale replacement only. Imports decode into a fresh
vector first and swap it in afterwards, so a failed or partial import never
mutates the existing dataset.
*/

use crate::record::PersonnelRecord;

/// Ordered, in-memory personnel dataset.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<PersonnelRecord>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with `records`.
    pub fn from_records(records: Vec<PersonnelRecord>) -> Self {
        Self { records }
    }

    /// Replace the entire dataset with `records`.
    ///
    /// This is the only mutation the store supports; there is no per-record
    /// update API.
    pub fn replace_all(&mut self, records: Vec<PersonnelRecord>) {
        self.records = records;
    }

    /// The full dataset, in load order.
    pub fn get_all(&self) -> &[PersonnelRecord] {
        &self.records
    }

    /// Number of records currently loaded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{GeoPoint, RESIDENCE_LABEL, WORKPLACE_LABEL};

    fn sample_record(id: i64, name: &str) -> PersonnelRecord {
        PersonnelRecord {
            id,
            name: name.to_string(),
            department: "技术部".to_string(),
            position: "工程师".to_string(),
            residence: GeoPoint::unknown(RESIDENCE_LABEL),
            workplace: GeoPoint::unknown(WORKPLACE_LABEL),
            join_date: "2022-01-01".to_string(),
        }
    }

    #[test]
    fn test_replace_all_swaps_dataset() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());

        store.replace_all(vec![sample_record(1, "张三"), sample_record(2, "李四")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_all()[0].name, "张三");

        // A second import replaces, never merges
        store.replace_all(vec![sample_record(3, "王五")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_all()[0].id, 3);
    }

    #[test]
    fn test_get_all_preserves_order() {
        let store = RecordStore::from_records(vec![
            sample_record(2, "李四"),
            sample_record(1, "张三"),
            sample_record(3, "王五"),
        ]);
        let ids: Vec<i64> = store.get_all().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
