//! The loaded dataset
//!
//! Owns every record kept at load time. Nothing edits a record after it has
//! been stored; all consumers borrow.

use std::collections::BTreeSet;

use crate::models::{Record, RecordId};

/// The full, immutable record set in CSV row order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wrap records that already satisfy the load-time inclusion rule
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were loaded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id.index())
    }

    /// All records in dataset order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// All record ids in dataset order
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        (0..self.records.len()).map(RecordId::new)
    }

    /// Records paired with their ids
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Record)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (RecordId::new(i), r))
    }

    /// Sorted distinct non-empty department names
    pub fn departments(&self) -> Vec<String> {
        distinct(self.records.iter().filter_map(|r| r.department.as_deref()))
    }

    /// Sorted distinct non-empty budget (program) names
    pub fn programs(&self) -> Vec<String> {
        distinct(self.records.iter().filter_map(|r| r.budget_name.as_deref()))
    }

    /// Sorted distinct years present in the data
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            Record::new(2024, "DOE").with_department("Facilities").with_budget_name("Repairs"),
            Record::new(2023, "DOE").with_department("Arts"),
            Record::new(2024, "DOE").with_department("Facilities").with_budget_name("Custodial"),
            Record::new(2025, "DOE"),
        ])
    }

    #[test]
    fn test_lookup() {
        let ds = dataset();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.get(RecordId::new(1)).unwrap().year, 2023);
        assert!(ds.get(RecordId::new(4)).is_none());
    }

    #[test]
    fn test_distinct_values_are_sorted() {
        let ds = dataset();
        assert_eq!(ds.departments(), vec!["Arts", "Facilities"]);
        assert_eq!(ds.programs(), vec!["Custodial", "Repairs"]);
        assert_eq!(ds.years(), vec![2023, 2024, 2025]);
    }

    #[test]
    fn test_ids_match_positions() {
        let ds = dataset();
        let ids: Vec<_> = ds.ids().map(|id| id.index()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }
}
