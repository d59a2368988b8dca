//! Views over a dataset
//!
//! A view is an ordered selection of record ids. It never copies record data
//! and is replaced, not edited, when the user filters or sorts.

use serde::{Deserialize, Serialize};

use super::column::SortSpec;
use super::record::{Record, RecordId};
use crate::storage::Dataset;

/// An ordered projection of dataset records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    ids: Vec<RecordId>,
    sort: Option<SortSpec>,
}

impl View {
    /// A view of every record in dataset order
    pub fn all(dataset: &Dataset) -> Self {
        Self {
            ids: dataset.ids().collect(),
            sort: None,
        }
    }

    /// Build a view from ids already in the desired order
    pub fn from_ids(ids: Vec<RecordId>, sort: Option<SortSpec>) -> Self {
        Self { ids, sort }
    }

    /// Ids in view order
    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    /// The sort that produced this ordering, if any
    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Number of records in the view
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the view is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolve the view against its dataset, in view order
    pub fn records<'a, 'd: 'a>(&'a self, dataset: &'d Dataset) -> impl Iterator<Item = &'d Record> + 'a {
        self.ids.iter().filter_map(move |id| dataset.get(*id))
    }

    /// Resolve a contiguous range of the view
    pub fn records_in<'a, 'd: 'a>(
        &'a self,
        dataset: &'d Dataset,
        range: std::ops::Range<usize>,
    ) -> impl Iterator<Item = (RecordId, &'d Record)> + 'a {
        let end = range.end.min(self.ids.len());
        let start = range.start.min(end);
        self.ids[start..end]
            .iter()
            .filter_map(move |id| dataset.get(*id).map(|r| (*id, r)))
    }
}
