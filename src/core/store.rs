//! Store trait for querying a policy dataset

use crate::core::criteria::{FilterCriteria, filter};
use crate::core::engine::run_query;
use crate::core::query::{Page, PageRequest};
use crate::core::record::PolicyRecord;
use crate::core::sort::{SortSpec, sort};

/// Trait for stores holding an immutable policy dataset
///
/// Implementors only provide [`list_all`](QueryableStore::list_all); filtering,
/// sorting and paging come with default implementations over that slice.
pub trait QueryableStore: Send + Sync {
    /// Get all records (unfiltered, in load order)
    fn list_all(&self) -> &[PolicyRecord];

    /// Apply filter criteria to the dataset
    ///
    /// # Returns
    /// The matching records, in load order
    fn apply_filters(&self, criteria: &FilterCriteria) -> Vec<&PolicyRecord> {
        filter(self.list_all(), criteria)
    }

    /// Apply a sort to a collection of records
    ///
    /// # Returns
    /// The records, stably reordered
    fn apply_sort<'a>(&self, data: Vec<&'a PolicyRecord>, spec: SortSpec) -> Vec<&'a PolicyRecord> {
        sort(data, spec)
    }

    /// Filter, sort and slice the dataset
    fn query(
        &self,
        criteria: &FilterCriteria,
        spec: SortSpec,
        page: PageRequest,
    ) -> Page<&PolicyRecord> {
        run_query(self.list_all(), criteria, spec, page)
    }

    /// Number of records in the dataset
    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.list_all().is_empty()
    }
}
