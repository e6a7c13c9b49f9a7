//! Query composition: filter, then sort, then paginate
//!
//! [`run_query`] is the pure composition. [`QueryEngine`] produces the same
//! pages but keeps the filtered-and-sorted sequence of the last query, so that
//! paging through one result set does not re-filter or re-sort it.

use crate::core::criteria::{FilterCriteria, filter};
use crate::core::query::{Page, PageRequest, paginate};
use crate::core::record::PolicyRecord;
use crate::core::sort::{SortSpec, sort};

/// Filter, sort and slice a dataset
///
/// Never fails: empty datasets, empty or inverted criteria and page indices
/// past the end all produce a (possibly empty) page with the correct total.
pub fn run_query<'a>(
    records: &'a [PolicyRecord],
    criteria: &FilterCriteria,
    sort_spec: SortSpec,
    page: PageRequest,
) -> Page<&'a PolicyRecord> {
    let ordered = sort(filter(records, criteria), sort_spec);
    let page = paginate(&ordered, page);

    tracing::debug!(
        total = records.len(),
        matched = page.total_count,
        sort = %sort_spec,
        page_index = page.request.page_index(),
        page_size = page.request.page_size(),
        "ran policy query"
    );
    page
}

#[derive(Debug)]
struct CachedView<'a> {
    criteria: FilterCriteria,
    sort: SortSpec,
    ordered: Vec<&'a PolicyRecord>,
}

/// Query runner that caches the filtered-and-sorted intermediate
///
/// The dataset is borrowed immutably for the engine's lifetime. A query with
/// the same criteria and sort as the previous one only re-slices.
#[derive(Debug)]
pub struct QueryEngine<'a> {
    records: &'a [PolicyRecord],
    cached: Option<CachedView<'a>>,
}

impl<'a> QueryEngine<'a> {
    /// Create an engine over a dataset
    pub fn new(records: &'a [PolicyRecord]) -> Self {
        Self {
            records,
            cached: None,
        }
    }

    /// The full dataset
    pub fn records(&self) -> &'a [PolicyRecord] {
        self.records
    }

    /// The filtered-and-sorted sequence for the given criteria and sort
    pub fn view(&mut self, criteria: &FilterCriteria, sort_spec: SortSpec) -> &[&'a PolicyRecord] {
        let stale = self
            .cached
            .as_ref()
            .is_none_or(|c| c.sort != sort_spec || &c.criteria != criteria);

        if stale {
            let ordered = sort(filter(self.records, criteria), sort_spec);
            tracing::debug!(
                total = self.records.len(),
                matched = ordered.len(),
                sort = %sort_spec,
                "rebuilt cached policy view"
            );
            self.cached = Some(CachedView {
                criteria: criteria.clone(),
                sort: sort_spec,
                ordered,
            });
        }

        match &self.cached {
            Some(cached) => &cached.ordered,
            None => &[],
        }
    }

    /// Run a query, reusing the cached view when only the page changed
    pub fn execute(
        &mut self,
        criteria: &FilterCriteria,
        sort_spec: SortSpec,
        page: PageRequest,
    ) -> Page<&'a PolicyRecord> {
        paginate(self.view(criteria, sort_spec), page)
    }

    /// Whether a view is currently cached
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Drop the cached view
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
