//! Interaction state of one browsing session
//!
//! A [`BrowseSession`] tracks what the user is looking at: the active filter
//! criteria, the active sort and the current page. Changing the criteria or
//! the sort always returns to the first page; the page index is the only part
//! of the state that changes independently.

use crate::config::BrowserConfig;
use crate::core::criteria::FilterCriteria;
use crate::core::engine::{QueryEngine, run_query};
use crate::core::error::QueryResult;
use crate::core::field::SortKey;
use crate::core::query::{Page, PageRequest};
use crate::core::record::PolicyRecord;
use crate::core::sort::SortSpec;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseSession {
    criteria: FilterCriteria,
    sort: SortSpec,
    page: PageRequest,
}

impl BrowseSession {
    /// Start a session with the configured page size and initial sort
    pub fn new(config: &BrowserConfig) -> QueryResult<Self> {
        Ok(Self {
            criteria: FilterCriteria::default(),
            sort: config.default_sort,
            page: PageRequest::first(config.page_size)?,
        })
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    /// Apply new search criteria and return to the first page
    pub fn search(&mut self, criteria: FilterCriteria) {
        tracing::debug!(?criteria, "search criteria changed");
        self.criteria = criteria;
        self.page = self.page.with_page_index(0);
    }

    /// Clear all search criteria and return to the first page
    pub fn reset(&mut self) {
        self.search(FilterCriteria::default());
    }

    /// Handle a click on a column header
    pub fn request_sort(&mut self, key: SortKey) {
        self.set_sort(self.sort.request(key));
    }

    /// Replace the sort and return to the first page
    pub fn set_sort(&mut self, sort: SortSpec) {
        tracing::debug!(sort = %sort, "sort changed");
        self.sort = sort;
        self.page = self.page.with_page_index(0);
    }

    /// Move to another page, keeping criteria and sort
    pub fn go_to_page(&mut self, page_index: usize) {
        self.page = self.page.with_page_index(page_index);
    }

    /// The current page of a dataset
    pub fn view<'a>(&self, records: &'a [PolicyRecord]) -> Page<&'a PolicyRecord> {
        run_query(records, &self.criteria, self.sort, self.page)
    }

    /// The current page, reusing the engine's cached view where possible
    pub fn view_with<'a>(&self, engine: &mut QueryEngine<'a>) -> Page<&'a PolicyRecord> {
        engine.execute(&self.criteria, self.sort, self.page)
    }
}
