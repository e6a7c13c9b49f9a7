//! Page requests, pagination and query parameters

use crate::config::BrowserConfig;
use crate::core::criteria::FilterCriteria;
use crate::core::error::{QueryError, QueryResult};
use crate::core::sort::SortSpec;
use serde::{Deserialize, Serialize};

/// A request for one page of results
///
/// `page_index` is zero-based. The page size is always positive; requests are
/// built through [`PageRequest::new`], which rejects a zero size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPageRequest")]
pub struct PageRequest {
    page_index: usize,
    page_size: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageRequest {
    #[serde(default)]
    page_index: usize,
    #[serde(default = "default_page_size")]
    page_size: usize,
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = QueryError;

    fn try_from(raw: RawPageRequest) -> Result<Self, Self::Error> {
        PageRequest::new(raw.page_index, raw.page_size)
    }
}

/// Rows per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl PageRequest {
    /// Create a page request, rejecting a zero page size
    pub fn new(page_index: usize, page_size: usize) -> QueryResult<Self> {
        if page_size == 0 {
            return Err(QueryError::InvalidPageSize { size: page_size });
        }
        Ok(Self {
            page_index,
            page_size,
        })
    }

    /// First page with the given size
    pub fn first(page_size: usize) -> QueryResult<Self> {
        Self::new(0, page_size)
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Same page size, different page
    pub fn with_page_index(self, page_index: usize) -> Self {
        Self { page_index, ..self }
    }

    /// Number of records skipped before this page
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }

    /// Move the request onto the last existing page if it starts past the end
    ///
    /// With `total == 0` this is page 0.
    pub fn clamp_to(self, total: usize) -> Self {
        let last = total.saturating_sub(1) / self.page_size;
        self.with_page_index(self.page_index.min(last))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results together with the size of the full result set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The records on this page
    pub items: Vec<T>,

    /// Total number of records after filtering, before slicing
    pub total_count: usize,

    /// The request this page answers
    #[serde(skip)]
    pub request: PageRequest,
}

impl<T> Page<T> {
    /// Pagination metadata for this page
    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta::new(self.request, self.total_count)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform the records on this page
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            request: self.request,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page (zero-based)
    pub page_index: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Derive pagination metadata for a request over `total` items
    pub fn new(request: PageRequest, total: usize) -> Self {
        let page_size = request.page_size();
        let total_pages = total.div_ceil(page_size);
        let end = request.offset().saturating_add(page_size);

        Self {
            page_index: request.page_index(),
            page_size,
            total,
            total_pages,
            has_next: end < total,
            has_prev: request.page_index() > 0,
        }
    }
}

/// Extract one page from an ordered sequence
///
/// The slice is `items[i*n .. i*n + n]` clipped to the sequence; a page that
/// starts past the end is empty. `total_count` is always `items.len()`.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let total_count = items.len();
    let start = request.offset().min(total_count);
    let end = start.saturating_add(request.page_size()).min(total_count);

    tracing::trace!(
        page_index = request.page_index(),
        page_size = request.page_size(),
        total_count,
        returned = end - start,
        "sliced page"
    );

    Page {
        items: items[start..end].to_vec(),
        total_count,
        request,
    }
}

/// Untyped query parameters, as collected from a form or a query string
///
/// # Example
/// ```rust
/// use policy_browser::prelude::*;
///
/// let params: QueryParams = serde_json::from_str(
///     r#"{"filter": {"typeEquals": "closed"}, "sort": "createdDate:desc", "page": 2}"#,
/// ).unwrap();
///
/// let (criteria, sort, page) = params.resolve(&BrowserConfig::default_config()).unwrap();
/// assert_eq!(criteria.type_equals, TypeFilter::Only(PolicyType::Closed));
/// assert_eq!(sort, SortSpec::descending(SortKey::CreatedDate));
/// assert_eq!(page.page_index(), 2);
/// assert_eq!(page.page_size(), 10);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Filter criteria
    pub filter: FilterCriteria,

    /// Sort as `field`, `field:asc` or `field:desc`
    pub sort: Option<String>,

    /// Page index (starts at 0)
    pub page: usize,

    /// Page size; the configured size when absent
    pub size: Option<usize>,
}

impl QueryParams {
    /// Resolve into typed query values, falling back to the configured defaults
    pub fn resolve(
        &self,
        config: &BrowserConfig,
    ) -> QueryResult<(FilterCriteria, SortSpec, PageRequest)> {
        let sort = match &self.sort {
            Some(sort) => sort.parse()?,
            None => config.default_sort,
        };
        let page = PageRequest::new(self.page, self.size.unwrap_or(config.page_size))?;

        Ok((self.filter.clone(), sort, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::SortKey;

    fn page(index: usize, size: usize) -> PageRequest {
        PageRequest::new(index, size).unwrap()
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert_eq!(
            PageRequest::new(0, 0),
            Err(QueryError::InvalidPageSize { size: 0 })
        );
    }

    #[test]
    fn test_page_request_defaults() {
        let request = PageRequest::default();
        assert_eq!(request.page_index(), 0);
        assert_eq!(request.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_request_deserialize() {
        let request: PageRequest = serde_json::from_str(r#"{"pageIndex": 3}"#).unwrap();
        assert_eq!(request, page(3, DEFAULT_PAGE_SIZE));

        let invalid = serde_json::from_str::<PageRequest>(r#"{"pageSize": 0}"#);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_paginate_middle_and_last_page() {
        let items: Vec<u32> = (1..=25).collect();

        let second = paginate(&items, page(1, 10));
        assert_eq!(second.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(second.total_count, 25);

        let third = paginate(&items, page(2, 10));
        assert_eq!(third.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(third.total_count, 25);
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let items: Vec<u32> = (1..=25).collect();
        let beyond = paginate(&items, page(3, 10));
        assert!(beyond.is_empty());
        assert_eq!(beyond.total_count, 25);

        let far = paginate(&items, page(usize::MAX, 10));
        assert!(far.is_empty());
        assert_eq!(far.total_count, 25);
    }

    #[test]
    fn test_paginate_empty_input() {
        let items: Vec<u32> = Vec::new();
        let first = paginate(&items, page(0, 10));
        assert!(first.is_empty());
        assert_eq!(first.total_count, 0);
        assert_eq!(first.meta().total_pages, 0);
    }

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(page(0, 20), 145);
        assert_eq!(meta.total, 145);
        assert_eq!(meta.total_pages, 8);
        assert!(!meta.has_prev);
        assert!(meta.has_next);

        let last = PaginationMeta::new(page(7, 20), 145);
        assert!(last.has_prev);
        assert!(!last.has_next);
    }

    #[test]
    fn test_clamp_to() {
        assert_eq!(page(5, 10).clamp_to(25), page(2, 10));
        assert_eq!(page(1, 10).clamp_to(25), page(1, 10));
        assert_eq!(page(3, 10).clamp_to(30), page(2, 10));
        assert_eq!(page(4, 10).clamp_to(0), page(0, 10));
    }

    #[test]
    fn test_page_map_keeps_totals() {
        let items = vec![1, 2, 3];
        let mapped = paginate(&items, page(0, 2)).map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.total_count, 3);
    }

    #[test]
    fn test_query_params_defaults() {
        let config = BrowserConfig::default_config();
        let (criteria, sort, page) = QueryParams::default().resolve(&config).unwrap();
        assert!(criteria.is_empty());
        assert_eq!(sort, SortSpec::ascending(SortKey::Name));
        assert_eq!(page, PageRequest::default());
    }

    #[test]
    fn test_query_params_reject_bad_input() {
        let config = BrowserConfig::default_config();

        let params = QueryParams {
            sort: Some("salary:asc".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.resolve(&config).unwrap_err().error_code(),
            "UNKNOWN_SORT_FIELD"
        );

        let params = QueryParams {
            size: Some(0),
            ..Default::default()
        };
        assert_eq!(
            params.resolve(&config).unwrap_err().error_code(),
            "INVALID_PAGE_SIZE"
        );
    }
}
