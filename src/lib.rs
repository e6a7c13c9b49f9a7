//! # Policy Browser
//!
//! A record query engine for browsing a read-only set of policy records.
//!
//! Given an immutable dataset, a set of filter criteria, a sort and a page
//! request, the engine produces the exact ordered slice of records to render
//! together with the number of records that matched.
//!
//! ## Features
//!
//! - **Sparse Filtering**: case-insensitive text search, category match and
//!   inclusive date ranges, combined with AND
//! - **Stable Sorting**: any column, ascending or descending, without
//!   reshuffling rows with equal keys
//! - **Pagination**: zero-based pages with totals and page-count metadata
//! - **Session State**: search, reset, header-click sorting and paging with
//!   the page index reset rules of the policy list
//! - **Configuration-Based**: page size, initial sort and dataset via YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use policy_browser::prelude::*;
//! use policy_browser::storage::fixtures::sample_policies;
//!
//! let store = InMemoryPolicyStore::new(sample_policies(50));
//!
//! let criteria = FilterCriteria::new()
//!     .with_name("insurance")
//!     .with_type(PolicyType::Open);
//! let sort = SortSpec::descending(SortKey::CreatedDate);
//! let page = PageRequest::new(0, 10)?;
//!
//! let result = store.query(&criteria, sort, page);
//! assert!(result.len() <= 10);
//! assert!(result.meta().total_pages >= 1);
//! # Ok::<(), policy_browser::core::QueryError>(())
//! ```

pub mod config;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Records ===
    pub use crate::core::record::{PolicyId, PolicyRecord, PolicyType, parse_date};

    // === Filtering ===
    pub use crate::core::criteria::{DateRange, FilterCriteria, TypeFilter, filter};

    // === Sorting ===
    pub use crate::core::field::{FieldValue, SortKey};
    pub use crate::core::sort::{SortDirection, SortSpec, sort};

    // === Pagination ===
    pub use crate::core::query::{Page, PageRequest, PaginationMeta, QueryParams, paginate};

    // === Engine ===
    pub use crate::core::engine::{QueryEngine, run_query};
    pub use crate::core::session::BrowseSession;
    pub use crate::core::store::QueryableStore;

    // === Errors ===
    pub use crate::core::error::{QueryError, QueryResult};

    // === Storage ===
    pub use crate::storage::InMemoryPolicyStore;

    // === Config ===
    pub use crate::config::BrowserConfig;

    // === External dependencies ===
    pub use chrono::NaiveDate;
}
