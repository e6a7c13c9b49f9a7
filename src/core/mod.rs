//! Core module containing the record types and the query engine

pub mod criteria;
pub mod engine;
pub mod error;
pub mod field;
pub mod query;
pub mod record;
pub mod session;
pub mod sort;
pub mod store;

pub use criteria::{DateRange, FilterCriteria, RecordPredicate, TypeFilter, filter};
pub use engine::{QueryEngine, run_query};
pub use error::{QueryError, QueryResult};
pub use field::{FieldValue, SortKey};
pub use query::{Page, PageRequest, PaginationMeta, QueryParams, paginate};
pub use record::{PolicyId, PolicyRecord, PolicyType, parse_date};
pub use session::BrowseSession;
pub use sort::{SortDirection, SortSpec, comparator, sort};
pub use store::QueryableStore;
