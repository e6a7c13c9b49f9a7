//! Typed errors for the policy query engine
//!
//! The engine itself never fails: every combination of criteria, sort and page
//! over any dataset yields a well-defined (possibly empty) result. Errors only
//! arise at the boundary where raw caller input is turned into typed query
//! values, and they always indicate a caller defect.
//!
//! # Example
//!
//! ```rust
//! use policy_browser::prelude::*;
//!
//! let err = "salary".parse::<SortKey>().unwrap_err();
//! assert_eq!(err.error_code(), "UNKNOWN_SORT_FIELD");
//! assert!(err.to_string().contains("salary"));
//! ```

use serde::Serialize;

/// Errors raised when building query values from untyped input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A sort key naming a field that does not exist on a policy record
    #[error("Unknown sort field '{field}'")]
    UnknownSortField { field: String },

    /// A sort direction other than `asc` / `desc`
    #[error("Unknown sort direction '{value}' (expected 'asc' or 'desc')")]
    UnknownSortDirection { value: String },

    /// A policy type outside the closed set of categories
    #[error("Unknown policy type '{value}' (expected 'open', 'closed' or 'test')")]
    UnknownPolicyType { value: String },

    /// A page size of zero
    #[error("Invalid page size {size}: page size must be positive")]
    InvalidPageSize { size: usize },

    /// A calendar date that is not in `YYYY-MM-DD` form
    #[error("Invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { value: String },
}

/// Serializable description of a [`QueryError`]
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl QueryError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::UnknownSortField { .. } => "UNKNOWN_SORT_FIELD",
            QueryError::UnknownSortDirection { .. } => "UNKNOWN_SORT_DIRECTION",
            QueryError::UnknownPolicyType { .. } => "UNKNOWN_POLICY_TYPE",
            QueryError::InvalidPageSize { .. } => "INVALID_PAGE_SIZE",
            QueryError::InvalidDate { .. } => "INVALID_DATE",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

/// A specialized Result type for query construction
pub type QueryResult<T> = Result<T, QueryError>;
