//! Filter criteria and the predicate built from them
//!
//! A [`FilterCriteria`] is a sparse set of constraints: every field is optional
//! and an absent field places no constraint on records. [`FilterCriteria::predicate`]
//! compiles the populated fields into a single [`RecordPredicate`], which
//! [`filter`] applies to a dataset.
//!
//! Matching rules, all combined with logical AND:
//! - text fields (`name`, `createdBy`, `modifiedBy`): case-insensitive substring
//!   containment; an empty needle matches everything
//! - `type`: exact category match; [`TypeFilter::Any`] matches everything
//! - date ranges: inclusive on both ends, by calendar date; an inverted range
//!   simply matches nothing
//!
//! # Example
//!
//! ```rust
//! use policy_browser::prelude::*;
//!
//! let criteria = FilterCriteria::new()
//!     .with_name("insurance")
//!     .with_type(PolicyType::Open);
//!
//! let records = policy_browser::storage::fixtures::sample_policies(50);
//! let matched = filter(&records, &criteria);
//! assert!(matched.iter().all(|r| r.policy_type == PolicyType::Open));
//! ```

use crate::core::error::QueryError;
use crate::core::record::{PolicyRecord, PolicyType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Constraint on the policy category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeFilter {
    /// Any category is accepted
    #[default]
    Any,
    /// Only the given category is accepted
    Only(PolicyType),
}

impl TypeFilter {
    /// Check whether a category satisfies this constraint
    pub fn accepts(&self, policy_type: PolicyType) -> bool {
        match self {
            TypeFilter::Any => true,
            TypeFilter::Only(expected) => *expected == policy_type,
        }
    }
}

impl From<PolicyType> for TypeFilter {
    fn from(value: PolicyType) -> Self {
        TypeFilter::Only(value)
    }
}

impl From<Option<PolicyType>> for TypeFilter {
    fn from(value: Option<PolicyType>) -> Self {
        value.map_or(TypeFilter::Any, TypeFilter::Only)
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::Any => f.write_str("any"),
            TypeFilter::Only(t) => write!(f, "{}", t),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = QueryError;

    /// `"any"` and the empty string (an untouched type selector) mean no constraint.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            return Ok(TypeFilter::Any);
        }
        trimmed.parse().map(TypeFilter::Only)
    }
}

impl TryFrom<String> for TypeFilter {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeFilter> for String {
    fn from(value: TypeFilter) -> Self {
        value.to_string()
    }
}

/// Inclusive calendar-date range with optional bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Create a range from optional bounds
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Check whether a date falls on or between the bounds
    ///
    /// No ordering of `from` and `to` is enforced: an inverted range contains
    /// no date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Whether neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// User-supplied filter constraints
///
/// All fields are optional. Serialized with the camelCase names used by the
/// policy list (`nameContains`, `typeEquals`, `createdDateFrom`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
    pub type_equals: TypeFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inception_date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inception_date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Criteria with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, needle: impl Into<String>) -> Self {
        self.name_contains = Some(needle.into());
        self
    }

    pub fn with_type(mut self, policy_type: impl Into<TypeFilter>) -> Self {
        self.type_equals = policy_type.into();
        self
    }

    pub fn with_created_by(mut self, needle: impl Into<String>) -> Self {
        self.created_by_contains = Some(needle.into());
        self
    }

    pub fn with_modified_by(mut self, needle: impl Into<String>) -> Self {
        self.modified_by_contains = Some(needle.into());
        self
    }

    /// Constrain the created date to an inclusive range
    pub fn created_between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.created_date_from = from;
        self.created_date_to = to;
        self
    }

    /// Constrain the inception date to an inclusive range
    pub fn inception_between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.inception_date_from = from;
        self.inception_date_to = to;
        self
    }

    pub fn created_date_range(&self) -> DateRange {
        DateRange::new(self.created_date_from, self.created_date_to)
    }

    pub fn inception_date_range(&self) -> DateRange {
        DateRange::new(self.inception_date_from, self.inception_date_to)
    }

    /// Whether these criteria constrain nothing
    ///
    /// Empty-string text criteria count as unconstrained.
    pub fn is_empty(&self) -> bool {
        let blank = |s: &Option<String>| s.as_deref().is_none_or(str::is_empty);

        blank(&self.name_contains)
            && blank(&self.created_by_contains)
            && blank(&self.modified_by_contains)
            && self.type_equals == TypeFilter::Any
            && self.created_date_range().is_unbounded()
            && self.inception_date_range().is_unbounded()
    }

    /// Compile the populated criteria into a single predicate
    pub fn predicate(&self) -> RecordPredicate {
        RecordPredicate {
            name: TextMatcher::new(self.name_contains.as_deref()),
            created_by: TextMatcher::new(self.created_by_contains.as_deref()),
            modified_by: TextMatcher::new(self.modified_by_contains.as_deref()),
            policy_type: self.type_equals,
            created_date: self.created_date_range(),
            inception_date: self.inception_date_range(),
        }
    }

    /// Check a single record against these criteria
    pub fn matches(&self, record: &PolicyRecord) -> bool {
        self.predicate().matches(record)
    }
}

/// Case-insensitive substring matcher; `None` matches everything
#[derive(Debug, Clone, PartialEq, Eq)]
struct TextMatcher {
    needle: Option<String>,
}

impl TextMatcher {
    fn new(needle: Option<&str>) -> Self {
        let needle = needle.filter(|s| !s.is_empty()).map(str::to_lowercase);
        Self { needle }
    }

    fn matches(&self, haystack: &str) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => haystack.to_lowercase().contains(needle.as_str()),
        }
    }
}

/// A predicate over records built from [`FilterCriteria`]
///
/// Text needles are lowercased once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPredicate {
    name: TextMatcher,
    created_by: TextMatcher,
    modified_by: TextMatcher,
    policy_type: TypeFilter,
    created_date: DateRange,
    inception_date: DateRange,
}

impl RecordPredicate {
    /// Check whether a record satisfies every populated criterion
    pub fn matches(&self, record: &PolicyRecord) -> bool {
        self.policy_type.accepts(record.policy_type)
            && self.created_date.contains(record.created_date)
            && self.inception_date.contains(record.inception_date)
            && self.name.matches(&record.name)
            && self.created_by.matches(&record.created_by)
            && self.modified_by.matches(&record.modified_by)
    }
}

/// Select the records satisfying the criteria, preserving their order
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a PolicyRecord>
where
    I: IntoIterator<Item = &'a PolicyRecord>,
{
    let predicate = criteria.predicate();
    let mut total = 0usize;
    let matched: Vec<&PolicyRecord> = records
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|record| predicate.matches(record))
        .collect();

    tracing::trace!(total, matched = matched.len(), "applied filter criteria");
    matched
}
