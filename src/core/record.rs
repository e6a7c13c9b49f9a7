//! Policy records
//!
//! A [`PolicyRecord`] is one row of the dataset being browsed. Records are
//! read-only for the engine: they are loaded once, shared behind an immutable
//! slice, and only ever borrowed by filtering, sorting and pagination.

use crate::core::error::QueryError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable, unique identifier of a policy record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyId(pub u64);

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PolicyId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Category of a policy, drawn from a fixed closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyType {
    Open,
    Closed,
    Test,
}

impl PolicyType {
    /// Every category, in the order the type selector lists them
    pub const ALL: [PolicyType; 3] = [PolicyType::Open, PolicyType::Closed, PolicyType::Test];

    /// Wire name of the category (`open`, `closed`, `test`)
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Open => "open",
            PolicyType::Closed => "closed",
            PolicyType::Test => "test",
        }
    }

    /// Display label of the category
    pub fn label(&self) -> &'static str {
        match self {
            PolicyType::Open => "Open",
            PolicyType::Closed => "Closed",
            PolicyType::Test => "Test",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QueryError::UnknownPolicyType {
                value: s.to_string(),
            })
    }
}

/// One policy entry in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecord {
    pub id: PolicyId,
    pub name: String,
    pub inception_date: NaiveDate,
    pub created_date: NaiveDate,
    pub created_by: String,
    pub modified_by: String,
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
}

impl PolicyRecord {
    /// Create a new record
    pub fn new(
        id: u64,
        name: impl Into<String>,
        inception_date: NaiveDate,
        created_date: NaiveDate,
        created_by: impl Into<String>,
        modified_by: impl Into<String>,
        policy_type: PolicyType,
    ) -> Self {
        Self {
            id: PolicyId(id),
            name: name.into(),
            inception_date,
            created_date,
            created_by: created_by.into(),
            modified_by: modified_by.into(),
            policy_type,
        }
    }
}

/// Parse a calendar date in `YYYY-MM-DD` form
///
/// This is the only date parsing the crate offers; criteria and records carry
/// already-validated [`NaiveDate`] values.
pub fn parse_date(value: &str) -> Result<NaiveDate, QueryError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| QueryError::InvalidDate {
        value: value.to_string(),
    })
}
