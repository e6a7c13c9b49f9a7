//! Shared test harness for query engine testing
//!
//! Provides a compact record builder and dataset helpers so integration
//! tests can describe datasets by the fields they care about.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod query_harness;
//! use query_harness::*;
//! ```

#![allow(dead_code)]

use policy_browser::prelude::*;

/// Parse a `YYYY-MM-DD` literal
pub fn date(s: &str) -> NaiveDate {
    parse_date(s).expect("test dates are valid")
}

// ---------------------------------------------------------------------------
// RecordBuilder: defaults for every field, override what the test needs
// ---------------------------------------------------------------------------

/// Builder for test records.
///
/// Defaults:
/// - `name`: "policy {id}"
/// - dates: 2021-01-01
/// - `createdBy` / `modifiedBy`: "Jon Doe"
/// - `type`: open
#[derive(Clone, Debug)]
pub struct RecordBuilder {
    record: PolicyRecord,
}

impl RecordBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            record: PolicyRecord::new(
                id,
                format!("policy {id}"),
                date("2021-01-01"),
                date("2021-01-01"),
                "Jon Doe",
                "Jon Doe",
                PolicyType::Open,
            ),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn policy_type(mut self, policy_type: PolicyType) -> Self {
        self.record.policy_type = policy_type;
        self
    }

    pub fn created(mut self, created: &str) -> Self {
        self.record.created_date = date(created);
        self
    }

    pub fn inception(mut self, inception: &str) -> Self {
        self.record.inception_date = date(inception);
        self
    }

    pub fn created_by(mut self, who: &str) -> Self {
        self.record.created_by = who.to_string();
        self
    }

    pub fn modified_by(mut self, who: &str) -> Self {
        self.record.modified_by = who.to_string();
        self
    }

    pub fn build(self) -> PolicyRecord {
        self.record
    }
}

/// Records with the given names and ids `0..names.len()`
pub fn named(names: &[&str]) -> Vec<PolicyRecord> {
    names
        .iter()
        .enumerate()
        .map(|(id, name)| RecordBuilder::new(id as u64).name(name).build())
        .collect()
}

/// Records with the given categories and ids `0..types.len()`
pub fn typed(types: &[PolicyType]) -> Vec<PolicyRecord> {
    types
        .iter()
        .enumerate()
        .map(|(id, t)| RecordBuilder::new(id as u64).policy_type(*t).build())
        .collect()
}

/// Ids of a sequence of records, in order
pub fn ids<'a>(records: impl IntoIterator<Item = &'a PolicyRecord>) -> Vec<u64> {
    records.into_iter().map(|r| r.id.0).collect()
}

/// Whether `sub` appears in `full` in the same relative order
pub fn is_subsequence(sub: &[u64], full: &[u64]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|id| rest.any(|candidate| candidate == id))
}
