//! Stable single-column sorting

use crate::core::error::QueryError;
use crate::core::field::SortKey;
use crate::core::record::PolicyRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Orient an ascending comparison result
    ///
    /// `Equal` stays `Equal` in both directions, which keeps a stable sort
    /// stable when descending.
    pub fn apply(self, ascending: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ascending,
            SortDirection::Desc => ascending.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(QueryError::UnknownSortDirection {
                value: s.to_string(),
            }),
        }
    }
}

/// The active sort column and its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// The sort resulting from a click on a column header
    ///
    /// Clicking the active column while ascending switches to descending;
    /// any other click sorts the clicked column ascending.
    pub fn request(self, key: SortKey) -> Self {
        if self.key == key && self.direction == SortDirection::Asc {
            Self::descending(key)
        } else {
            Self::ascending(key)
        }
    }

    /// Compare two records under this sort
    pub fn compare(&self, a: &PolicyRecord, b: &PolicyRecord) -> Ordering {
        self.direction
            .apply(self.key.value(a).cmp(&self.key.value(b)))
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.direction)
    }
}

impl FromStr for SortSpec {
    type Err = QueryError;

    /// Parse `field`, `field:asc` or `field:desc`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((key, direction)) => Ok(Self::new(key.parse()?, direction.parse()?)),
            None => Ok(Self::ascending(s.parse()?)),
        }
    }
}

/// Comparator for a sort specification
pub fn comparator(spec: SortSpec) -> impl Fn(&PolicyRecord, &PolicyRecord) -> Ordering {
    move |a, b| spec.compare(a, b)
}

/// Order records by a sort specification
///
/// The sort is stable in both directions: records with equal keys keep their
/// relative input order. The input is consumed and returned reordered; the
/// records themselves are only borrowed.
pub fn sort<'a>(mut records: Vec<&'a PolicyRecord>, spec: SortSpec) -> Vec<&'a PolicyRecord> {
    let compare = comparator(spec);
    records.sort_by(|a, b| compare(*a, *b));

    tracing::trace!(count = records.len(), sort = %spec, "sorted records");
    records
}
