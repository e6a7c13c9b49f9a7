//! Sortable fields and typed field access
//!
//! Sorting "by whichever column was clicked" goes through [`SortKey`], a closed
//! enumeration of the fields of [`PolicyRecord`], each mapped to a typed
//! accessor returning a [`FieldValue`].

use crate::core::error::QueryError;
use crate::core::record::PolicyRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A borrowed, typed view of one field of a record
///
/// Text and categorical values compare by code point, dates chronologically
/// and identifiers numerically. Values produced by the same [`SortKey`] always
/// share a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldValue<'a> {
    Integer(u64),
    Text(&'a str),
    Date(NaiveDate),
}

impl<'a> FieldValue<'a> {
    /// Get the value as text if possible
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(*s),
            _ => None,
        }
    }

    /// Get the value as a date if possible
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// A field of [`PolicyRecord`] that rows can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Id,
    #[default]
    Name,
    InceptionDate,
    CreatedDate,
    CreatedBy,
    ModifiedBy,
    Type,
}

impl SortKey {
    /// Every field of a record
    pub const ALL: [SortKey; 7] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::InceptionDate,
        SortKey::CreatedDate,
        SortKey::CreatedBy,
        SortKey::ModifiedBy,
        SortKey::Type,
    ];

    /// The columns shown in the policy table, in display order
    pub const COLUMNS: [SortKey; 6] = [
        SortKey::Name,
        SortKey::InceptionDate,
        SortKey::CreatedDate,
        SortKey::CreatedBy,
        SortKey::ModifiedBy,
        SortKey::Type,
    ];

    /// Field name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::InceptionDate => "inceptionDate",
            SortKey::CreatedDate => "createdDate",
            SortKey::CreatedBy => "createdBy",
            SortKey::ModifiedBy => "modifiedBy",
            SortKey::Type => "type",
        }
    }

    /// Column heading
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "Id",
            SortKey::Name => "Name",
            SortKey::InceptionDate => "Inception Date",
            SortKey::CreatedDate => "Created Date",
            SortKey::CreatedBy => "Created By",
            SortKey::ModifiedBy => "Modified By",
            SortKey::Type => "Type",
        }
    }

    /// Read this field from a record
    pub fn value<'r>(&self, record: &'r PolicyRecord) -> FieldValue<'r> {
        match self {
            SortKey::Id => FieldValue::Integer(record.id.0),
            SortKey::Name => FieldValue::Text(&record.name),
            SortKey::InceptionDate => FieldValue::Date(record.inception_date),
            SortKey::CreatedDate => FieldValue::Date(record.created_date),
            SortKey::CreatedBy => FieldValue::Text(&record.created_by),
            SortKey::ModifiedBy => FieldValue::Text(&record.modified_by),
            SortKey::Type => FieldValue::Text(record.policy_type.as_str()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    /// Accepts the wire name (`createdBy`) as well as its snake_case spelling
    /// (`created_by`), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| QueryError::UnknownSortField {
                field: s.to_string(),
            })
    }
}
