//! In-memory policy store
//!
//! The dataset is loaded once and then shared read-only: clones of the store
//! share the same `Arc<[PolicyRecord]>`, and queries only borrow from it.

use crate::config::BrowserConfig;
use crate::core::record::{PolicyId, PolicyRecord};
use crate::core::store::QueryableStore;
use anyhow::{Result, anyhow, bail};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Immutable in-memory policy dataset
#[derive(Debug, Clone)]
pub struct InMemoryPolicyStore {
    records: Arc<[PolicyRecord]>,
}

impl InMemoryPolicyStore {
    /// Create a store over a set of records, keeping their order
    pub fn new(records: Vec<PolicyRecord>) -> Self {
        tracing::debug!(count = records.len(), "created in-memory policy store");
        Self {
            records: records.into(),
        }
    }

    /// Load records from a JSON array
    ///
    /// Fails on malformed JSON and on duplicate record ids.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<PolicyRecord> = serde_json::from_str(json)?;
        ensure_unique_ids(&records)?;
        Ok(Self::new(records))
    }

    /// Load records from a file holding a JSON array
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read dataset {}: {}", path.display(), e))?;
        let store = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), count = store.len(), "loaded policy dataset");
        Ok(store)
    }

    /// Load the dataset named by a configuration
    pub fn from_config(config: &BrowserConfig) -> Result<Self> {
        let path = config
            .dataset
            .as_ref()
            .ok_or_else(|| anyhow!("No dataset configured"))?;
        Self::from_json_file(path)
    }

    /// Get a record by id
    pub fn get(&self, id: PolicyId) -> Option<&PolicyRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Shared handle to the underlying records
    pub fn shared(&self) -> Arc<[PolicyRecord]> {
        Arc::clone(&self.records)
    }
}

impl From<Vec<PolicyRecord>> for InMemoryPolicyStore {
    fn from(records: Vec<PolicyRecord>) -> Self {
        Self::new(records)
    }
}

impl QueryableStore for InMemoryPolicyStore {
    fn list_all(&self) -> &[PolicyRecord] {
        &self.records
    }
}

fn ensure_unique_ids(records: &[PolicyRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            bail!("Duplicate policy id {}", record.id);
        }
    }
    Ok(())
}
