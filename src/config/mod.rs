//! Configuration loading and management

use crate::core::error::QueryError;
use crate::core::query::DEFAULT_PAGE_SIZE;
use crate::core::sort::SortSpec;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration of a policy browser session
///
/// ```yaml
/// page_size: 10
/// default_sort:
///   key: name
///   direction: asc
/// dataset: data/policies.json
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Rows per page, fixed for the session
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Sort applied before the user clicks a column header
    #[serde(default)]
    pub default_sort: SortSpec,

    /// Optional path to a JSON array of policy records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl BrowserConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded browser configuration");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive a session
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.page_size == 0 {
            return Err(QueryError::InvalidPageSize {
                size: self.page_size,
            });
        }
        Ok(())
    }

    /// Create the default configuration: ten rows per page, sorted by name
    pub fn default_config() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: SortSpec::default(),
            dataset: None,
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
