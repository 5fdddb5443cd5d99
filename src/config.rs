//! Configuration for link generation
//!
//! Controls the query parameter names written by the URL mutator, the
//! last-page rounding policy and how strictly headers are parsed. Loaded from
//! YAML for the CLI; library callers usually construct it directly.

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default query parameter for the page index
pub const DEFAULT_PAGE_PARAM: &str = "page";

/// Default query parameter for the page size
pub const DEFAULT_PAGE_SIZE_PARAM: &str = "page_size";

/// How the last page is derived from `total_count / page_size`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LastPageRounding {
    /// Integer division, remainder discarded (101 items of 10 -> page 10)
    #[default]
    Truncate,
    /// Ceiling division (101 items of 10 -> page 11)
    Ceil,
}

impl LastPageRounding {
    /// Compute the last page. `page_size` must be non-zero.
    pub fn last_page(self, total_count: u64, page_size: u64) -> u64 {
        match self {
            LastPageRounding::Truncate => total_count / page_size,
            LastPageRounding::Ceil => total_count.div_ceil(page_size),
        }
    }
}

/// Link generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Query parameter carrying the page index
    pub page_param: String,

    /// Query parameter carrying the page size
    pub page_size_param: String,

    /// Last page rounding policy
    pub rounding: LastPageRounding,

    /// Reject unknown relation names when parsing headers
    pub strict_relations: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            page_size_param: DEFAULT_PAGE_SIZE_PARAM.to_string(),
            rounding: LastPageRounding::default(),
            strict_relations: false,
        }
    }
}

impl LinkConfig {
    /// Parse config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: LinkConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        tracing::debug!("Loaded link config from {}", path.display());
        Self::from_yaml_str(&content)
    }

    /// Check that parameter names are usable
    pub fn validate(&self) -> Result<()> {
        if self.page_param.is_empty() {
            return Err(Error::config("page_param must not be empty"));
        }
        if self.page_size_param.is_empty() {
            return Err(Error::config("page_size_param must not be empty"));
        }
        if self.page_param == self.page_size_param {
            return Err(Error::config(format!(
                "page_param and page_size_param must differ (both '{}')",
                self.page_param
            )));
        }
        Ok(())
    }
}
