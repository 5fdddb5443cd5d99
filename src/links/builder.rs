//! Link set builder
//!
//! Derives the self/first/prev/next/last URLs of a paginated resource from
//! a base URL and the current page, page size and total item count.

use super::link_url::LinkUrl;
use super::paginate::paginate_with;
use super::types::{Relation, WebLinkSet};
use crate::config::{LastPageRounding, LinkConfig};
use crate::error::{Error, Result};

/// Build a link set with the default configuration
///
/// The last page is `total_count / page_size` with the remainder discarded.
/// Use [`build_ceil`] or [`LinkSetBuilder::rounding`] for ceiling division.
pub fn build(base_url: &str, page: u64, page_size: u64, total_count: u64) -> Result<WebLinkSet> {
    LinkSetBuilder::default().build(base_url, page, page_size, total_count)
}

/// Build a link set whose last page counts a trailing partial page
pub fn build_ceil(
    base_url: &str,
    page: u64,
    page_size: u64,
    total_count: u64,
) -> Result<WebLinkSet> {
    LinkSetBuilder::default()
        .rounding(LastPageRounding::Ceil)
        .build(base_url, page, page_size, total_count)
}

/// Configurable link set builder
#[derive(Debug, Clone, Default)]
pub struct LinkSetBuilder {
    config: LinkConfig,
}

impl LinkSetBuilder {
    /// Create a builder from a config
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    /// Set the last page rounding policy
    #[must_use]
    pub fn rounding(mut self, rounding: LastPageRounding) -> Self {
        self.config.rounding = rounding;
        self
    }

    /// Set the page query parameter name
    #[must_use]
    pub fn page_param(mut self, name: impl Into<String>) -> Self {
        self.config.page_param = name.into();
        self
    }

    /// Set the page size query parameter name
    #[must_use]
    pub fn page_size_param(mut self, name: impl Into<String>) -> Self {
        self.config.page_size_param = name.into();
        self
    }

    /// Get the active config
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Parse `base_url` and build the link set
    ///
    /// `base_url` may be absolute or relative; relative links stay relative.
    pub fn build(
        &self,
        base_url: &str,
        page: u64,
        page_size: u64,
        total_count: u64,
    ) -> Result<WebLinkSet> {
        let base = LinkUrl::parse(base_url)?;
        self.build_url(&base, page, page_size, total_count)
    }

    /// Build the link set from an already parsed base URL
    ///
    /// A `total_count` of zero is treated as one full page.
    pub fn build_url(
        &self,
        base: &LinkUrl,
        page: u64,
        page_size: u64,
        total_count: u64,
    ) -> Result<WebLinkSet> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize);
        }
        let total_count = if total_count == 0 {
            page_size
        } else {
            total_count
        };

        let last_page = self.config.rounding.last_page(total_count, page_size);
        let paginate = |p: u64| paginate_with(&self.config, base, p, page_size);

        let mut links = WebLinkSet {
            self_: paginate(page),
            first: paginate(1),
            last: paginate(last_page),
            ..WebLinkSet::default()
        };

        if page > 1 {
            links.prev = paginate(page - 1);
        }

        if total_count > page.saturating_mul(page_size) {
            let next_page = page.saturating_add(1).max(1);
            links.next = paginate(next_page);
        }

        tracing::debug!(
            page,
            page_size,
            total_count,
            last_page,
            relations = ?links.iter().map(|(rel, _)| rel).collect::<Vec<Relation>>(),
            "Built pagination links for {}",
            base
        );

        Ok(links)
    }
}
