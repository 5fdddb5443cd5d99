//! URL mutation shared by the builder
//!
//! Produces a copy of a base URL with the page and page size query
//! parameters overwritten. Every other query parameter survives.

use super::link_url::LinkUrl;
use crate::config::{LinkConfig, DEFAULT_PAGE_PARAM, DEFAULT_PAGE_SIZE_PARAM};
use std::collections::BTreeMap;

/// Copy `base` with `page` and `page_size` set
///
/// Returns `None` when `page` is below 1. Relative references stay relative.
/// The query is re-encoded with keys in sorted order, so the output is
/// stable for a given input.
pub fn paginate(base: &LinkUrl, page: u64, page_size: u64) -> Option<LinkUrl> {
    paginate_params(
        base,
        DEFAULT_PAGE_PARAM,
        DEFAULT_PAGE_SIZE_PARAM,
        page,
        page_size,
    )
}

/// Like [`paginate`], using the parameter names from `config`
pub fn paginate_with(
    config: &LinkConfig,
    base: &LinkUrl,
    page: u64,
    page_size: u64,
) -> Option<LinkUrl> {
    paginate_params(
        base,
        &config.page_param,
        &config.page_size_param,
        page,
        page_size,
    )
}

fn paginate_params(
    base: &LinkUrl,
    page_param: &str,
    page_size_param: &str,
    page: u64,
    page_size: u64,
) -> Option<LinkUrl> {
    if page < 1 {
        return None;
    }

    // Repeated keys keep their values in original order
    let mut query: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in base.query_pairs() {
        query
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    query.insert(page_param.to_string(), vec![page.to_string()]);
    query.insert(page_size_param.to_string(), vec![page_size.to_string()]);

    let mut link = base.clone();
    link.url_mut()
        .query_pairs_mut()
        .clear()
        .extend_pairs(
            query
                .iter()
                .flat_map(|(key, values)| values.iter().map(move |v| (key, v))),
        );
    Some(link)
}
