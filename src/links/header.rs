//! Link header parsing and serialization
//!
//! Wire format: entries of the form `<URL>; rel="name"` joined by `",\n"`.

use super::link_url::LinkUrl;
use super::types::{Relation, WebLinkSet};
use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Separator between header entries
pub const ENTRY_SEPARATOR: &str = ",\n";

/// Regex for one header entry: `<url>; rel="name"`
static ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<([^>]+)>; rel="([^"]+)""#).unwrap());

/// Parse a Link header, ignoring relations outside the known five
pub fn parse(header: &str) -> Result<WebLinkSet> {
    parse_entries(header, false)
}

/// Parse a Link header, failing on unknown relations
pub fn parse_strict(header: &str) -> Result<WebLinkSet> {
    parse_entries(header, true)
}

fn parse_entries(header: &str, strict: bool) -> Result<WebLinkSet> {
    let mut links = WebLinkSet::new();

    for line in header.split(ENTRY_SEPARATOR) {
        let captures = ENTRY_REGEX
            .captures(line)
            .ok_or_else(|| Error::malformed_line(line))?;
        let raw_url = &captures[1];
        let name = &captures[2];

        let relation = match name.parse::<Relation>() {
            Ok(relation) => relation,
            Err(e) if strict => return Err(e),
            Err(_) => {
                tracing::debug!("Ignoring unknown link relation '{}'", name);
                continue;
            }
        };

        let url = LinkUrl::parse(raw_url).map_err(|e| Error::invalid_url(relation, e))?;
        links.set(relation, Some(url));
    }

    Ok(links)
}

/// Render a link set as Link header text
///
/// Entries appear in the order self, next, prev, first, last. An empty set
/// renders as the empty string.
pub fn serialize(links: &WebLinkSet) -> String {
    links
        .iter()
        .map(|(rel, url)| format!("<{url}>; rel=\"{rel}\""))
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

impl WebLinkSet {
    /// Render this set as Link header text
    pub fn link_header(&self) -> String {
        serialize(self)
    }
}

impl fmt::Display for WebLinkSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

impl FromStr for WebLinkSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
