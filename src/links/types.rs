//! Link set types
//!
//! Defines the relation enumeration and the `WebLinkSet` shared by the
//! builder, the header parser and the header serializer.

use super::link_url::LinkUrl;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Navigational role of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// The current page
    #[serde(rename = "self")]
    SelfLink,
    /// The page after the current one
    Next,
    /// The page before the current one
    Prev,
    /// The first page
    First,
    /// The last page
    Last,
}

impl Relation {
    /// All relations, in the order they appear in a serialized header
    pub const ALL: [Relation; 5] = [
        Relation::SelfLink,
        Relation::Next,
        Relation::Prev,
        Relation::First,
        Relation::Last,
    ];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::SelfLink => "self",
            Relation::Next => "next",
            Relation::Prev => "prev",
            Relation::First => "first",
            Relation::Last => "last",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = Error;

    /// Case-insensitive lookup of a relation name
    fn from_str(s: &str) -> Result<Self> {
        Relation::ALL
            .into_iter()
            .find(|rel| rel.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::unknown_relation(s))
    }
}

/// Up to five pagination URLs, one per relation
///
/// `prev` and `next` being absent marks a navigation boundary, not an error.
/// Every URL is owned by the set; none of them alias the base URL used to
/// build it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebLinkSet {
    /// Link to the current page (`rel="self"`)
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<LinkUrl>,
    /// Link to the following page, absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<LinkUrl>,
    /// Link to the preceding page, absent on the first page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<LinkUrl>,
    /// Link to page 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<LinkUrl>,
    /// Link to the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<LinkUrl>,
}

impl WebLinkSet {
    /// Create an empty link set
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the URL for a relation
    pub fn get(&self, relation: Relation) -> Option<&LinkUrl> {
        match relation {
            Relation::SelfLink => self.self_.as_ref(),
            Relation::Next => self.next.as_ref(),
            Relation::Prev => self.prev.as_ref(),
            Relation::First => self.first.as_ref(),
            Relation::Last => self.last.as_ref(),
        }
    }

    /// Set or clear the URL for a relation
    pub fn set(&mut self, relation: Relation, url: Option<LinkUrl>) {
        let slot = match relation {
            Relation::SelfLink => &mut self.self_,
            Relation::Next => &mut self.next,
            Relation::Prev => &mut self.prev,
            Relation::First => &mut self.first,
            Relation::Last => &mut self.last,
        };
        *slot = url;
    }

    /// Set a relation by name, failing on names outside the known set
    pub fn set_relation(&mut self, name: &str, url: LinkUrl) -> Result<()> {
        let relation: Relation = name.parse()?;
        self.set(relation, Some(url));
        Ok(())
    }

    /// Iterate over present links in header order
    pub fn iter(&self) -> impl Iterator<Item = (Relation, &LinkUrl)> {
        Relation::ALL
            .into_iter()
            .filter_map(move |rel| self.get(rel).map(|url| (rel, url)))
    }

    /// Number of present links
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if no link is present
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
