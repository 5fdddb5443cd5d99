//! URI references for link targets
//!
//! `url::Url` only holds absolute URLs, while Link headers and base URLs are
//! often relative (`/items?page=2`). A relative reference is resolved against
//! a placeholder base so the query can be edited with the `url` API, and the
//! placeholder is sliced off again whenever the reference is rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use url::{Position, Url};

/// Path segment marking references relative to the current path
const RELATIVE_PREFIX: &str = "/__weblinks_relative__/";

/// Base that relative references are resolved against
static PLACEHOLDER_BASE: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("http://weblinks.invalid/__weblinks_relative__/").unwrap()
});

/// Shape of the reference as written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Reference {
    /// `https://host/path`
    Absolute,
    /// `//host/path`
    NetworkPath,
    /// `/path`
    AbsolutePath,
    /// `path`, `?query`, `#fragment`
    RelativePath,
}

/// An absolute or relative URL used as a link target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LinkUrl {
    url: Url,
    reference: Reference,
}

impl LinkUrl {
    /// Parse an absolute URL or a relative reference
    ///
    /// Relative references keep their form when rendered; dot segments are
    /// resolved, so `../items` renders as `/items`.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        match Url::parse(input) {
            Ok(url) => Ok(Self {
                url,
                reference: Reference::Absolute,
            }),
            Err(url::ParseError::RelativeUrlWithoutBase) => Self::parse_relative(input),
            Err(e) => Err(e),
        }
    }

    fn parse_relative(input: &str) -> Result<Self, url::ParseError> {
        let url = Url::options()
            .base_url(Some(&*PLACEHOLDER_BASE))
            .parse(input)?;

        let written = input.trim_start_matches(|c: char| c <= ' ');
        let reference = if written.starts_with("//") {
            Reference::NetworkPath
        } else if written.starts_with('/') || !url.path().starts_with(RELATIVE_PREFIX) {
            // `../x` climbs out of the placeholder path and lands on `/x`
            Reference::AbsolutePath
        } else {
            Reference::RelativePath
        };

        Ok(Self { url, reference })
    }

    /// Check if this is a relative reference
    pub fn is_relative(&self) -> bool {
        self.reference != Reference::Absolute
    }

    /// The reference as it appears in a Link header
    pub fn as_str(&self) -> &str {
        match self.reference {
            Reference::Absolute => self.url.as_str(),
            Reference::NetworkPath => &self.url.as_str()[self.url.scheme().len() + 1..],
            Reference::AbsolutePath => &self.url[Position::BeforePath..],
            Reference::RelativePath => {
                let tail = &self.url[Position::BeforePath..];
                tail.strip_prefix(RELATIVE_PREFIX).unwrap_or(tail)
            }
        }
    }

    /// Query string without the leading `?`
    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// Decoded query pairs
    pub fn query_pairs(&self) -> url::form_urlencoded::Parse<'_> {
        self.url.query_pairs()
    }

    /// The resolved URL
    ///
    /// For relative references the host is a placeholder; use
    /// [`LinkUrl::as_str`] to render them.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub(crate) fn url_mut(&mut self) -> &mut Url {
        &mut self.url
    }
}

impl From<Url> for LinkUrl {
    fn from(url: Url) -> Self {
        Self {
            url,
            reference: Reference::Absolute,
        }
    }
}

impl fmt::Display for LinkUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkUrl {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LinkUrl {
    type Error = url::ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<LinkUrl> for String {
    fn from(link: LinkUrl) -> Self {
        link.as_str().to_string()
    }
}
