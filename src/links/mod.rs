//! Pagination links module
//!
//! Builds and parses the `self`, `first`, `prev`, `next` and `last` links
//! advertised by paginated HTTP APIs in a `Link` header.
//!
//! # Overview
//!
//! The builder derives a [`WebLinkSet`] from a base URL and paging integers,
//! the parser derives one from header text, and the serializer turns a set
//! back into header text. All operations are pure.

mod builder;
mod header;
mod link_url;
mod paginate;
mod types;

pub use builder::{build, build_ceil, LinkSetBuilder};
pub use header::{parse, parse_strict, serialize, ENTRY_SEPARATOR};
pub use link_url::LinkUrl;
pub use paginate::{paginate, paginate_with};
pub use types::{Relation, WebLinkSet};
