// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::ref_option)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # weblinks
//!
//! Builds and parses pagination `Link` headers (RFC 5988 style) for HTTP
//! APIs, covering the `self`, `first`, `prev`, `next` and `last` relations.
//!
//! ## Features
//!
//! - **Link Set Builder**: derive navigation URLs from page, page size and total count
//! - **Header Parser**: reconstruct the same links from `Link` header text
//! - **Header Serializer**: render links as header text, the inverse of the parser
//! - **Query Preservation**: every other query parameter of the base URL is kept
//!
//! ## Quick Start
//!
//! ```rust
//! use weblinks::links::{build, parse};
//!
//! let links = build("https://api.example.com/items?sort=name", 2, 10, 100)?;
//! assert_eq!(
//!     links.next.as_ref().map(|u| u.as_str()),
//!     Some("https://api.example.com/items?page=3&page_size=10&sort=name")
//! );
//!
//! let header = links.link_header();
//! assert_eq!(parse(&header)?, links);
//! # Ok::<(), weblinks::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  build   ┌────────────┐  serialize  ┌─────────────┐
//! │ base URL +   │ ───────► │ WebLinkSet │ ──────────► │ Link header │
//! │ page/size/   │          │ self next  │ ◄────────── │ text        │
//! │ total        │          │ prev first │    parse    └─────────────┘
//! └──────────────┘          │ last       │
//!        │                  └────────────┘
//!        └── paginate(base, page, page_size) per relation
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Link set building, header parsing and serialization
pub mod links;

/// Link generation settings
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{LastPageRounding, LinkConfig};
pub use error::{Error, Result};
pub use links::{LinkUrl, Relation, WebLinkSet};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
