//! Error types for weblinks
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::links::Relation;
use thiserror::Error;

/// The main error type for weblinks
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Link Errors
    // ============================================================================
    /// A base URL or a header URL failed to parse
    #[error("{}", invalid_url_message(.relation, .source))]
    InvalidUrl {
        /// Header relation the URL belonged to; `None` for a base URL
        relation: Option<Relation>,
        /// Underlying parse failure
        source: url::ParseError,
    },

    /// A header entry is not of the form `<URL>; rel="name"`
    #[error("invalid line in header: {line}")]
    MalformedHeaderLine {
        /// The offending entry
        line: String,
    },

    /// Relation name outside self, next, prev, first, last
    #[error("unknown link relation: {name}")]
    UnknownRelation {
        /// The name as written
        name: String,
    },

    /// Page size of zero
    #[error("page_size must be greater than zero")]
    InvalidPageSize,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid link config
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the config
        message: String,
    },

    /// Config file is not valid YAML for `LinkConfig`
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Input is not a valid JSON link set
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Reading input or writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Error with added context
    #[error("{0}")]
    Other(String),
}

fn invalid_url_message(relation: &Option<Relation>, source: &url::ParseError) -> String {
    match relation {
        Some(rel) => format!("could not parse url from rel:{rel} of link header: {source}"),
        None => format!("Invalid URL: {source}"),
    }
}

impl From<url::ParseError> for Error {
    fn from(source: url::ParseError) -> Self {
        Self::InvalidUrl {
            relation: None,
            source,
        }
    }
}

impl Error {
    /// Create an invalid URL error for a header relation
    pub fn invalid_url(relation: Relation, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            relation: Some(relation),
            source,
        }
    }

    /// Create a malformed header line error
    pub fn malformed_line(line: impl Into<String>) -> Self {
        Self::MalformedHeaderLine { line: line.into() }
    }

    /// Create an unknown relation error
    pub fn unknown_relation(name: impl Into<String>) -> Self {
        Self::UnknownRelation { name: name.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Relation the error refers to, if any
    pub fn relation(&self) -> Option<Relation> {
        match self {
            Error::InvalidUrl { relation, .. } => *relation,
            _ => None,
        }
    }
}

/// Result type alias for weblinks
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
