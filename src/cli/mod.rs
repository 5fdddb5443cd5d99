//! CLI module
//!
//! Command-line interface for building and parsing Link headers.
//!
//! # Commands
//!
//! - `build` - Derive pagination links from a base URL and paging values
//! - `parse` - Parse Link header text
//! - `format` - Render a JSON link set as Link header text

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
