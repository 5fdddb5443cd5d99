//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{LastPageRounding, LinkConfig};
use crate::error::Result;
use crate::links::{self, LinkSetBuilder, WebLinkSet};
use std::io::{self, Read, Write};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against stdin and stdout
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout.lock())
    }

    /// Run the CLI command with explicit input and output
    pub fn run_with<R: Read, W: Write>(&self, input: R, out: &mut W) -> Result<()> {
        let config = self.load_config()?;

        let links = match &self.cli.command {
            Commands::Build {
                url,
                page,
                page_size,
                total,
                ceil,
            } => {
                let mut builder = LinkSetBuilder::new(config);
                if *ceil {
                    builder = builder.rounding(LastPageRounding::Ceil);
                }
                builder.build(url, *page, *page_size, *total)?
            }
            Commands::Parse { header, strict } => {
                let header = match header {
                    Some(header) => header.clone(),
                    None => read_input(input)?,
                };
                if *strict || config.strict_relations {
                    links::parse_strict(&header)?
                } else {
                    links::parse(&header)?
                }
            }
            Commands::Format => {
                let json = read_input(input)?;
                serde_json::from_str::<WebLinkSet>(&json)?
            }
        };

        self.output_links(&links, out)
    }

    /// Load link config, falling back to defaults
    fn load_config(&self) -> Result<LinkConfig> {
        match &self.cli.config {
            Some(path) => LinkConfig::load(path),
            None => Ok(LinkConfig::default()),
        }
    }

    /// Output a link set
    fn output_links<W: Write>(&self, links: &WebLinkSet, out: &mut W) -> Result<()> {
        match self.cli.format {
            OutputFormat::Header => writeln!(out, "{links}")?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(links)?)?,
            OutputFormat::Pretty => {
                if links.is_empty() {
                    writeln!(out, "(no links)")?;
                }
                for (rel, url) in links.iter() {
                    writeln!(out, "{:<6} {url}", rel.as_str())?;
                }
            }
        }
        Ok(())
    }
}

/// Read all input, dropping the trailing newline left by shells and pipes
fn read_input<R: Read>(mut input: R) -> Result<String> {
    let mut buf = String::new();
    input.read_to_string(&mut buf)?;
    let trimmed = buf.trim_end_matches(['\r', '\n']).len();
    buf.truncate(trimmed);
    Ok(buf)
}
