//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// Command line configuration for docfolio.
#[derive(Debug, Clone, Parser)]
#[command(name = "docfolio", version, about, long_about = None)]
pub struct Config {
    /// Documentation directory containing markdown files
    #[arg(default_value = "docs")]
    pub docs: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site title (defaults to the documentation directory name)
    #[arg(long)]
    pub title: Option<String>,

    /// Print the rendered HTML fragment of one document and exit
    #[arg(long, value_name = "SLUG")]
    pub render: Option<String>,

    /// Do not open the generated index in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the documentation path does not exist or is not a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.docs.exists() {
            bail!(
                "Documentation path does not exist: {}",
                self.docs.display()
            );
        }
        if !self.docs.is_dir() {
            bail!(
                "Documentation path is not a directory: {}",
                self.docs.display()
            );
        }

        Ok(())
    }

    /// Returns site title from configuration or documentation directory.
    ///
    /// # Errors
    ///
    /// Returns error if the documentation path has no name component or contains invalid UTF8.
    pub fn site_title(&self) -> Result<String> {
        if let Some(title) = &self.title {
            return Ok(title.clone());
        }

        let path = self
            .docs
            .canonicalize()
            .unwrap_or_else(|_| self.docs.clone());

        path.file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract site title from path: {}", path.display()))
            .map(String::from)
    }

    /// Log level selected by the verbosity flag.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
