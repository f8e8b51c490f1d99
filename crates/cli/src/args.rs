//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define both binaries' argument structures using clap derive macros.
//! - Route parse failures and `--help` to the exit contract the tools
//!   promise: usage on stderr, exit 1 on any argument error, exit 0 for
//!   help (clap's defaults are exit 2 and stdout, so parsing goes through
//!   `try_parse`).
//!
//! Non-responsibilities:
//! - Does not execute commands (see the `commands` module).

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::error::ExitCode;

use kibana_client::endpoint::{DEFAULT_HOST, DEFAULT_INDEX, DEFAULT_PORT};

/// Arguments for `copy-kibana-dashboard`.
#[derive(Debug, Parser)]
#[command(
    name = "copy-kibana-dashboard",
    about = "Copy a Kibana 4 dashboard and its visualizations and saved searches from one cluster to another",
    long_about = "Copy a Kibana 4 dashboard and its visualizations and saved searches from one \
                  cluster to another.\n\nDoes not check that either cluster actually has Kibana \
                  version 4. Does not copy the index being visualized; copy that yourself.",
    disable_version_flag = true
)]
pub struct CopyArgs {
    /// Id of the dashboard to copy (required)
    #[arg(short, long, value_name = "ID")]
    pub dashboard: Option<String>,

    /// Source cluster host
    #[arg(long, value_name = "HOST", default_value = DEFAULT_HOST)]
    pub from_host: String,

    /// Source cluster port
    #[arg(long, value_name = "PORT", default_value_t = DEFAULT_PORT)]
    pub from_port: u16,

    /// Source index holding the Kibana objects
    #[arg(long, value_name = "INDEX", default_value = DEFAULT_INDEX)]
    pub from_index: String,

    /// Destination cluster host
    #[arg(long, value_name = "HOST", default_value = DEFAULT_HOST)]
    pub to_host: String,

    /// Destination cluster port
    #[arg(long, value_name = "PORT", default_value_t = DEFAULT_PORT)]
    pub to_port: u16,

    /// Destination index to write the Kibana objects to
    #[arg(long, value_name = "INDEX", default_value = DEFAULT_INDEX)]
    pub to_index: String,

    /// Rewrite each copied saved search to run against this data index
    /// (default: don't change)
    #[arg(long, value_name = "NAME")]
    pub to_saved_search_index: Option<String>,

    /// Print object keys as they are copied (the default)
    #[arg(long, overrides_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress output; errors still go to stderr
    #[arg(long, overrides_with = "verbose")]
    pub quiet: bool,
}

impl CopyArgs {
    /// Progress lines are on by default; `--quiet` turns them off.
    pub fn is_verbose(&self) -> bool {
        !self.quiet
    }
}

/// Arguments for `import-csv`.
#[derive(Debug, Parser)]
#[command(
    name = "import-csv",
    about = "Load a CSV file into a document store, one document per row",
    disable_version_flag = true
)]
pub struct ImportArgs {
    /// Document-store host
    #[arg(long, value_name = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Document-store port
    #[arg(long, value_name = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Comma-separated list of CSV columns to import (default: all).
    /// Column names are matched case-insensitively against the header row.
    #[arg(long, value_name = "COLUMNS")]
    pub columns: Option<String>,

    /// Index to write documents to (required)
    #[arg(long, value_name = "INDEX")]
    pub index: Option<String>,

    /// Type of the documents created (required)
    #[arg(long = "type", value_name = "TYPE")]
    pub doc_type: Option<String>,

    /// CSV file to load; the first row is treated as the header
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl ImportArgs {
    /// The parsed column allow-list, if one was given.
    pub fn column_list(&self) -> Option<Vec<String>> {
        self.columns
            .as_ref()
            .map(|cols| cols.split(',').map(str::to_string).collect())
    }
}

/// Parse arguments, honoring the exit contract: help goes to stderr with
/// exit 0, every other parse failure goes to stderr with exit 1.
pub fn parse_or_usage_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            eprint!("{e}");
            std::process::exit(ExitCode::Success.as_i32());
        }
        Err(e) => {
            eprint!("{e}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}

/// Print a tool's usage text to stderr.
pub fn print_usage<T: CommandFactory>() {
    eprintln!("{}", T::command().render_help());
}
