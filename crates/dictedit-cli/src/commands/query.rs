//! Query command
//!
//! Usage: dictedit query <FILE> [--sort <FIELD|-FIELD>] [--enabled 0|1]...

use clap::Args;
use std::path::PathBuf;

use dictedit_core::{CycleOptions, EditingCycle, QueryParams};

use super::{load_entries, print_json};

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Dictionary file (JSON array of entries)
    pub file: PathBuf,

    /// Sort field, prefix with '-' for descending (default: order)
    #[arg(short, long, allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Keep only entries whose enabled flag is one of these ("1" or "0")
    #[arg(short, long)]
    pub enabled: Vec<String>,
}

/// Execute query command
///
/// Prints the response envelope; an unusable sort still prints the
/// envelope before failing.
pub fn execute(args: QueryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = load_entries(&args.file)?;
    let cycle = EditingCycle::initialize(&source, CycleOptions::read_only());

    let mut params = QueryParams::new();
    if let Some(sort) = args.sort {
        params = params.sort(sort);
    }
    if !args.enabled.is_empty() {
        params = params.enabled(args.enabled);
    }

    let response = cycle.query(&params);
    print_json(&response)?;
    cycle.cancel();

    match response.error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}
