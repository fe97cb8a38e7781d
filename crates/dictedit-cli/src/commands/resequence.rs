//! Resequence command
//!
//! Usage: dictedit resequence <FILE> [--order-step <N>]

use clap::Args;
use std::path::PathBuf;

use dictedit_core::{CycleOptions, EditingCycle, ExError};

use super::{load_entries, print_json};

#[derive(Debug, Args)]
pub struct ResequenceArgs {
    /// Dictionary file (JSON array of entries)
    pub file: PathBuf,

    /// Spacing between consecutive orders
    #[arg(
        long,
        default_value_t = 5.0,
        value_parser = super::parse_order_step,
        allow_negative_numbers = true
    )]
    pub order_step: f64,
}

/// Execute resequence command
pub fn execute(args: ResequenceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = load_entries(&args.file)?;
    let options = CycleOptions::default().with_order_step(args.order_step);

    let mut cycle = EditingCycle::initialize(&source, options);
    cycle
        .resequence()
        .map_err(|e| ExError::from(e).with_op("resequence"))?;

    print_json(&cycle.commit())
}
