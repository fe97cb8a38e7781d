//! Edit command
//!
//! Usage: dictedit edit <FILE> --script <SCRIPT> [--yes] [--order-step <N>] [--read-only]
//!
//! The script is a JSON array of buffer commands, for example
//! `[{"op":"remove","key":"A"},{"op":"resequence"}]`. All commands run in a
//! single editing cycle; the first failure cancels the cycle and nothing is
//! printed. On success the committed entry list goes to stdout.

use clap::Args;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use dictedit_core::{
    AlwaysConfirm, BufferCommand, ConfirmationGate, ConfirmationRequest, CycleOptions,
    EditingCycle, ExError,
};

use super::{load_entries, print_json};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Dictionary file (JSON array of entries)
    pub file: PathBuf,

    /// Script of buffer commands (JSON array)
    #[arg(long)]
    pub script: PathBuf,

    /// Confirm every removal without prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Spacing used by resequence and suggested orders
    #[arg(
        long,
        default_value_t = 5.0,
        value_parser = super::parse_order_step,
        allow_negative_numbers = true
    )]
    pub order_step: f64,

    /// Open the cycle view-only; any mutation fails
    #[arg(long)]
    pub read_only: bool,
}

/// Asks on stderr and reads the answer from stdin; anything but "y" declines
struct PromptGate;

impl ConfirmationGate for PromptGate {
    fn confirm(&self, request: &ConfirmationRequest) -> bool {
        eprint!("{} [y/N] ", request.message());
        std::io::stderr().flush().ok();

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(_) => false,
        }
    }
}

/// Execute edit command
pub fn execute(args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = load_entries(&args.file)?;
    let raw_script = std::fs::read_to_string(&args.script)
        .map_err(|e| format!("cannot read {}: {}", args.script.display(), e))?;
    let script: Vec<BufferCommand> = serde_json::from_str(&raw_script)
        .map_err(|e| format!("invalid script {}: {}", args.script.display(), e))?;

    let options = CycleOptions {
        editable: !args.read_only,
        order_step: args.order_step,
    };
    let gate: &dyn ConfirmationGate = if args.yes { &AlwaysConfirm } else { &PromptGate };

    let mut cycle = EditingCycle::initialize(&source, options);
    for (index, cmd) in script.into_iter().enumerate() {
        let op = cmd.op_name();
        if let Err(err) = cycle.apply(cmd, gate) {
            let cycle_id = cycle.id().clone();
            cycle.cancel();
            let err = ExError::from(err).with_op(op).with_cycle_id(cycle_id);
            return Err(format!("script step {}: {}", index + 1, err).into());
        }
    }

    print_json(&cycle.commit())
}
