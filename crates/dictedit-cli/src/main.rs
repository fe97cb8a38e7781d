//! DictEdit CLI
//!
//! Command-line host for staged dictionary value editing

use clap::{Parser, Subcommand};
use dictedit_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "dictedit")]
#[command(about = "DictEdit - Staged editing of dictionary values", long_about = None)]
struct Cli {
    /// Enable logging to stderr with a profile (dev, prod)
    #[arg(long, global = true)]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sort and filter the entries of a dictionary file
    Query(commands::query::QueryArgs),
    /// Run a script of edits through one editing cycle
    Edit(commands::edit::EditArgs),
    /// Renumber entry orders in steps
    Resequence(commands::resequence::ResequenceArgs),
}

fn main() {
    let cli = Cli::parse();
    if let Some(profile) = cli.log_profile {
        logging_facility::init(profile);
    }

    let result = match cli.command {
        Commands::Query(args) => commands::query::execute(args),
        Commands::Edit(args) => commands::edit::execute(args),
        Commands::Resequence(args) => commands::resequence::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
