pub mod edit;
pub mod query;
pub mod resequence;

use std::path::Path;

use dictedit_core::DictionaryValue;
use serde::Serialize;

/// Read a dictionary file: a JSON array of entries
pub fn load_entries(path: &Path) -> Result<Vec<DictionaryValue>, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let entries = serde_json::from_str(&raw)
        .map_err(|e| format!("invalid dictionary file {}: {}", path.display(), e))?;
    Ok(entries)
}

/// Parse `--order-step`: a finite number greater than 0
pub fn parse_order_step(raw: &str) -> Result<f64, String> {
    let step: f64 = raw
        .parse()
        .map_err(|e| format!("not a number: {}", e))?;
    dictedit_core::config::check_order_step(step).map_err(|e| e.to_string())
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
