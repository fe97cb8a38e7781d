//! Command types for every buffer mutation
//!
//! Commands are processed by the `apply()` function. They are serde-tagged by
//! `op` so hosts can script a sequence of edits as JSON.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::DictionaryValue;

/// A single mutation of the staged buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BufferCommand {
    /// Append a new entry (Create mode submit)
    Insert { candidate: DictionaryValue },

    /// Replace the entry keyed `original_key` (Update mode submit)
    Replace {
        original_key: String,
        candidate: DictionaryValue,
    },

    /// Remove one entry, after confirmation
    Remove { key: String },

    /// Remove every entry in `keys`, after confirmation
    BatchRemove { keys: BTreeSet<String> },

    /// Renumber orders to evenly spaced steps
    Resequence,
}

impl BufferCommand {
    /// Operation name used in logs
    pub fn op_name(&self) -> &'static str {
        match self {
            BufferCommand::Insert { .. } => "insert",
            BufferCommand::Replace { .. } => "replace",
            BufferCommand::Remove { .. } => "remove",
            BufferCommand::BatchRemove { .. } => "batch_remove",
            BufferCommand::Resequence => "resequence",
        }
    }
}
