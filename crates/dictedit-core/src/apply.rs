//! Functional-boundary apply function
//!
//! `apply()` is the single entry point for mutating a staged buffer.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: a command either fully applies or returns an error
//!   with the buffer untouched. Validation always runs before mutation.
//! - **No panics**: invalid candidates and vanished targets return typed errors
//! - **Confirmation first**: removals ask the `ConfirmationGate`; a declined
//!   prompt is a successful no-op (`Applied::Declined`)
//!
//! ## Example
//!
//! ```
//! use dictedit_core::{apply, BufferCommand, CycleOptions, DictionaryValue, StagedBuffer};
//! use dictedit_core::policy::AlwaysConfirm;
//!
//! let mut buffer = StagedBuffer::new();
//! let cmd = BufferCommand::Insert {
//!     candidate: DictionaryValue::new("status/open", "Open").with_order(5.0),
//! };
//!
//! apply(&mut buffer, cmd, &CycleOptions::default(), &AlwaysConfirm).unwrap();
//! assert_eq!(buffer.len(), 1);
//! ```

use crate::commands::BufferCommand;
use crate::config::{check_order_step, CycleOptions};
use crate::errors::{DictEditError, Result};
use crate::ops::StagedBuffer;
use crate::policy::{ConfirmationGate, ConfirmationRequest};
use crate::rules::validation;

/// What a successfully applied command did
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Inserted { key: String },
    Replaced { original_key: String, key: String },
    /// Number of entries actually removed (absent keys are skipped)
    Removed { count: usize },
    /// The confirmation gate declined; nothing changed
    Declined,
    Resequenced { len: usize },
}

/// Apply a command to a buffer
///
/// # Errors
///
/// * `ReadOnly` - `options.editable` is false
/// * `FieldRequired` / `FieldPattern` / `FieldRange` / `DuplicateKey` - the
///   candidate of an Insert or Replace failed validation
/// * `NotFound` - the target of a Replace is no longer in the buffer
/// * `InvalidOrderStep` - a Resequence with an unusable `options.order_step`
///
/// On error the buffer is exactly as it was before the call.
pub fn apply(
    buffer: &mut StagedBuffer,
    cmd: BufferCommand,
    options: &CycleOptions,
    gate: &dyn ConfirmationGate,
) -> Result<Applied> {
    if !options.editable {
        return Err(DictEditError::ReadOnly);
    }

    match cmd {
        BufferCommand::Insert { candidate } => {
            let entry = validation::validate(candidate, buffer.entries(), None)?;
            let key = entry.entry().key.clone();
            buffer.insert(entry);
            Ok(Applied::Inserted { key })
        }

        BufferCommand::Replace {
            original_key,
            candidate,
        } => {
            let entry =
                validation::validate(candidate, buffer.entries(), Some(original_key.as_str()))?;
            let key = entry.entry().key.clone();
            buffer.replace(&original_key, entry)?;
            Ok(Applied::Replaced { original_key, key })
        }

        BufferCommand::Remove { key } => {
            // Nothing to confirm when the target already vanished
            let Some(entry) = buffer.get(&key) else {
                return Ok(Applied::Removed { count: 0 });
            };
            if !gate.confirm(&ConfirmationRequest::remove_one(entry)) {
                tracing::debug!(entry_key = %key, "remove declined");
                return Ok(Applied::Declined);
            }
            let count = usize::from(buffer.remove(&key).is_some());
            Ok(Applied::Removed { count })
        }

        BufferCommand::BatchRemove { keys } => {
            if keys.is_empty() {
                return Ok(Applied::Removed { count: 0 });
            }
            if !gate.confirm(&ConfirmationRequest::remove_selected(keys.clone())) {
                tracing::debug!(requested = keys.len(), "batch remove declined");
                return Ok(Applied::Declined);
            }
            let count = buffer.remove_many(&keys);
            Ok(Applied::Removed { count })
        }

        BufferCommand::Resequence => {
            let step = check_order_step(options.order_step)?;
            buffer.resequence(step);
            Ok(Applied::Resequenced { len: buffer.len() })
        }
    }
}
