//! Editing cycle: the boundary the host application talks to
//!
//! An editing cycle spans `initialize` to `commit`/`cancel`. It owns the
//! staged buffer and the entry editor, and both ending calls consume it, so
//! a finished cycle cannot be touched again.
//!
//! ## Logging Ownership
//!
//! The cycle owns lifecycle logging for every boundary operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! every event carrying the `cycle_id`. The buffer, validation and apply
//! layers only use `tracing::debug!()`.

use std::collections::BTreeSet;
use std::time::Instant;

use dictedit_core_types::CycleId;

use crate::apply::{apply, Applied};
use crate::commands::BufferCommand;
use crate::config::CycleOptions;
use crate::errors::{DictEditError, Result};
use crate::model::DictionaryValue;
use crate::ops::StagedBuffer;
use crate::policy::{AlwaysConfirm, ConfirmationGate};
use crate::queries::{query_entries, QueryParams, QueryResponse};
use crate::session::EntryEditor;
use crate::{log_op_end, log_op_error, log_op_start};

/// One staged editing cycle over a dictionary's entries
#[derive(Debug)]
pub struct EditingCycle {
    id: CycleId,
    options: CycleOptions,
    buffer: StagedBuffer,
    editor: EntryEditor,
}

impl EditingCycle {
    /// Begin a cycle with a value-wise copy of `source`
    ///
    /// `source` is only read; nothing done in the cycle is visible through it.
    /// If `source` repeats a key, only the first entry with that key is staged,
    /// so a commit never carries the repeats.
    pub fn initialize(source: &[DictionaryValue], options: CycleOptions) -> Self {
        let id = CycleId::new();
        log_op_start!("initialize", cycle_id = %id);
        let start = Instant::now();

        let cycle = Self {
            buffer: StagedBuffer::from_source(source),
            editor: EntryEditor::new(),
            options,
            id,
        };

        let duplicates_dropped = source.len() - cycle.buffer.len();
        if duplicates_dropped > 0 {
            tracing::warn!(
                cycle_id = %cycle.id,
                duplicates_dropped,
                "source repeats keys; later entries not staged"
            );
        }

        log_op_end!(
            "initialize",
            duration_ms = start.elapsed().as_millis() as u64,
            cycle_id = %cycle.id,
            buffer_len = cycle.buffer.len(),
            duplicates_dropped,
            editable = cycle.options.editable
        );
        cycle
    }

    pub fn id(&self) -> &CycleId {
        &self.id
    }

    pub fn options(&self) -> &CycleOptions {
        &self.options
    }

    pub fn is_editable(&self) -> bool {
        self.options.editable
    }

    /// Number of entries currently staged
    pub fn count(&self) -> usize {
        self.buffer.len()
    }

    pub fn buffer(&self) -> &StagedBuffer {
        &self.buffer
    }

    pub fn editor(&self) -> &EntryEditor {
        &self.editor
    }

    /// Current view of the buffer for the host table
    ///
    /// Never fails: an invalid sort parameter yields `success: false`.
    pub fn query(&self, params: &QueryParams) -> QueryResponse {
        let result = logged("query", &self.id, || {
            query_entries(self.buffer.entries(), params)
        });
        QueryResponse::from_result(result)
    }

    /// Open the entry editor for a new entry and return its initial draft
    ///
    /// # Errors
    /// * `ReadOnly` - the cycle is view-only
    /// * `SessionActive` - the entry editor is already open
    /// * `InvalidOrderStep` - the cycle's order step is unusable
    pub fn open_create(&mut self) -> Result<DictionaryValue> {
        logged("open_create", &self.id, || {
            ensure_editable(&self.options)?;
            self.editor
                .begin_create(&self.buffer, self.options.order_step)
                .cloned()
        })
    }

    /// Open the entry editor on `key` and return its current values
    ///
    /// # Errors
    /// * `ReadOnly` - the cycle is view-only
    /// * `SessionActive` - the entry editor is already open
    /// * `NotFound` - no entry has `key`
    pub fn open_edit(&mut self, key: &str) -> Result<DictionaryValue> {
        logged("open_edit", &self.id, || {
            ensure_editable(&self.options)?;
            self.editor.begin_edit(&self.buffer, key).cloned()
        })
    }

    /// Submit the open entry editor with the user's candidate
    ///
    /// # Errors
    /// * `NoActiveSession` - the entry editor is not open
    /// * validation errors keep the editor open; `NotFound` closes it
    pub fn submit_draft(&mut self, candidate: DictionaryValue) -> Result<()> {
        logged("submit_draft", &self.id, || {
            self.editor
                .submit(&mut self.buffer, candidate, &self.options)
                .map(|_| ())
        })
    }

    /// Close the entry editor without changes
    ///
    /// # Errors
    /// * `NoActiveSession` - the entry editor is not open
    pub fn close_editor(&mut self) -> Result<()> {
        logged("close_editor", &self.id, || self.editor.cancel())
    }

    /// Validate and append a new entry
    ///
    /// # Errors
    /// * `ReadOnly`, or a validation error; the buffer is unchanged
    pub fn submit_create(&mut self, candidate: DictionaryValue) -> Result<()> {
        self.run("submit_create", BufferCommand::Insert { candidate }, &AlwaysConfirm)
            .map(|_| ())
    }

    /// Validate a replacement and swap it in for `original_key`
    ///
    /// # Errors
    /// * `ReadOnly`, or a validation error; the buffer is unchanged
    /// * `NotFound` - `original_key` is no longer staged (non-fatal)
    pub fn submit_update(&mut self, original_key: &str, candidate: DictionaryValue) -> Result<()> {
        let cmd = BufferCommand::Replace {
            original_key: original_key.to_string(),
            candidate,
        };
        self.run("submit_update", cmd, &AlwaysConfirm).map(|_| ())
    }

    /// Remove `key`; the caller has already obtained confirmation
    ///
    /// An absent key is a no-op.
    ///
    /// # Errors
    /// * `ReadOnly` - the cycle is view-only
    pub fn remove(&mut self, key: &str) -> Result<()> {
        let cmd = BufferCommand::Remove {
            key: key.to_string(),
        };
        self.run("remove", cmd, &AlwaysConfirm).map(|_| ())
    }

    /// Remove every key in `keys`; the caller has already obtained confirmation
    ///
    /// # Errors
    /// * `ReadOnly` - the cycle is view-only
    pub fn batch_remove(&mut self, keys: &BTreeSet<String>) -> Result<()> {
        let cmd = BufferCommand::BatchRemove { keys: keys.clone() };
        self.run("batch_remove", cmd, &AlwaysConfirm).map(|_| ())
    }

    /// Ask `gate` to confirm removing `key`, then remove it
    ///
    /// Returns whether the buffer changed.
    ///
    /// # Errors
    /// * `ReadOnly` - the cycle is view-only
    pub fn remove_confirmed(&mut self, key: &str, gate: &dyn ConfirmationGate) -> Result<bool> {
        let cmd = BufferCommand::Remove {
            key: key.to_string(),
        };
        self.run("remove", cmd, gate).map(|applied| changed(&applied))
    }

    /// Ask `gate` to confirm removing the selection, then remove it
    ///
    /// Returns whether the buffer changed.
    ///
    /// # Errors
    /// * `ReadOnly` - the cycle is view-only
    pub fn batch_remove_confirmed(
        &mut self,
        keys: &BTreeSet<String>,
        gate: &dyn ConfirmationGate,
    ) -> Result<bool> {
        let cmd = BufferCommand::BatchRemove { keys: keys.clone() };
        self.run("batch_remove", cmd, gate)
            .map(|applied| changed(&applied))
    }

    /// Renumber orders to `step, 2*step, ...` in ascending order
    ///
    /// # Errors
    /// * `ReadOnly` - the cycle is view-only
    /// * `InvalidOrderStep` - the cycle's order step is unusable; nothing changes
    pub fn resequence(&mut self) -> Result<()> {
        self.run("resequence", BufferCommand::Resequence, &AlwaysConfirm)
            .map(|_| ())
    }

    /// Apply any buffer command, asking `gate` before removals
    ///
    /// # Errors
    /// Any error of [`apply`].
    pub fn apply(&mut self, cmd: BufferCommand, gate: &dyn ConfirmationGate) -> Result<Applied> {
        let op = cmd.op_name();
        self.run(op, cmd, gate)
    }

    /// End the cycle and hand back the staged entries in buffer order
    pub fn commit(self) -> Vec<DictionaryValue> {
        log_op_start!("commit", cycle_id = %self.id);
        let start = Instant::now();

        if self.editor.is_active() {
            tracing::debug!(cycle_id = %self.id, "discarding open entry editor on commit");
        }
        let entries = self.buffer.into_entries();

        log_op_end!(
            "commit",
            duration_ms = start.elapsed().as_millis() as u64,
            cycle_id = %self.id,
            buffer_len = entries.len()
        );
        entries
    }

    /// End the cycle and discard every staged change
    pub fn cancel(self) {
        log_op_start!("cancel", cycle_id = %self.id);
        let start = Instant::now();
        let discarded = self.buffer.len();
        drop(self.buffer);
        log_op_end!(
            "cancel",
            duration_ms = start.elapsed().as_millis() as u64,
            cycle_id = %self.id,
            buffer_len = discarded
        );
    }

    fn run(
        &mut self,
        op: &'static str,
        cmd: BufferCommand,
        gate: &dyn ConfirmationGate,
    ) -> Result<Applied> {
        logged(op, &self.id, || {
            apply(&mut self.buffer, cmd, &self.options, gate)
        })
    }
}

fn ensure_editable(options: &CycleOptions) -> Result<()> {
    if !options.editable {
        return Err(DictEditError::ReadOnly);
    }
    Ok(())
}

fn changed(applied: &Applied) -> bool {
    match applied {
        Applied::Removed { count } => *count > 0,
        Applied::Declined => false,
        _ => true,
    }
}

/// Wrap a boundary operation in start/end/end_error events
fn logged<T>(op: &'static str, cycle_id: &CycleId, f: impl FnOnce() -> Result<T>) -> Result<T> {
    log_op_start!(op, cycle_id = %cycle_id);
    let start = Instant::now();

    let result = f();
    match &result {
        Ok(_) => {
            log_op_end!(
                op,
                duration_ms = start.elapsed().as_millis() as u64,
                cycle_id = %cycle_id
            );
        }
        Err(err) => {
            log_op_error!(
                op,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                cycle_id = %cycle_id
            );
        }
    }
    result
}
