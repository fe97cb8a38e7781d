//! DictEdit Core - staged editing of dictionary value entries
//!
//! This crate provides the in-memory kernel behind a dictionary value editor:
//! - `DictionaryValue` entries and field-level validation
//! - Sort and filter queries over the staged entries
//! - A staged buffer that isolates edits until the cycle is committed
//! - The entry editor session (Idle / Creating / Editing)
//! - The `EditingCycle` boundary with structured lifecycle logging
//!
//! Nothing here performs I/O: the host supplies the source entries when a
//! cycle starts and receives the final list on commit.

pub mod apply;
pub mod commands;
pub mod config;
pub mod cycle;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod queries;
pub mod rules;
pub mod session;

pub use dictedit_core_types as core_types;

// Re-export commonly used types
pub use apply::{apply, Applied};
pub use commands::BufferCommand;
pub use config::CycleOptions;
pub use cycle::EditingCycle;
pub use errors::{DictEditError, ExError, ExErrorKind, Result};
pub use model::{DictionaryValue, EntryField};
pub use ops::StagedBuffer;
pub use policy::{AlwaysConfirm, ConfirmationGate, ConfirmationRequest, NeverConfirm};
pub use queries::{QueryParams, QueryResponse};
pub use session::{EditMode, EditSession, EntryEditor};
