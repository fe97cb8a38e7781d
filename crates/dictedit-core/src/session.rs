//! Entry-level edit session
//!
//! The entry editor is modal with respect to the buffer: at most one entry
//! is being created or edited at a time. The session remembers the key the
//! edited entry had when editing started, because the user may change the
//! key field itself before submitting.
//!
//! ```text
//!   Idle ──begin_create──▶ Creating ──submit ok / cancel──▶ Idle
//!   Idle ──begin_edit────▶ Editing  ──submit ok / NotFound / cancel──▶ Idle
//! ```
//!
//! A submit that fails validation leaves the session open so the user can
//! correct the draft.

use crate::apply::{apply, Applied};
use crate::commands::BufferCommand;
use crate::config::{check_order_step, CycleOptions};
use crate::errors::{DictEditError, Result};
use crate::model::DictionaryValue;
use crate::ops::StagedBuffer;
use crate::policy::AlwaysConfirm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Update,
}

/// State of the entry editor
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Creating {
        draft: DictionaryValue,
    },
    Editing {
        original_key: String,
        draft: DictionaryValue,
    },
}

/// Controller for the single active entry editor of a cycle
#[derive(Debug, Clone, Default)]
pub struct EntryEditor {
    session: EditSession,
}

impl EntryEditor {
    pub fn new() -> Self {
        Self {
            session: EditSession::Idle,
        }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.session, EditSession::Idle)
    }

    pub fn mode(&self) -> Option<EditMode> {
        match self.session {
            EditSession::Idle => None,
            EditSession::Creating { .. } => Some(EditMode::Create),
            EditSession::Editing { .. } => Some(EditMode::Update),
        }
    }

    /// Key captured when the Update session started
    pub fn original_key(&self) -> Option<&str> {
        match &self.session {
            EditSession::Editing { original_key, .. } => Some(original_key),
            _ => None,
        }
    }

    /// Initial field values the editor was opened with
    pub fn draft(&self) -> Option<&DictionaryValue> {
        match &self.session {
            EditSession::Idle => None,
            EditSession::Creating { draft } | EditSession::Editing { draft, .. } => Some(draft),
        }
    }

    /// Open the editor for a new entry
    ///
    /// The draft is empty apart from `enabled = true` and the buffer's
    /// suggested order.
    ///
    /// # Errors
    /// * `SessionActive` - an editor is already open
    /// * `InvalidOrderStep` - `order_step` is not a finite number above 0
    pub fn begin_create(
        &mut self,
        buffer: &StagedBuffer,
        order_step: f64,
    ) -> Result<&DictionaryValue> {
        self.ensure_idle()?;
        let order_step = check_order_step(order_step)?;

        let draft = DictionaryValue {
            key: String::new(),
            value: String::new(),
            description: None,
            order: Some(buffer.suggested_order(order_step)),
            enabled: true,
        };
        self.session = EditSession::Creating { draft };
        self.draft().ok_or(DictEditError::NoActiveSession)
    }

    /// Open the editor on an existing entry
    ///
    /// # Errors
    /// * `SessionActive` - an editor is already open
    /// * `NotFound` - no entry has `key`
    pub fn begin_edit(&mut self, buffer: &StagedBuffer, key: &str) -> Result<&DictionaryValue> {
        self.ensure_idle()?;

        let draft = buffer
            .get(key)
            .cloned()
            .ok_or_else(|| DictEditError::NotFound {
                key: key.to_string(),
            })?;
        self.session = EditSession::Editing {
            original_key: draft.key.clone(),
            draft,
        };
        self.draft().ok_or(DictEditError::NoActiveSession)
    }

    /// Submit the user's candidate for the open session
    ///
    /// Create sessions insert; Update sessions replace the entry keyed by
    /// the original key. On success, and on `NotFound`, the editor returns
    /// to Idle. Validation failures keep it open.
    ///
    /// # Errors
    /// * `NoActiveSession` - nothing is being edited
    /// * any error of [`apply`] for Insert/Replace
    pub fn submit(
        &mut self,
        buffer: &mut StagedBuffer,
        candidate: DictionaryValue,
        options: &CycleOptions,
    ) -> Result<Applied> {
        let cmd = match &self.session {
            EditSession::Idle => return Err(DictEditError::NoActiveSession),
            EditSession::Creating { .. } => BufferCommand::Insert { candidate },
            EditSession::Editing { original_key, .. } => BufferCommand::Replace {
                original_key: original_key.clone(),
                candidate,
            },
        };

        // Insert and Replace never prompt
        match apply(buffer, cmd, options, &AlwaysConfirm) {
            Ok(applied) => {
                self.session = EditSession::Idle;
                Ok(applied)
            }
            Err(err @ DictEditError::NotFound { .. }) => {
                self.session = EditSession::Idle;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Close the editor without touching the buffer
    ///
    /// # Errors
    /// * `NoActiveSession` - nothing is being edited
    pub fn cancel(&mut self) -> Result<()> {
        if !self.is_active() {
            return Err(DictEditError::NoActiveSession);
        }
        self.session = EditSession::Idle;
        Ok(())
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_active() {
            return Err(DictEditError::SessionActive);
        }
        Ok(())
    }
}
