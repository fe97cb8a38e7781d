use dictedit_core_types::CycleId;
use thiserror::Error;

use crate::model::EntryField;

/// Result type alias using DictEditError
pub type Result<T> = std::result::Result<T, DictEditError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that hosts can match on without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Field validation
    FieldRequired,
    FieldPattern,
    FieldRange,

    // Buffer integrity
    DuplicateKey,
    NotFound,

    // Query
    InvalidQuery,

    // Edit session
    SessionActive,
    NoActiveSession,

    // Cycle
    ReadOnly,
    InvalidOrderStep,

    // Integration
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::FieldRequired => "ERR_FIELD_REQUIRED",
            ExErrorKind::FieldPattern => "ERR_FIELD_PATTERN",
            ExErrorKind::FieldRange => "ERR_FIELD_RANGE",
            ExErrorKind::DuplicateKey => "ERR_DUPLICATE_KEY",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidQuery => "ERR_INVALID_QUERY",
            ExErrorKind::SessionActive => "ERR_SESSION_ACTIVE",
            ExErrorKind::NoActiveSession => "ERR_NO_ACTIVE_SESSION",
            ExErrorKind::ReadOnly => "ERR_READ_ONLY",
            ExErrorKind::InvalidOrderStep => "ERR_INVALID_ORDER_STEP",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus whatever context the failing operation
/// knew about: the entry key, the offending field and the editing cycle.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    key: Option<String>,
    field: Option<EntryField>,
    cycle_id: Option<CycleId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            key: None,
            field: None,
            cycle_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entry key context
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add field context
    pub fn with_field(mut self, field: EntryField) -> Self {
        self.field = Some(field);
        self
    }

    /// Add editing cycle context
    pub fn with_cycle_id(mut self, cycle_id: CycleId) -> Self {
        self.cycle_id = Some(cycle_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn field(&self) -> Option<EntryField> {
        self.field
    }

    pub fn cycle_id(&self) -> Option<&CycleId> {
        self.cycle_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key: {})", key)?;
        }
        if let Some(cycle_id) = &self.cycle_id {
            write!(f, " (cycle: {})", cycle_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for staged dictionary editing
///
/// Every variant is recoverable: none of them ends the editing cycle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DictEditError {
    // ===== Field Validation =====
    /// A required field is empty
    #[error("Field '{field}' is required")]
    FieldRequired { field: EntryField },

    /// A field does not match its allowed pattern
    #[error("Field '{field}' may only contain letters, digits, '_', '-' and '/'")]
    FieldPattern { field: EntryField },

    /// A numeric field is negative or not finite
    #[error("Field '{field}' must be a finite number not less than 0")]
    FieldRange { field: EntryField },

    // ===== Buffer Integrity =====
    /// Another entry in the buffer already uses this key
    #[error("Key already exists: {key}")]
    DuplicateKey { key: String },

    /// The targeted entry is no longer in the buffer
    #[error("Entry not found: {key}")]
    NotFound { key: String },

    // ===== Query =====
    /// Sort parameter names a field entries do not have
    #[error("Unknown sort field: {field}")]
    UnknownSortField { field: String },

    // ===== Edit Session =====
    /// An entry editor is already open
    #[error("An entry edit session is already active")]
    SessionActive,

    /// Submit or cancel without an open entry editor
    #[error("No entry edit session is active")]
    NoActiveSession,

    // ===== Cycle =====
    /// The editing cycle was opened without edit rights
    #[error("Editing cycle is read-only")]
    ReadOnly,

    /// Order step must be a finite number greater than 0
    #[error("Order step must be a finite number greater than 0, got {step}")]
    InvalidOrderStep { step: f64 },

    // ===== Generic =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl DictEditError {
    /// True for failures of a candidate entry, which keep the editor open
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DictEditError::FieldRequired { .. }
                | DictEditError::FieldPattern { .. }
                | DictEditError::FieldRange { .. }
                | DictEditError::DuplicateKey { .. }
        )
    }
}

impl From<DictEditError> for ExError {
    fn from(err: DictEditError) -> Self {
        let message = err.to_string();
        match err {
            DictEditError::FieldRequired { field } => ExError::new(ExErrorKind::FieldRequired)
                .with_field(field)
                .with_message(message),
            DictEditError::FieldPattern { field } => ExError::new(ExErrorKind::FieldPattern)
                .with_field(field)
                .with_message(message),
            DictEditError::FieldRange { field } => ExError::new(ExErrorKind::FieldRange)
                .with_field(field)
                .with_message(message),
            DictEditError::DuplicateKey { key } => ExError::new(ExErrorKind::DuplicateKey)
                .with_field(EntryField::Key)
                .with_key(key)
                .with_message(message),
            DictEditError::NotFound { key } => ExError::new(ExErrorKind::NotFound)
                .with_key(key)
                .with_message(message),
            DictEditError::UnknownSortField { .. } => ExError::new(ExErrorKind::InvalidQuery)
                .with_op("query")
                .with_message(message),
            DictEditError::SessionActive => {
                ExError::new(ExErrorKind::SessionActive).with_message(message)
            }
            DictEditError::NoActiveSession => {
                ExError::new(ExErrorKind::NoActiveSession).with_message(message)
            }
            DictEditError::ReadOnly => ExError::new(ExErrorKind::ReadOnly).with_message(message),
            DictEditError::InvalidOrderStep { .. } => {
                ExError::new(ExErrorKind::InvalidOrderStep).with_message(message)
            }
            DictEditError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to DictEditError
impl From<serde_json::Error> for DictEditError {
    fn from(err: serde_json::Error) -> Self {
        DictEditError::Serialization {
            message: err.to_string(),
        }
    }
}
