//! Candidate validation
//!
//! A candidate entry is checked field by field and then against the buffer
//! for key uniqueness. Validation never rewrites the candidate: on success
//! the same value comes back wrapped in [`ValidatedEntry`], which is the only
//! form the buffer accepts for inserts and replacements.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{DictEditError, Result};
use crate::model::{DictionaryValue, EntryField};

const KEY_PATTERN: &str = r"^[A-Za-z0-9/_-]+$";

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(KEY_PATTERN).expect("key pattern is a valid regex"))
}

/// A candidate that passed [`validate`] against a specific buffer state
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEntry(DictionaryValue);

impl ValidatedEntry {
    pub fn entry(&self) -> &DictionaryValue {
        &self.0
    }

    pub fn into_inner(self) -> DictionaryValue {
        self.0
    }
}

/// Validate a candidate entry against the current buffer contents
///
/// Checks run in a fixed order and the first failure is returned:
///
/// 1. `key` is non-empty
/// 2. `key` matches `^[A-Za-z0-9/_-]+$`
/// 3. `value` is non-empty
/// 4. `order`, when present, is finite and not negative
/// 5. no entry in `buffer` uses the same key, unless that key is `exclude_key`
///
/// `exclude_key` is the key of the entry being replaced in Update mode, so an
/// entry may keep its own key.
///
/// # Errors
/// * `FieldRequired` - empty `key` or `value`
/// * `FieldPattern` - `key` contains characters outside the allowed set
/// * `FieldRange` - `order` is negative, NaN or infinite
/// * `DuplicateKey` - another entry already uses `candidate.key`
pub fn validate(
    candidate: DictionaryValue,
    buffer: &[DictionaryValue],
    exclude_key: Option<&str>,
) -> Result<ValidatedEntry> {
    if let Some(err) = field_errors(&candidate).into_iter().next() {
        return Err(err);
    }

    let clashes = buffer.iter().any(|existing| {
        existing.has_key(&candidate.key) && Some(existing.key.as_str()) != exclude_key
    });
    if clashes {
        return Err(DictEditError::DuplicateKey {
            key: candidate.key,
        });
    }

    Ok(ValidatedEntry(candidate))
}

/// Run only the field-level checks and report every failure
///
/// Hosts use this to mark all invalid form fields at once. An empty vector
/// means the candidate is well-formed; uniqueness is not checked here.
pub fn validate_fields(candidate: &DictionaryValue) -> Vec<DictEditError> {
    field_errors(candidate)
}

fn field_errors(candidate: &DictionaryValue) -> Vec<DictEditError> {
    let mut errors = Vec::new();

    if candidate.key.is_empty() {
        errors.push(DictEditError::FieldRequired {
            field: EntryField::Key,
        });
    } else if !key_pattern().is_match(&candidate.key) {
        errors.push(DictEditError::FieldPattern {
            field: EntryField::Key,
        });
    }

    if candidate.value.is_empty() {
        errors.push(DictEditError::FieldRequired {
            field: EntryField::Value,
        });
    }

    if let Some(order) = candidate.order {
        if !order.is_finite() || order < 0.0 {
            errors.push(DictEditError::FieldRange {
                field: EntryField::Order,
            });
        }
    }

    errors
}
