//! Destructive-action confirmation
//!
//! Removing entries is never done straight from a user's click: the host
//! shows a prompt first and only then calls the buffer. This module models
//! that prompt as a synchronous collaborator, the `ConfirmationGate`, which
//! is asked before a remove or batch remove and whose answer decides whether
//! the mutation runs at all.

use std::collections::BTreeSet;

use crate::model::DictionaryValue;

/// What the user is being asked to confirm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationRequest {
    /// Remove a single entry, identified to the user by its value
    RemoveOne { key: String, value: String },
    /// Remove every selected entry
    RemoveSelected { keys: BTreeSet<String> },
}

impl ConfirmationRequest {
    pub fn remove_one(entry: &DictionaryValue) -> Self {
        ConfirmationRequest::RemoveOne {
            key: entry.key.clone(),
            value: entry.value.clone(),
        }
    }

    pub fn remove_selected(keys: BTreeSet<String>) -> Self {
        ConfirmationRequest::RemoveSelected { keys }
    }

    /// Prompt text for the host to display
    pub fn message(&self) -> String {
        match self {
            ConfirmationRequest::RemoveOne { value, .. } => format!("Delete \"{}\"?", value),
            ConfirmationRequest::RemoveSelected { keys } => {
                format!("Delete the {} selected records?", keys.len())
            }
        }
    }
}

/// Gate consulted before a destructive buffer operation
///
/// # Returns
/// * `true` - the user confirmed; the mutation runs
/// * `false` - the user declined; nothing changes
pub trait ConfirmationGate {
    fn confirm(&self, request: &ConfirmationRequest) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: Fn(&ConfirmationRequest) -> bool,
{
    fn confirm(&self, request: &ConfirmationRequest) -> bool {
        self(request)
    }
}

/// Confirms everything (non-interactive hosts, `--yes`)
///
/// # Example
/// ```
/// use dictedit_core::policy::{AlwaysConfirm, ConfirmationGate, ConfirmationRequest};
/// use std::collections::BTreeSet;
///
/// let request = ConfirmationRequest::remove_selected(BTreeSet::new());
/// assert!(AlwaysConfirm.confirm(&request));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmationGate for AlwaysConfirm {
    fn confirm(&self, _request: &ConfirmationRequest) -> bool {
        true
    }
}

/// Declines everything (tests that verify a declined prompt changes nothing)
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl ConfirmationGate for NeverConfirm {
    fn confirm(&self, _request: &ConfirmationRequest) -> bool {
        false
    }
}
