use std::collections::{BTreeSet, HashSet};

use crate::errors::{DictEditError, Result};
use crate::model::DictionaryValue;
use crate::queries::{sort_entries, SortSpec};
use crate::rules::ValidatedEntry;

/// Spacing between orders assigned by resequencing and suggested for new entries
pub const DEFAULT_ORDER_STEP: f64 = 5.0;

/// Working copy of a dictionary's entries for one editing cycle
///
/// The buffer owns a value-wise clone of the source list, so nothing done
/// here is visible to the caller until the cycle commits. Keys are unique:
/// inserts and replacements only accept [`ValidatedEntry`] values, which were
/// checked against this buffer's contents.
///
/// Not thread-safe (no Arc/RwLock) - one editing cycle, one owner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagedBuffer {
    entries: Vec<DictionaryValue>,
}

impl StagedBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Clone `source` into a new buffer
    ///
    /// Keys stay unique: when `source` repeats a key, only its first entry is
    /// staged and the rest are dropped.
    pub fn from_source(source: &[DictionaryValue]) -> Self {
        let mut seen = HashSet::with_capacity(source.len());
        let mut entries = Vec::with_capacity(source.len());
        for entry in source {
            if seen.insert(entry.key.as_str()) {
                entries.push(entry.clone());
            } else {
                tracing::debug!(entry_key = %entry.key, "duplicate source key dropped");
            }
        }
        Self { entries }
    }

    /// Entries in buffer order
    pub fn entries(&self) -> &[DictionaryValue] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Option<&DictionaryValue> {
        self.entries.iter().find(|e| e.has_key(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.has_key(key))
    }

    /// Order to pre-fill for a new entry: `max(existing orders, 0) + step`
    pub fn suggested_order(&self, step: f64) -> f64 {
        let max = self
            .entries
            .iter()
            .filter_map(|e| e.order)
            .fold(0.0_f64, f64::max);
        max + step
    }

    /// Append a validated entry
    pub fn insert(&mut self, entry: ValidatedEntry) {
        let entry = entry.into_inner();
        tracing::debug!(entry_key = %entry.key, "buffer insert");
        self.entries.push(entry);
    }

    /// Replace the entry keyed `original_key` in place
    ///
    /// The replacement keeps the position of the entry it replaces.
    ///
    /// # Errors
    /// * `NotFound` - no entry has `original_key`; the buffer is unchanged
    pub fn replace(&mut self, original_key: &str, entry: ValidatedEntry) -> Result<()> {
        let index = self
            .position(original_key)
            .ok_or_else(|| DictEditError::NotFound {
                key: original_key.to_string(),
            })?;

        let entry = entry.into_inner();
        tracing::debug!(
            original_key = original_key,
            entry_key = %entry.key,
            index,
            "buffer replace"
        );
        self.entries[index] = entry;
        Ok(())
    }

    /// Remove the entry keyed `key`, returning it if it was present
    pub fn remove(&mut self, key: &str) -> Option<DictionaryValue> {
        let removed = self.position(key).map(|index| self.entries.remove(index));
        tracing::debug!(entry_key = key, found = removed.is_some(), "buffer remove");
        removed
    }

    /// Remove every entry whose key is in `keys`; absent keys are skipped
    ///
    /// Returns the number of entries removed.
    pub fn remove_many(&mut self, keys: &BTreeSet<String>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !keys.contains(&e.key));
        let removed = before - self.entries.len();
        tracing::debug!(requested = keys.len(), removed, "buffer batch remove");
        removed
    }

    /// Renumber orders to `step, 2*step, 3*step, ...`
    ///
    /// Entries are first stably sorted by ascending `order` (ties keep their
    /// current relative position, absent orders go last) and the buffer
    /// keeps that sorted arrangement.
    pub fn resequence(&mut self, step: f64) {
        sort_entries(&mut self.entries, SortSpec::default());
        for (rank, entry) in self.entries.iter_mut().enumerate() {
            entry.order = Some(step * (rank as f64 + 1.0));
        }
        tracing::debug!(len = self.entries.len(), step, "buffer resequence");
    }

    /// Give up ownership of the entries
    pub fn into_entries(self) -> Vec<DictionaryValue> {
        self.entries
    }
}
