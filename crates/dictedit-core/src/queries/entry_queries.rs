//! Sort/filter queries over dictionary entries

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::{ExError, Result};
use crate::model::{DictionaryValue, EntryField};

/// Marker prefix on a sort field requesting descending order
const DESCENDING_MARKER: char = '-';

/// View parameters supplied by the host table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Sort field, `-field` for descending; absent sorts by `order`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Accepted enabled states (`"1"`, `"0"`); absent accepts all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<BTreeSet<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn enabled<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled = Some(states.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Parsed sort request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: EntryField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: EntryField::Order,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSpec {
    /// Parse a host sort parameter
    ///
    /// `"value"` sorts ascending by value, `"-value"` descending. An absent
    /// or empty parameter sorts ascending by `order`; a bare `"-"` sorts
    /// descending by `order`.
    ///
    /// # Errors
    /// Returns `UnknownSortField` when the name is not an entry field.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let raw = raw.unwrap_or_default();
        let (name, direction) = match raw.strip_prefix(DESCENDING_MARKER) {
            Some(rest) => (rest, SortDirection::Descending),
            None => (raw, SortDirection::Ascending),
        };

        let field = if name.is_empty() {
            EntryField::Order
        } else {
            name.parse()?
        };

        Ok(Self { field, direction })
    }
}

/// Response envelope handed to the host table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResponse {
    pub success: bool,
    pub data: Vec<DictionaryValue>,
    /// Always `false`: the whole projection is one page
    pub pagination: bool,
    /// Stable error code when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResponse {
    pub fn from_result(result: Result<Vec<DictionaryValue>>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data,
                pagination: false,
                error: None,
            },
            Err(err) => Self {
                success: false,
                data: Vec::new(),
                pagination: false,
                error: Some(ExError::from(err).code().to_string()),
            },
        }
    }
}

/// Compute the current view of `entries`
///
/// Filtering keeps entries whose `enabled_flag()` is in `params.enabled`;
/// sorting follows [`SortSpec::parse`]. The input slice is never modified.
///
/// # Errors
/// Returns `UnknownSortField` for an unrecognised sort parameter.
pub fn query_entries(
    entries: &[DictionaryValue],
    params: &QueryParams,
) -> Result<Vec<DictionaryValue>> {
    let spec = SortSpec::parse(params.sort.as_deref())?;

    let mut view: Vec<DictionaryValue> = entries
        .iter()
        .filter(|entry| match &params.enabled {
            Some(states) => states.contains(entry.enabled_flag()),
            None => true,
        })
        .cloned()
        .collect();

    sort_entries(&mut view, spec);
    Ok(view)
}

/// Stable in-place sort by one field
///
/// Absent `order`/`description` values sort after present ones ascending,
/// and before them descending.
pub fn sort_entries(entries: &mut [DictionaryValue], spec: SortSpec) {
    match spec.direction {
        SortDirection::Ascending => entries.sort_by(|a, b| compare_field(a, b, spec.field)),
        SortDirection::Descending => entries.sort_by(|a, b| compare_field(b, a, spec.field)),
    }
}

fn compare_field(a: &DictionaryValue, b: &DictionaryValue, field: EntryField) -> Ordering {
    match field {
        EntryField::Key => a.key.cmp(&b.key),
        EntryField::Value => a.value.cmp(&b.value),
        EntryField::Description => {
            present_first(a.description.as_deref(), b.description.as_deref(), Ord::cmp)
        }
        EntryField::Order => present_first(a.order, b.order, f64::total_cmp),
        EntryField::Enabled => a.enabled.cmp(&b.enabled),
    }
}

fn present_first<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
