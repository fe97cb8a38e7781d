use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DictEditError;

/// Named fields of a [`DictionaryValue`](super::DictionaryValue)
///
/// Used both to label validation failures and to name the column a query
/// sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryField {
    Key,
    Value,
    Description,
    Order,
    Enabled,
}

impl EntryField {
    /// Wire name of the field, as it appears in entry JSON and sort parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::Key => "key",
            EntryField::Value => "value",
            EntryField::Description => "description",
            EntryField::Order => "order",
            EntryField::Enabled => "enabled",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryField {
    type Err = DictEditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "key" => Ok(EntryField::Key),
            "value" => Ok(EntryField::Value),
            "description" => Ok(EntryField::Description),
            "order" => Ok(EntryField::Order),
            "enabled" => Ok(EntryField::Enabled),
            other => Err(DictEditError::UnknownSortField {
                field: other.to_string(),
            }),
        }
    }
}
