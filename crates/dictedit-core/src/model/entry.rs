use serde::{Deserialize, Serialize};

/// A single key/value record of a dictionary
///
/// Entries are plain values: the buffer replaces whole entries and never
/// edits fields in place. Identity within a buffer is the `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryValue {
    /// Unique key within the buffer (`^[A-Za-z0-9/_-]+$`)
    pub key: String,

    /// Display value, required but unconstrained
    pub value: String,

    /// Free-form remark
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Default sort key; not unique
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,

    /// Whether the value is active; hosts may send it as `0`/`1`
    #[serde(default = "enabled_by_default", deserialize_with = "loose_flag::deserialize")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl DictionaryValue {
    /// Create an enabled entry with no description and no order
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            description: None,
            order: None,
            enabled: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_order(mut self, order: f64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Check whether this entry is identified by `key`
    pub fn has_key(&self, key: &str) -> bool {
        self.key == key
    }

    /// Normalized enabled state used by query filters: `"1"` or `"0"`
    pub fn enabled_flag(&self) -> &'static str {
        if self.enabled {
            "1"
        } else {
            "0"
        }
    }

    /// Identity of the entry as a host table row: key followed by order
    pub fn row_key(&self) -> String {
        match self.order {
            Some(order) => format!("{}{}", self.key, format_order(order)),
            None => self.key.clone(),
        }
    }
}

fn format_order(order: f64) -> String {
    if order.fract() == 0.0 && order.abs() < 1e15 {
        format!("{}", order as i64)
    } else {
        order.to_string()
    }
}

/// Accepts `true`/`false` as well as numeric `0`/`1` flags
mod loose_flag {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Float(f64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Flag::deserialize(deserializer)? {
            Flag::Bool(b) => b,
            Flag::Int(n) => n != 0,
            Flag::Float(n) => n != 0.0,
        })
    }
}
