//! Frontend Models
//!
//! Data handed to the components by their caller.

use serde::{Deserialize, Serialize};

/// Identifier of a todo record, opaque to the row
pub type TodoId = u32;

/// A single todo entry (owned by the caller, read-only for the row)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_checked")]
    pub checked: bool,
}

impl TodoRecord {
    pub fn new(id: TodoId, text: impl Into<String>, checked: bool) -> Self {
        Self {
            id,
            text: text.into(),
            checked,
        }
    }
}

// Malformed fields degrade to empty/falsy instead of failing the whole record.

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_checked<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(matches!(value, serde_json::Value::Bool(true)))
}
