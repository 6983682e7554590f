use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ModelError;

/// A titled text record with a store-assigned unique identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

impl Post {
    /// Apply a partial update. Present fields replace stored values, absent
    /// fields are left unchanged. The id never changes.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// Validated create payload.
///
/// Decoded from loose JSON rather than a derived struct so that every bad
/// field can be reported at once: a field that is missing, not a string, or
/// empty ends up in the `MissingFields` list (`title` before `content`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        let title = string_field(value, "title");
        let content = string_field(value, "content");
        match (title, content) {
            (Some(title), Some(content)) => Ok(Self { title, content }),
            (title, content) => {
                let mut missing = Vec::new();
                if title.is_none() {
                    missing.push("title".to_string());
                }
                if content.is_none() {
                    missing.push("content".to_string());
                }
                Err(ModelError::MissingFields(missing))
            }
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Partial update payload for `PUT`. Only `title`/`content` are read, so
/// unknown fields (notably a client-sent `id`) are silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    /// Decode from loose JSON. An absent field stays `None`; a field that is
    /// present but not a JSON string is reported in `MissingFields` (`title`
    /// before `content`). An empty string is a valid replacement value here,
    /// unlike on create.
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        let mut invalid = Vec::new();
        let title = optional_string_field(value, "title", &mut invalid);
        let content = optional_string_field(value, "content", &mut invalid);
        if invalid.is_empty() {
            Ok(Self { title, content })
        } else {
            Err(ModelError::MissingFields(invalid))
        }
    }
}

fn optional_string_field(value: &Value, key: &str, invalid: &mut Vec<String>) -> Option<String> {
    match value.get(key) {
        None => None,
        Some(v) => match v.as_str() {
            Some(s) => Some(s.to_owned()),
            None => {
                invalid.push(key.to_string());
                None
            }
        },
    }
}
