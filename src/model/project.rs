//! Project catalog data model

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Separator placed between field values when building the search text
pub const FIELD_JOIN: &str = "\n";

/// One entry of the project catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    /// Year label (JSON strings and numbers are both accepted)
    #[serde(deserialize_with = "year_label")]
    pub year: String,
    /// Remaining fields, in document order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectRecord {
    /// All field values joined by [`FIELD_JOIN`]
    pub fn search_text(&self) -> String {
        let mut parts: Vec<String> = vec![
            self.title.clone(),
            self.image.clone(),
            self.description.clone(),
            self.year.clone(),
        ];
        parts.extend(self.extra.values().map(value_text));
        parts.join(FIELD_JOIN)
    }

    /// Case-insensitive substring match against every field value
    pub fn matches(&self, query: &str) -> bool {
        self.search_text()
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

fn year_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected year as string or number, got {}",
            other
        ))),
    }
}
