use serde::{Deserialize, Deserializer, Serialize};

use crate::services::format::format_score;

/// One ranked emoji returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub emoji: String,
    /// Relevance in `0.0..=1.0`, higher is better
    pub score: f64,
}

impl SearchResult {
    pub fn new(emoji: impl Into<String>, score: f64) -> Self {
        Self {
            emoji: emoji.into(),
            score,
        }
    }

    /// Label shown under the emoji on its tile
    pub fn score_label(&self) -> String {
        format_score(self.score)
    }
}

/// Body of a successful `GET /search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Absent and `null` both mean no results
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<SearchResult>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SearchResult>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<SearchResult>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Optional body of a failed `GET /search`
///
/// `detail` is usually a string, but validation errors carry a list of
/// objects, so any JSON value is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Text appended to the status line: strings bare, anything else as
    /// compact JSON
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(detail) => Some(detail.clone()),
            other => Some(other.to_string()),
        }
    }
}
