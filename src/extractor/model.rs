use serde::{Deserialize, Serialize};

/// Metadata read off a fetched page. Absent elements are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityRecord {
    pub status_code: u16,
    pub h1: String,
    pub title: String,
    pub description: String,
}

/// Collapse runs of whitespace (newlines included) into single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
