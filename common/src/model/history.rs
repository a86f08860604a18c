use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A past analysis as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub campaign_name: String,
    /// ISO-8601 timestamp, formatted with the browser locale when shown.
    pub created_at: String,
    #[serde(default)]
    pub input_data: Value,
    #[serde(default)]
    pub gpt_response: Value,
}
