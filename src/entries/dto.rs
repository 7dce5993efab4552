use serde::{Deserialize, Serialize};

use super::repo_types::Entry;

/// `GET /entries?date=YYYY-MM-DD`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
}

/// `DELETE /entries?id=...`
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<String>,
}

/// Body of `POST /entries`. Everything is optional at the wire level so that
/// missing fields become validation errors rather than extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct CreateEntryRequest {
    pub name: Option<String>,
    /// Only a JSON number counts as supplied; anything else is estimated.
    pub calories: Option<serde_json::Value>,
    pub category: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntriesResponse {
    pub entries: Vec<Entry>,
    pub total_calories: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteEntryResponse {
    pub success: bool,
}
