use axum::{Json, http::HeaderMap};
use serde::Serialize;

/// Header carrying the voter identity for the vote ledger. Clients without
/// one share the anonymous bucket.
pub const VOTER_ID_HEADER: &str = "x-voter-id";

pub fn to_json<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).expect("Failed to serialize to JSON")
}

pub fn json_response<T: Serialize>(value: &T) -> Json<serde_json::Value> {
    Json(to_json(value))
}

pub fn json_list<T: Serialize>(items: Vec<T>) -> Json<Vec<serde_json::Value>> {
    Json(items.into_iter().map(|item| to_json(&item)).collect())
}

pub fn extract_voter(headers: &HeaderMap) -> String {
    headers
        .get(VOTER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(anonymous_voter)
}

pub fn anonymous_voter() -> String {
    "anonymous".to_string()
}
