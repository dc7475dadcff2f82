use axum::{Json, Router, extract::State, routing::get};
use std::sync::Arc;

use crate::api::AppState;
use crate::utils::error::AppResult;
use crate::utils::helpers::json_list;

async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<serde_json::Value>>> {
    Ok(json_list(state.directory.categories().to_vec()))
}

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(list)).with_state(state)
}
