use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::AppState;
use crate::models::submission::SubmissionDraft;
use crate::services::submission;
use crate::utils::error::{AppError, AppResult};
use crate::utils::helpers::json_response;

async fn create(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<SubmissionDraft>,
) -> AppResult<Json<serde_json::Value>> {
    let record = submission::begin(&state.directory, draft).await?;

    // The workflow continues in the background; callers poll the record.
    tokio::spawn(submission::run(
        state.directory.clone(),
        record.id,
        state.verifier_mode,
        state.verify_delay,
    ));

    Ok(json_response(&record))
}

async fn status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let record = state
        .directory
        .submission(id)
        .await
        .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

    Ok(json_response(&record))
}

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(create))
        .route("/:id", get(status))
        .with_state(state)
}
