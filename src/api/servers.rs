use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{get, post},
};
use itertools::Itertools;
use serde::Deserialize;
use std::sync::Arc;

use crate::api::AppState;
use crate::models::server::ModerationStatus;
use crate::services::catalog;
use crate::utils::error::{AppError, AppResult};
use crate::utils::helpers::{extract_voter, json_list, json_response};

const DEFAULT_PER_PAGE: usize = 5;
const MAX_PER_PAGE: usize = 50;

#[derive(Deserialize)]
struct SearchQuery {
    q: Option<String>,
    categories: Option<String>,
    status: Option<String>,
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<usize>,
    per_page: Option<usize>,
}

async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<serde_json::Value>>> {
    let servers = state.directory.servers().await;
    Ok(json_list(servers))
}

async fn ranked(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);

    let servers = state.directory.servers().await;
    let items = catalog::paginate(&servers, page, per_page);

    Ok(Json(serde_json::json!({
        "servers": items,
        "page": page,
        "per_page": per_page,
        "total": servers.len(),
        "total_pages": catalog::total_pages(servers.len(), per_page),
    })))
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<serde_json::Value>>> {
    let q = query.q.unwrap_or_default();

    let categories: Vec<String> = query
        .categories
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .unique()
        .collect();

    let status = match query.status.as_deref() {
        None | Some("") | Some("ALL") => None,
        Some(raw) => Some(
            raw.parse::<ModerationStatus>()
                .map_err(AppError::BadRequest)?,
        ),
    };

    let servers = state.directory.servers().await;
    Ok(json_list(catalog::search(&servers, &q, &categories, status)))
}

async fn detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let server = state
        .directory
        .server_by_id(&id)
        .await
        .ok_or_else(|| AppError::NotFound("Server not found".to_string()))?;

    Ok(json_response(&server))
}

async fn vote(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let voter = extract_voter(&headers);

    let (votes, counted) = state
        .directory
        .record_vote(&voter, &id)
        .await
        .ok_or_else(|| AppError::NotFound("Server not found".to_string()))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "votes": votes,
        "counted": counted,
    })))
}

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list))
        .route("/ranked", get(ranked))
        .route("/search", get(search))
        .route("/:id", get(detail))
        .route("/:id/vote", post(vote))
        .with_state(state)
}
