use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::AppState;
use crate::services::verifier::{self, VerifierMode};
use crate::store::Directory;
use crate::store::votes::VoteLedger;

pub async fn register_routes() -> Router {
    let votes_path = std::env::var("VOTES_PATH").unwrap_or_else(|_| "votes.json".to_string());
    let ledger = VoteLedger::load(votes_path.into());

    let directory =
        Arc::new(Directory::from_fixtures(ledger).expect("Failed to load directory fixtures"));

    tracing::info!(
        "Directory loaded: {} servers, {} categories",
        directory.server_count().await,
        directory.categories().len()
    );

    let verifier_mode = VerifierMode::from_env();
    let verify_delay = verifier::configured_delay();
    tracing::info!(
        "Verifier configured: {:?} mode, {}ms simulated latency",
        verifier_mode,
        verify_delay.as_millis()
    );

    let state = Arc::new(AppState {
        directory,
        verifier_mode,
        verify_delay,
    });

    let api_routes = crate::api::routes(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
