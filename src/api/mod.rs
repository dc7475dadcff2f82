pub mod categories;
pub mod servers;
pub mod submissions;

use axum::Router;
use std::sync::Arc;
use std::time::Duration;

use crate::services::verifier::VerifierMode;
use crate::store::Directory;

pub struct AppState {
    pub directory: Arc<Directory>,
    pub verifier_mode: VerifierMode,
    pub verify_delay: Duration,
}

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/servers", servers::routes(state.clone()))
        .nest("/categories", categories::routes(state.clone()))
        .nest("/submissions", submissions::routes(state))
}
