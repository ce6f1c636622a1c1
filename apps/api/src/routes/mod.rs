pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::posts::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Posts API
        .route("/api/v1/posts/generate", post(handlers::handle_generate))
        .route("/api/v1/posts/refine", post(handlers::handle_refine))
        // Voice catalog
        .route("/api/v1/voices", get(handlers::handle_list_voices))
        .route("/api/v1/voices/:voice", get(handlers::handle_get_voice))
        .with_state(state)
}
