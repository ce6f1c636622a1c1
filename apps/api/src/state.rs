use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn TextModel>,
    pub config: Config,
}
