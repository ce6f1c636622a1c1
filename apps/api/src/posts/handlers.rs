//! Axum route handlers for the Posts API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::{AppError, AppJson};
use crate::posts::generator::generate_post;
use crate::posts::models::{GenerationRequest, GenerationResult, RefinementRequest, RefinementResult};
use crate::posts::refiner::refine_post;
use crate::posts::voice::{self, VoiceProfile, VoiceType, TONES};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VoiceCatalogResponse {
    pub voices: Vec<VoiceProfile>,
    pub tones: &'static [&'static str],
}

/// POST /api/v1/posts/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerationRequest>,
) -> Result<Json<GenerationResult>, AppError> {
    let result = generate_post(state.model.as_ref(), &request).await?;
    Ok(Json(result))
}

/// POST /api/v1/posts/refine
pub async fn handle_refine(
    State(state): State<AppState>,
    AppJson(request): AppJson<RefinementRequest>,
) -> Result<Json<RefinementResult>, AppError> {
    let result = refine_post(state.model.as_ref(), &request).await?;
    Ok(Json(result))
}

/// GET /api/v1/voices
pub async fn handle_list_voices() -> Json<VoiceCatalogResponse> {
    Json(VoiceCatalogResponse {
        voices: voice::catalog(),
        tones: TONES,
    })
}

/// GET /api/v1/voices/:voice
pub async fn handle_get_voice(Path(name): Path<String>) -> Result<Json<VoiceProfile>, AppError> {
    let voice_type = name
        .parse::<VoiceType>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    Ok(Json(voice::profile(voice_type)))
}
