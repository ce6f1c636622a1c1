//! Post refinement — rewrites an existing post according to user instructions.
//!
//! The reply is returned as the refined post with only whitespace trimmed;
//! there is no section parsing here.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{GenerationOptions, ModelError, TextModel};
use crate::posts::models::{RefinementRequest, RefinementResult};
use crate::posts::prompts::REFINE_PROMPT_TEMPLATE;

pub const REFINEMENT_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.7,
    max_output_tokens: 1024,
};

pub fn validate_refinement(request: &RefinementRequest) -> Result<(), AppError> {
    if request.refinement_instructions.trim().is_empty() {
        return Err(AppError::Validation(
            "refinementInstructions cannot be empty".to_string(),
        ));
    }
    if request.initial_post.trim().is_empty() {
        return Err(AppError::Validation(
            "initialPost cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn build_refine_prompt(request: &RefinementRequest) -> String {
    REFINE_PROMPT_TEMPLATE
        .replace("{initial_post}", request.initial_post.trim())
        .replace(
            "{refinement_instructions}",
            request.refinement_instructions.trim(),
        )
}

/// Refines `request.initial_post` with a single model call.
pub async fn refine_post(
    model: &dyn TextModel,
    request: &RefinementRequest,
) -> Result<RefinementResult, AppError> {
    validate_refinement(request)?;

    let prompt = build_refine_prompt(request);
    info!(
        "Refining post: post_chars={}, instruction_chars={}",
        request.initial_post.len(),
        request.refinement_instructions.len()
    );

    let raw = model
        .invoke(&prompt, REFINEMENT_OPTIONS)
        .await
        .map_err(|e| match e {
            ModelError::EmptyResponse => ModelError::EmptyRefinement,
            other => other,
        })?;

    let refined_post = raw.trim();
    if refined_post.is_empty() {
        return Err(ModelError::EmptyRefinement.into());
    }

    info!("Refined post: refined_chars={}", refined_post.len());

    Ok(RefinementResult {
        refined_post: refined_post.to_string(),
    })
}
