//! Post generation — orchestrates the generation pipeline.
//!
//! Flow: validate → select template → assemble prompt → model call → parse sections.
//!
//! Validation happens before any model call. Parse degradation is never an
//! error; see `parser::parse_sections`.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::{GenerationOptions, TextModel};
use crate::posts::assembler::assemble_prompt;
use crate::posts::models::{
    GenerationRequest, GenerationResult, MAX_WORD_COUNT, MIN_CONTENT_CHARS, MIN_WORD_COUNT,
};
use crate::posts::parser::parse_sections;
use crate::posts::templates::template_for;
use crate::posts::voice::is_known_framework;

pub const GENERATION_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.8,
    max_output_tokens: 2048,
};

/// Checks request bounds. Runs before anything else in the pipeline.
pub fn validate_generation(request: &GenerationRequest) -> Result<(), AppError> {
    if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&request.word_count) {
        return Err(AppError::Validation(format!(
            "wordCount must be between {MIN_WORD_COUNT} and {MAX_WORD_COUNT}, got {}",
            request.word_count
        )));
    }

    let content_chars = request.content.trim().chars().count();
    if content_chars < MIN_CONTENT_CHARS {
        return Err(AppError::Validation(format!(
            "content must be at least {MIN_CONTENT_CHARS} characters, got {content_chars}"
        )));
    }

    if request.framework.trim().is_empty() {
        return Err(AppError::Validation("framework cannot be empty".to_string()));
    }

    if request.tone.trim().is_empty() {
        return Err(AppError::Validation("tone cannot be empty".to_string()));
    }

    Ok(())
}

/// Generates a post for `request` with a single model call.
pub async fn generate_post(
    model: &dyn TextModel,
    request: &GenerationRequest,
) -> Result<GenerationResult, AppError> {
    validate_generation(request)?;

    if !is_known_framework(request.voice_type, &request.framework) {
        debug!(
            "Framework '{}' is not in the {} catalog; passing it through",
            request.framework.trim(),
            request.voice_type
        );
    }

    let template = template_for(request.voice_type)?;
    let prompt = assemble_prompt(template, request)?;

    info!(
        "Generating {} post: framework={}, word_count={}, tone={}, prompt_chars={}",
        request.voice_type,
        request.framework.trim(),
        request.word_count,
        request.tone.trim(),
        prompt.len()
    );

    let raw = model.invoke(&prompt, GENERATION_OPTIONS).await?;
    let result = parse_sections(&raw);

    info!(
        "Generated {} post: raw_chars={}, post_chars={}",
        request.voice_type,
        raw.len(),
        result.post.len()
    );

    Ok(result)
}
