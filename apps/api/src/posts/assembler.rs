//! Prompt assembler — splices the request into a voice template.

use crate::errors::AppError;
use crate::posts::models::GenerationRequest;
use crate::posts::templates::PromptTemplate;

/// Separates the request block from the template's marker sentence.
const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// The request fields as the model sees them.
fn request_block(content_label: &str, request: &GenerationRequest) -> String {
    format!(
        "FRAMEWORK: {}\nWORD COUNT: {}\nTONE: {}\n{}:\n{}",
        request.framework.trim(),
        request.word_count,
        request.tone.trim(),
        content_label,
        request.content.trim()
    )
}

/// Returns the template with the request block inserted once, immediately
/// before the marker sentence. Fails if the template does not contain its marker.
pub fn assemble_prompt(
    template: &PromptTemplate,
    request: &GenerationRequest,
) -> Result<String, AppError> {
    let at = template.body.find(template.marker).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "prompt template for '{}' is missing its final instruction marker",
            template.voice
        ))
    })?;

    let block = request_block(template.content_label, request);
    let (head, tail) = template.body.split_at(at);

    let mut prompt =
        String::with_capacity(template.body.len() + block.len() + BLOCK_SEPARATOR.len());
    prompt.push_str(head);
    prompt.push_str(&block);
    prompt.push_str(BLOCK_SEPARATOR);
    prompt.push_str(tail);
    Ok(prompt)
}
