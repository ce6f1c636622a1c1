use serde::{Deserialize, Serialize};

use crate::posts::voice::VoiceType;

pub const MIN_WORD_COUNT: u32 = 100;
pub const MAX_WORD_COUNT: u32 = 1000;
/// Minimum content length in characters (Unicode scalar values), counted
/// after trimming. Stricter than counting the raw body: leading and trailing
/// whitespace never counts toward the minimum.
pub const MIN_CONTENT_CHARS: usize = 50;

/// Request body for post generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub voice_type: VoiceType,
    /// Free-text framework name, e.g. "BAB" or "PAS".
    pub framework: String,
    pub word_count: u32,
    pub tone: String,
    pub content: String,
}

/// The five sections extracted from the model's reply. Any may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub title: String,
    pub post: String,
    pub hashtags: String,
    pub engagement_prediction: String,
    pub quality_check: String,
}

impl GenerationResult {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.post.is_empty()
            && self.hashtags.is_empty()
            && self.engagement_prediction.is_empty()
            && self.quality_check.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementRequest {
    pub initial_post: String,
    pub refinement_instructions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementResult {
    pub refined_post: String,
}
