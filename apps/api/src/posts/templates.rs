//! Template selector — static table of prompt templates keyed by voice.
//!
//! Built once on first use and never mutated afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::errors::AppError;
use crate::posts::prompts::{
    AUTHORITY_INSTRUCTIONS, AUTHORITY_MARKER, INVITATION_INSTRUCTIONS, INVITATION_MARKER,
    OUTPUT_FORMAT_RULES, RELEVANCE_INSTRUCTIONS, RELEVANCE_MARKER, STORYTELLING_INSTRUCTIONS,
    STORYTELLING_MARKER,
};
use crate::posts::voice::VoiceType;

/// A voice's full prompt template.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub voice: VoiceType,
    pub body: String,
    /// Final-instruction sentence inside `body`; the request block goes right before it.
    pub marker: &'static str,
    pub content_label: &'static str,
}

impl PromptTemplate {
    fn build(voice: VoiceType, instructions: &str, marker: &'static str) -> Self {
        Self {
            voice,
            body: format!("{instructions}\n\n{OUTPUT_FORMAT_RULES}\n\n{marker}"),
            marker,
            content_label: voice.content_label(),
        }
    }
}

static TEMPLATES: Lazy<HashMap<VoiceType, PromptTemplate>> = Lazy::new(|| {
    [
        (VoiceType::Storytelling, STORYTELLING_INSTRUCTIONS, STORYTELLING_MARKER),
        (VoiceType::Authority, AUTHORITY_INSTRUCTIONS, AUTHORITY_MARKER),
        (VoiceType::Relevance, RELEVANCE_INSTRUCTIONS, RELEVANCE_MARKER),
        (VoiceType::Invitation, INVITATION_INSTRUCTIONS, INVITATION_MARKER),
    ]
    .into_iter()
    .map(|(voice, instructions, marker)| {
        (voice, PromptTemplate::build(voice, instructions, marker))
    })
    .collect()
});

/// Returns the template for `voice`. A missing entry is an internal error,
/// never a silent default.
pub fn template_for(voice: VoiceType) -> Result<&'static PromptTemplate, AppError> {
    TEMPLATES.get(&voice).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!("unknown voice type: no template for '{voice}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_voice_has_a_template_with_marker_and_label() {
        for voice in VoiceType::ALL {
            let t = template_for(voice).unwrap();
            assert_eq!(t.voice, voice);
            assert!(!t.body.trim().is_empty());
            assert!(
                t.body.contains(t.marker),
                "{voice} template is missing its marker"
            );
            assert!(!t.content_label.is_empty());
        }
    }

    #[test]
    fn test_marker_appears_exactly_once() {
        for voice in VoiceType::ALL {
            let t = template_for(voice).unwrap();
            assert_eq!(t.body.matches(t.marker).count(), 1);
        }
    }

    #[test]
    fn test_templates_carry_all_section_headings() {
        for voice in VoiceType::ALL {
            let body = &template_for(voice).unwrap().body;
            for heading in [
                "TITLE:",
                "POST:",
                "HASHTAGS:",
                "ENGAGEMENT PREDICTION:",
                "QUALITY CHECK:",
            ] {
                assert!(body.contains(heading), "{voice} lacks {heading}");
            }
        }
    }

    #[test]
    fn test_template_mentions_its_content_label() {
        // Each voice's rules refer to the field the user's content arrives under.
        assert!(template_for(VoiceType::Storytelling).unwrap().body.contains("YOUR STORY"));
        assert!(template_for(VoiceType::Authority).unwrap().body.contains("YOUR INSIGHT"));
        assert!(template_for(VoiceType::Relevance).unwrap().body.contains("TOPIC"));
        assert!(template_for(VoiceType::Invitation).unwrap().body.contains("FOCUS"));
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let a = template_for(VoiceType::Authority).unwrap();
        let b = template_for(VoiceType::Authority).unwrap();
        assert!(std::ptr::eq(a, b));
    }
}
