//! Output section parser — splits the model's reply into the five result fields.
//!
//! Headings are expected in a fixed order: TITLE, POST, HASHTAGS,
//! ENGAGEMENT PREDICTION, QUALITY CHECK. A heading counts only at the start of
//! a line (markdown `#`/`**` decoration allowed), case-insensitive, and either
//! followed by a colon or alone on its line.
//!
//! Fallback: when no section at all could be extracted, the whole reply
//! (trimmed) becomes `post`. When some sections were found but `post` was not,
//! the partial result is returned unchanged.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::posts::models::GenerationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Post,
    Hashtags,
    EngagementPrediction,
    QualityCheck,
}

impl Section {
    fn slot(self, result: &mut GenerationResult) -> &mut String {
        match self {
            Section::Title => &mut result.title,
            Section::Post => &mut result.post,
            Section::Hashtags => &mut result.hashtags,
            Section::EngagementPrediction => &mut result.engagement_prediction,
            Section::QualityCheck => &mut result.quality_check,
        }
    }
}

fn heading_regex(name: &str) -> Regex {
    let pattern = format!(
        r"(?im)^[ \t]*(?:#{{1,6}}[ \t]*)?(?:\*\*)?{name}(?:\*\*)?[ \t]*(?::(?:\*\*)?|\r?$)"
    );
    Regex::new(&pattern).expect("section heading pattern is valid")
}

/// Headings in the order the model is told to emit them.
static HEADINGS: Lazy<Vec<(Section, Regex)>> = Lazy::new(|| {
    vec![
        (Section::Title, heading_regex("TITLE")),
        (Section::Post, heading_regex("POST")),
        (Section::Hashtags, heading_regex("HASHTAGS")),
        (
            Section::EngagementPrediction,
            heading_regex(r"ENGAGEMENT[ \t]+PREDICTION"),
        ),
        (Section::QualityCheck, heading_regex(r"QUALITY[ \t]+CHECK")),
    ]
});

/// A heading found in the reply: its section, where the heading starts, where its text starts.
struct Located {
    section: Section,
    heading_start: usize,
    text_start: usize,
}

/// Finds each heading in order with one forward scan. A heading that is
/// absent is skipped and the scan resumes from the last heading found.
fn locate_headings(raw: &str) -> Vec<Located> {
    HEADINGS
        .iter()
        .fold((Vec::new(), 0usize), |(mut found, cursor), (section, re)| {
            match re.find_at(raw, cursor) {
                Some(m) => {
                    found.push(Located {
                        section: *section,
                        heading_start: m.start(),
                        text_start: m.end(),
                    });
                    (found, m.end())
                }
                None => (found, cursor),
            }
        })
        .0
}

/// Splits a raw model reply into a `GenerationResult`.
pub fn parse_sections(raw: &str) -> GenerationResult {
    let located = locate_headings(raw);
    let mut result = GenerationResult::default();

    for (i, heading) in located.iter().enumerate() {
        let text_end = located
            .get(i + 1)
            .map(|next| next.heading_start)
            .unwrap_or(raw.len());
        *heading.section.slot(&mut result) = raw[heading.text_start..text_end].trim().to_string();
    }

    if result.is_empty() {
        warn!(
            "No sections found in model output ({} chars); using the whole reply as the post",
            raw.len()
        );
        result.post = raw.trim().to_string();
    } else if result.post.is_empty() {
        warn!("Model output has sections but no POST section; returning partial result");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_reply_parses_every_section() {
        let raw = "TITLE:\nT\nPOST:\nP\nHASHTAGS:\nH\nENGAGEMENT PREDICTION:\nE\nQUALITY CHECK:\nQ";
        let result = parse_sections(raw);
        assert_eq!(
            result,
            GenerationResult {
                title: "T".to_string(),
                post: "P".to_string(),
                hashtags: "H".to_string(),
                engagement_prediction: "E".to_string(),
                quality_check: "Q".to_string(),
            }
        );
    }

    #[test]
    fn test_reply_without_headings_falls_back_to_post() {
        let result = parse_sections("Just a plain post with no headings.");
        assert_eq!(
            result,
            GenerationResult {
                post: "Just a plain post with no headings.".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_fallback_trims_surrounding_whitespace() {
        let result = parse_sections("\n\n  Line one.\nLine two.  \n");
        assert_eq!(result.post, "Line one.\nLine two.");
        assert!(result.title.is_empty());
    }

    #[test]
    fn test_only_post_heading() {
        let result = parse_sections("POST:\nHello");
        assert_eq!(
            result,
            GenerationResult {
                post: "Hello".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_partial_match_without_post_is_not_rescued() {
        let raw = "TITLE:\nMy title\nHASHTAGS:\n#rust #career";
        let result = parse_sections(raw);
        assert_eq!(result.title, "My title");
        assert_eq!(result.hashtags, "#rust #career");
        assert!(result.post.is_empty(), "fallback must not trigger");
    }

    #[test]
    fn test_headings_are_case_insensitive() {
        let raw = "title: Lower\npost: Body text\nhashtags: #a\nEngagement Prediction: Good\nQuality Check: Fine";
        let result = parse_sections(raw);
        assert_eq!(result.title, "Lower");
        assert_eq!(result.post, "Body text");
        assert_eq!(result.hashtags, "#a");
        assert_eq!(result.engagement_prediction, "Good");
        assert_eq!(result.quality_check, "Fine");
    }

    #[test]
    fn test_headings_without_colon_on_their_own_line() {
        let raw = "TITLE\nNo colon title\nPOST\nBody\nHASHTAGS\n#x\nENGAGEMENT PREDICTION\nMedium\nQUALITY CHECK\nAll good";
        let result = parse_sections(raw);
        assert_eq!(result.title, "No colon title");
        assert_eq!(result.post, "Body");
        assert_eq!(result.hashtags, "#x");
        assert_eq!(result.engagement_prediction, "Medium");
        assert_eq!(result.quality_check, "All good");
    }

    #[test]
    fn test_markdown_decorated_headings() {
        let raw = "**TITLE:** Shipping small\n\n## POST\nWe shipped.\n\n**HASHTAGS**:\n#ship\n\n### ENGAGEMENT PREDICTION:\nHigh\n\n**QUALITY CHECK:**\n- hook ok";
        let result = parse_sections(raw);
        assert_eq!(result.title, "Shipping small");
        assert_eq!(result.post, "We shipped.");
        assert_eq!(result.hashtags, "#ship");
        assert_eq!(result.engagement_prediction, "High");
        assert_eq!(result.quality_check, "- hook ok");
    }

    #[test]
    fn test_heading_words_inside_text_are_not_headings() {
        let raw = "TITLE:\nT\nPOST:\nPost-mortems taught me more than launches.\nThe title of this lesson: ship.\nHASHTAGS:\n#h";
        let result = parse_sections(raw);
        assert_eq!(
            result.post,
            "Post-mortems taught me more than launches.\nThe title of this lesson: ship."
        );
        assert_eq!(result.hashtags, "#h");
    }

    #[test]
    fn test_missing_middle_section_ends_at_next_found_heading() {
        let raw = "TITLE:\nT\nPOST:\nP\nQUALITY CHECK:\nQ";
        let result = parse_sections(raw);
        assert_eq!(result.post, "P");
        assert!(result.hashtags.is_empty());
        assert!(result.engagement_prediction.is_empty());
        assert_eq!(result.quality_check, "Q");
    }

    #[test]
    fn test_preamble_before_first_heading_is_dropped() {
        let raw = "Sure! Here is your post.\n\nTITLE:\nT\nPOST:\nP";
        let result = parse_sections(raw);
        assert_eq!(result.title, "T");
        assert_eq!(result.post, "P");
    }

    #[test]
    fn test_crlf_line_endings() {
        let raw = "TITLE\r\nT\r\nPOST:\r\nP\r\n";
        let result = parse_sections(raw);
        assert_eq!(result.title, "T");
        assert_eq!(result.post, "P");
    }

    #[test]
    fn test_multiline_post_keeps_inner_blank_lines() {
        let raw = "POST:\nFirst paragraph.\n\nSecond paragraph.\nHASHTAGS:\n#a #b";
        let result = parse_sections(raw);
        assert_eq!(result.post, "First paragraph.\n\nSecond paragraph.");
    }
}
