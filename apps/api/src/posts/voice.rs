//! SARI voices and the static catalog of frameworks and tones offered for each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four SARI voices. Selects the prompt template and the label under
/// which the user's content is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum VoiceType {
    Storytelling,
    Authority,
    Relevance,
    Invitation,
}

impl VoiceType {
    pub const ALL: [VoiceType; 4] = [
        VoiceType::Storytelling,
        VoiceType::Authority,
        VoiceType::Relevance,
        VoiceType::Invitation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VoiceType::Storytelling => "storytelling",
            VoiceType::Authority => "authority",
            VoiceType::Relevance => "relevance",
            VoiceType::Invitation => "invitation",
        }
    }

    /// Heading the user's content sits under in the assembled prompt.
    pub fn content_label(self) -> &'static str {
        match self {
            VoiceType::Storytelling => "YOUR STORY",
            VoiceType::Authority => "YOUR INSIGHT",
            VoiceType::Relevance => "TOPIC",
            VoiceType::Invitation => "FOCUS",
        }
    }
}

impl fmt::Display for VoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVoiceType(pub String);

impl fmt::Display for UnknownVoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown voice type '{}' (expected storytelling, authority, relevance or invitation)",
            self.0
        )
    }
}

impl std::error::Error for UnknownVoiceType {}

impl FromStr for VoiceType {
    type Err = UnknownVoiceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VoiceType::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVoiceType(s.to_string()))
    }
}

impl TryFrom<String> for VoiceType {
    type Error = UnknownVoiceType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameworkOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// Everything a client needs to render the form for one voice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceProfile {
    pub id: VoiceType,
    pub label: &'static str,
    pub content_label: &'static str,
    pub content_placeholder: &'static str,
    pub frameworks: &'static [FrameworkOption],
}

/// Suggested tones. Requests may use any non-blank tone.
pub const TONES: &[&str] = &[
    "vulnerable",
    "inspirational",
    "analytical",
    "educational",
    "celebratory",
    "provocative",
    "curious",
    "generous",
];

const STORYTELLING_FRAMEWORKS: &[FrameworkOption] = &[
    FrameworkOption { id: "BAB", label: "BAB (Before-After-Bridge)" },
    FrameworkOption { id: "Hero", label: "Hero's Journey" },
    FrameworkOption { id: "Mountain", label: "The Mountain" },
];

const AUTHORITY_FRAMEWORKS: &[FrameworkOption] = &[
    FrameworkOption { id: "PAS", label: "PAS (Problem-Agitate-Solve)" },
    FrameworkOption { id: "Thesis", label: "Thesis-Antithesis-Synthesis" },
    FrameworkOption { id: "4Ps", label: "4Ps (Picture-Promise-Proof-Push)" },
];

const RELEVANCE_FRAMEWORKS: &[FrameworkOption] = &[
    FrameworkOption { id: "Myth", label: "Myth vs. Reality" },
    FrameworkOption { id: "Trend", label: "Trend Analysis" },
    FrameworkOption { id: "AMA", label: "AMA (Ask Me Anything)" },
];

const INVITATION_FRAMEWORKS: &[FrameworkOption] = &[
    FrameworkOption { id: "Question", label: "The Genuine Question" },
    FrameworkOption { id: "Understand", label: "Help Me Understand" },
    FrameworkOption { id: "Gift", label: "Resource/Gift Frame" },
    FrameworkOption { id: "Celebrate", label: "Celebration/Recognition" },
];

pub fn profile(voice: VoiceType) -> VoiceProfile {
    let (label, content_placeholder, frameworks) = match voice {
        VoiceType::Storytelling => (
            "Storytelling",
            "Share your experience, moment, or personal journey...",
            STORYTELLING_FRAMEWORKS,
        ),
        VoiceType::Authority => (
            "Authority",
            "Share your insight, framework, or contrarian perspective...",
            AUTHORITY_FRAMEWORKS,
        ),
        VoiceType::Relevance => (
            "Relevance",
            "Describe the myth, trend, or observation you're noticing...",
            RELEVANCE_FRAMEWORKS,
        ),
        VoiceType::Invitation => (
            "Invitation",
            "Share what you're observing, offering, or celebrating...",
            INVITATION_FRAMEWORKS,
        ),
    };

    VoiceProfile {
        id: voice,
        label,
        content_label: voice.content_label(),
        content_placeholder,
        frameworks,
    }
}

pub fn catalog() -> Vec<VoiceProfile> {
    VoiceType::ALL.into_iter().map(profile).collect()
}

/// True when `framework` is one of the catalog ids for `voice` (case-insensitive).
pub fn is_known_framework(voice: VoiceType, framework: &str) -> bool {
    profile(voice)
        .frameworks
        .iter()
        .any(|f| f.id.eq_ignore_ascii_case(framework.trim()))
}
