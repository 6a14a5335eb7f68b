//! Configuration types for OpenAI TTS API.
//!
//! - Model selection (tts-1, tts-1-hd, gpt-4o-mini-tts)
//! - Voice selection (11 available voices)
//! - Speed range
//!
//! Output is always requested as MP3 since every voiceover file is an MP3.

use serde::{Deserialize, Serialize};

/// Minimum speed accepted by the API
pub const MIN_SPEED: f32 = 0.25;
/// Maximum speed accepted by the API
pub const MAX_SPEED: f32 = 4.0;
/// Maximum input length in characters
pub const MAX_INPUT_CHARS: usize = 4096;

// =============================================================================
// OpenAI TTS Models
// =============================================================================

/// Supported OpenAI TTS models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpenAITTSModel {
    /// Standard quality, lower latency
    #[default]
    #[serde(rename = "tts-1")]
    Tts1,
    /// High definition, higher latency
    #[serde(rename = "tts-1-hd")]
    Tts1Hd,
    #[serde(rename = "gpt-4o-mini-tts")]
    Gpt4oMiniTts,
}

impl OpenAITTSModel {
    /// Convert to the API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tts1 => "tts-1",
            Self::Tts1Hd => "tts-1-hd",
            Self::Gpt4oMiniTts => "gpt-4o-mini-tts",
        }
    }

    /// Parse a model name; unknown names fall back to `tts-1`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "tts-1-hd" | "tts1-hd" | "tts1hd" => Self::Tts1Hd,
            "gpt-4o-mini-tts" | "gpt4o-mini-tts" => Self::Gpt4oMiniTts,
            _ => Self::Tts1,
        }
    }
}

impl std::fmt::Display for OpenAITTSModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// OpenAI TTS Voices
// =============================================================================

/// Available voices for OpenAI TTS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenAIVoice {
    #[default]
    Alloy,
    Ash,
    Ballad,
    Coral,
    Echo,
    Fable,
    Onyx,
    Nova,
    Sage,
    Shimmer,
    Verse,
}

const VOICE_NAMES: &[(OpenAIVoice, &str)] = &[
    (OpenAIVoice::Alloy, "alloy"),
    (OpenAIVoice::Ash, "ash"),
    (OpenAIVoice::Ballad, "ballad"),
    (OpenAIVoice::Coral, "coral"),
    (OpenAIVoice::Echo, "echo"),
    (OpenAIVoice::Fable, "fable"),
    (OpenAIVoice::Onyx, "onyx"),
    (OpenAIVoice::Nova, "nova"),
    (OpenAIVoice::Sage, "sage"),
    (OpenAIVoice::Shimmer, "shimmer"),
    (OpenAIVoice::Verse, "verse"),
];

impl OpenAIVoice {
    /// Convert to the API parameter value.
    pub fn as_str(&self) -> &'static str {
        VOICE_NAMES
            .iter()
            .find(|(voice, _)| voice == self)
            .map(|(_, name)| *name)
            .unwrap_or("alloy")
    }

    /// Parse a voice name case-insensitively; unknown names fall back to `alloy`.
    pub fn from_str_or_default(s: &str) -> Self {
        let s = s.trim();
        VOICE_NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(voice, _)| *voice)
            .unwrap_or_default()
    }

    /// Get all available voices.
    pub fn all() -> impl Iterator<Item = OpenAIVoice> {
        VOICE_NAMES.iter().map(|(voice, _)| *voice)
    }
}

impl std::fmt::Display for OpenAIVoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
