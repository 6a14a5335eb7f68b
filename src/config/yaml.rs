use serde::Deserialize;
use std::path::Path;

use super::ConfigError;
use crate::core::voiceover::SceneEntry;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Values present here
/// override environment variables; CLI flags override both.
///
/// # Example YAML structure
/// ```yaml
/// tts:
///   provider: google-translate
///   language: en
///   slow: false
///   tld: com
///   request_timeout_secs: 30
///
/// openai:
///   api_key: "sk-..."
///   model: tts-1
///   voice: nova
///   speed: 1.0
///
/// output:
///   dir: ./audio
///   manifest: ./audio/voiceovers.json
///
/// scenes:
///   - id: living_room
///     narration: "Welcome to the luxury living room."
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub tts: Option<TtsYaml>,
    pub openai: Option<OpenAIYaml>,
    pub output: Option<OutputYaml>,
    /// Replaces the built-in scene catalog when present
    pub scenes: Option<Vec<SceneEntry>>,
}

/// Synthesis settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TtsYaml {
    pub provider: Option<String>,
    pub language: Option<String>,
    pub slow: Option<bool>,
    /// Google Translate host tld, e.g. "co.uk"
    pub tld: Option<String>,
    /// Endpoint override for the selected provider
    pub endpoint: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

/// OpenAI settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OpenAIYaml {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub voice: Option<String>,
    pub speed: Option<f32>,
}

/// Output settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OutputYaml {
    pub dir: Option<String>,
    pub manifest: Option<String>,
}

impl YamlConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_str(&contents)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not to a map
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}
