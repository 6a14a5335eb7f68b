//! OpenAI TTS provider implementation.
//!
//! # API Reference
//!
//! - Endpoint: `POST https://api.openai.com/v1/audio/speech`
//! - Models: tts-1, tts-1-hd, gpt-4o-mini-tts
//! - Output: mp3
//! - Speed: 0.25 to 4.0

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::json;
use tracing::{debug, info};
use zeroize::Zeroizing;

use super::config::{MAX_INPUT_CHARS, MAX_SPEED, MIN_SPEED, OpenAITTSModel, OpenAIVoice};
use crate::core::tts::base::{
    Synthesizer, SynthesizerConfig, TTSError, TTSResult, build_http_client, error_for_status,
};
use crate::utils::url_validation::validate_endpoint_url;

/// OpenAI TTS API endpoint
pub const OPENAI_TTS_URL: &str = "https://api.openai.com/v1/audio/speech";

/// OpenAI TTS provider using the Audio Speech API.
pub struct OpenAITTS {
    api_key: Zeroizing<String>,
    endpoint: String,
    model: OpenAITTSModel,
    voice: OpenAIVoice,
    /// Speaking speed, clamped to the API range
    speed: f32,
    http_client: reqwest::Client,
}

impl OpenAITTS {
    /// Create a new OpenAI TTS instance
    pub fn new(config: &SynthesizerConfig) -> TTSResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                TTSError::InvalidConfiguration(
                    "OpenAI API key is required. Set OPENAI_API_KEY environment variable."
                        .to_string(),
                )
            })?;

        let endpoint = match config.endpoint {
            Some(ref endpoint) => validate_endpoint_url(endpoint)
                .map_err(|e| {
                    TTSError::InvalidConfiguration(format!(
                        "Invalid OpenAI endpoint '{endpoint}': {e}"
                    ))
                })?
                .to_string(),
            None => OPENAI_TTS_URL.to_string(),
        };

        let model = config
            .model
            .as_deref()
            .map(OpenAITTSModel::from_str_or_default)
            .unwrap_or_default();

        let voice = config
            .voice
            .as_deref()
            .map(OpenAIVoice::from_str_or_default)
            .unwrap_or_default();

        let speed = config.speaking_rate.unwrap_or(1.0).clamp(MIN_SPEED, MAX_SPEED);

        Ok(Self {
            api_key,
            endpoint,
            model,
            voice,
            speed,
            http_client: build_http_client(config.request_timeout())?,
        })
    }

    /// Get the configured model
    pub fn model(&self) -> OpenAITTSModel {
        self.model
    }

    /// Get the configured voice
    pub fn voice(&self) -> OpenAIVoice {
        self.voice
    }

    /// Get the effective speed after clamping
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Build the OpenAI-specific HTTP request
    fn build_http_request(&self, text: &str) -> reqwest::RequestBuilder {
        let mut body = json!({
            "model": self.model.as_str(),
            "input": text,
            "voice": self.voice.as_str(),
            "response_format": "mp3",
        });

        // Speed is omitted at the API default
        if (self.speed - 1.0).abs() > 0.001 {
            body["speed"] = json!(self.speed);
        }

        self.http_client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key.as_str()))
            .header("Content-Type", "application/json")
            .json(&body)
    }
}

#[async_trait]
impl Synthesizer for OpenAITTS {
    async fn synthesize(&self, text: &str, language: &str) -> TTSResult<Bytes> {
        // The model infers language from the text itself
        if !self.supports_language(language) {
            return Err(TTSError::UnsupportedLanguage(language.to_string()));
        }

        let text = text.trim();
        if text.is_empty() {
            return Err(TTSError::InvalidText("Text must not be empty".to_string()));
        }
        let chars = text.chars().count();
        if chars > MAX_INPUT_CHARS {
            return Err(TTSError::InvalidText(format!(
                "Text is {chars} characters, OpenAI accepts at most {MAX_INPUT_CHARS}"
            )));
        }

        info!(
            model = %self.model,
            voice = %self.voice,
            chars,
            "Synthesizing with OpenAI TTS"
        );

        let response = self.build_http_request(text).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(error_for_status("openai", status, &error_text));
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(TTSError::AudioGenerationFailed(
                "OpenAI returned an empty audio body".to_string(),
            ));
        }

        debug!(audio_bytes = audio.len(), "OpenAI TTS synthesis complete");
        Ok(audio)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn supports_language(&self, language: &str) -> bool {
        !language.trim().is_empty()
    }

    fn get_provider_info(&self) -> serde_json::Value {
        json!({
            "provider": "openai",
            "api_type": "HTTP REST",
            "output_format": "mp3",
            "model": self.model.as_str(),
            "voice": self.voice.as_str(),
            "supported_models": ["tts-1", "tts-1-hd", "gpt-4o-mini-tts"],
            "supported_voices": OpenAIVoice::all().map(|v| v.as_str()).collect::<Vec<_>>(),
            "speed_range": {
                "min": MIN_SPEED,
                "max": MAX_SPEED,
                "default": 1.0
            },
            "endpoint": self.endpoint,
        })
    }
}
