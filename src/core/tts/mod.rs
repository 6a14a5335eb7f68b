mod base;
pub mod google_translate;
pub mod openai;

pub use base::{
    BoxedSynthesizer, DEFAULT_REQUEST_TIMEOUT_SECS, Synthesizer, SynthesizerConfig, TTSError,
    TTSResult,
};
pub use google_translate::{
    GOOGLE_TRANSLATE_TTS_URL, GoogleTranslateConfig, GoogleTranslateTTS, SpeechSpeed,
};
pub use openai::{OPENAI_TTS_URL, OpenAITTS, OpenAITTSModel, OpenAIVoice};
use std::collections::HashMap;

/// Provider names accepted by [`create_synthesizer`], canonical spelling.
pub const SUPPORTED_PROVIDERS: &[&str] = &["google-translate", "openai"];

/// Resolve a provider name or alias to its canonical name.
pub fn canonical_provider_name(provider_type: &str) -> Option<&'static str> {
    match provider_type.trim().to_lowercase().as_str() {
        "google-translate" | "google_translate" | "gtts" | "google" => Some("google-translate"),
        "openai" => Some("openai"),
        _ => None,
    }
}

/// Factory function to create a synthesizer.
///
/// # Supported Providers
///
/// - `"google-translate"`, `"google_translate"`, `"gtts"` or `"google"` - Google Translate
///   web TTS (no key)
/// - `"openai"` - OpenAI TTS API (tts-1, tts-1-hd, gpt-4o-mini-tts)
///
/// # Example
///
/// ```rust,ignore
/// use voiceover_gen::core::tts::{create_synthesizer, SynthesizerConfig};
///
/// let config = SynthesizerConfig {
///     slow: true,
///     ..Default::default()
/// };
///
/// let synthesizer = create_synthesizer("gtts", &config)?;
/// ```
pub fn create_synthesizer(
    provider_type: &str,
    config: &SynthesizerConfig,
) -> TTSResult<BoxedSynthesizer> {
    match canonical_provider_name(provider_type) {
        Some("google-translate") => Ok(Box::new(GoogleTranslateTTS::new(config)?)),
        Some("openai") => Ok(Box::new(OpenAITTS::new(config)?)),
        _ => Err(TTSError::InvalidConfiguration(format!(
            "Unsupported TTS provider: {provider_type}. Supported providers: {}",
            SUPPORTED_PROVIDERS.join(", ")
        ))),
    }
}

/// Returns a map of provider names to their default API endpoint URLs.
///
/// Note: the Google Translate host depends on the configured tld. The URL
/// returned here is for `translate.google.com`.
pub fn get_synthesizer_urls() -> HashMap<String, String> {
    let mut urls = HashMap::new();
    urls.insert(
        "google-translate".to_string(),
        GOOGLE_TRANSLATE_TTS_URL.to_string(),
    );
    urls.insert("openai".to_string(), OPENAI_TTS_URL.to_string());
    urls
}
