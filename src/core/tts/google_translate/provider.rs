//! Google Translate TTS provider implementation.
//!
//! # API Reference
//!
//! - Endpoint: `POST https://translate.google.{tld}/_/TranslateWebserverUi/data/batchexecute`
//! - Body: form field `f.req` carrying the `jQ1olc` RPC envelope
//! - Output: base64-encoded MP3 inside the batchexecute response
//! - Limit: 100 characters per request, longer text is chunked

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use bytes::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

use super::config::{GOOGLE_TTS_RPC, GoogleTranslateConfig, SpeechSpeed};
use super::languages::{SUPPORTED_LANGUAGES, resolve_language};
use super::tokenizer::{MAX_CHUNK_CHARS, tokenize};
use crate::core::tts::base::{
    Synthesizer, SynthesizerConfig, TTSError, TTSResult, build_http_client, error_for_status,
};

/// Google Translate TTS endpoint for the default tld
pub const GOOGLE_TRANSLATE_TTS_URL: &str =
    "https://translate.google.com/_/TranslateWebserverUi/data/batchexecute";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";

/// Audio payload inside a batchexecute response line: `jQ1olc","[\"<base64>\"]`
static AUDIO_PAYLOAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"jQ1olc","\[\\"(.*)\\"]"#).expect("valid audio payload pattern"));

// =============================================================================
// Request / Response Helpers
// =============================================================================

/// Build the RPC envelope for one chunk of text.
///
/// The inner parameter list is JSON-encoded a second time and embedded as a string.
pub(crate) fn package_rpc(text: &str, language: &str, speed: SpeechSpeed) -> String {
    let parameter = json!([text, language, speed.as_rpc_value(), "null"]);
    let rpc = json!([[[GOOGLE_TTS_RPC, parameter.to_string(), null, "generic"]]]);
    rpc.to_string()
}

/// Form-encode the RPC envelope as the request body.
pub(crate) fn encode_request_body(rpc: &str) -> String {
    let mut body = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("f.req", rpc)
        .finish();
    body.push('&');
    body
}

/// Pull the decoded audio out of a batchexecute response body.
///
/// Returns `Ok(None)` when no line carries an audio payload.
pub(crate) fn extract_audio(body: &str) -> TTSResult<Option<Vec<u8>>> {
    for line in body.lines() {
        if !line.contains(GOOGLE_TTS_RPC) {
            continue;
        }

        if let Some(captures) = AUDIO_PAYLOAD.captures(line) {
            let decoded = BASE64.decode(captures[1].as_bytes()).map_err(|e| {
                TTSError::AudioGenerationFailed(format!("Base64 decode error: {e}"))
            })?;
            return Ok(Some(decoded));
        }
    }
    Ok(None)
}

/// Translate a failed response into the most likely cause.
fn infer_error(
    config: &GoogleTranslateConfig,
    status: reqwest::StatusCode,
    body: &str,
) -> TTSError {
    match status.as_u16() {
        403 => TTSError::ProviderError(format!(
            "{status} ({}) from TTS API. Probable cause: Bad token or upstream API changes",
            config.endpoint_url()
        )),
        404 if config.tld != "com" => TTSError::ProviderError(format!(
            "{status} ({}) from TTS API. Probable cause: Unsupported tld '{}'",
            config.endpoint_url(),
            config.tld
        )),
        _ => error_for_status("google-translate", status, body),
    }
}

// =============================================================================
// Google Translate TTS Provider
// =============================================================================

/// Google Translate text-to-speech provider.
///
/// # Example
///
/// ```rust,ignore
/// use voiceover_gen::core::tts::{GoogleTranslateTTS, Synthesizer, SynthesizerConfig};
///
/// let tts = GoogleTranslateTTS::new(&SynthesizerConfig::default())?;
/// let mp3 = tts.synthesize("Welcome to the kitchen.", "en").await?;
/// ```
pub struct GoogleTranslateTTS {
    config: GoogleTranslateConfig,
    http_client: reqwest::Client,
}

impl GoogleTranslateTTS {
    /// Create a new Google Translate TTS instance
    pub fn new(config: &SynthesizerConfig) -> TTSResult<Self> {
        let provider_config =
            GoogleTranslateConfig::from_base(config).map_err(TTSError::InvalidConfiguration)?;
        Self::from_config(provider_config)
    }

    /// Create an instance from an already-built provider configuration
    pub fn from_config(config: GoogleTranslateConfig) -> TTSResult<Self> {
        config.validate().map_err(TTSError::InvalidConfiguration)?;

        let http_client = build_http_client(Duration::from_secs(config.request_timeout_secs))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &GoogleTranslateConfig {
        &self.config
    }

    async fn synthesize_chunk(
        &self,
        chunk: &str,
        index: usize,
        language: &str,
    ) -> TTSResult<Vec<u8>> {
        let rpc = package_rpc(chunk, language, self.config.speed);

        debug!(
            chunk = index,
            chars = chunk.chars().count(),
            language = %language,
            "Google Translate TTS chunk request"
        );

        let response = self
            .http_client
            .post(self.config.endpoint_url())
            .header("Referer", self.config.referer())
            .header("User-Agent", USER_AGENT)
            .header(
                "Content-Type",
                "application/x-www-form-urlencoded;charset=utf-8",
            )
            .body(encode_request_body(&rpc))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(infer_error(&self.config, status, &body));
        }

        match extract_audio(&body)? {
            Some(audio) => Ok(audio),
            None => Err(TTSError::AudioGenerationFailed(format!(
                "No audio stream in response for chunk {index}. Unable to find '{GOOGLE_TTS_RPC}'"
            ))),
        }
    }
}

#[async_trait]
impl Synthesizer for GoogleTranslateTTS {
    async fn synthesize(&self, text: &str, language: &str) -> TTSResult<Bytes> {
        let language = resolve_language(language)
            .ok_or_else(|| TTSError::UnsupportedLanguage(language.to_string()))?;

        let chunks = tokenize(text);
        if chunks.is_empty() {
            return Err(TTSError::InvalidText(
                "No speakable text after tokenization".to_string(),
            ));
        }

        info!(
            language = %language,
            chunks = chunks.len(),
            speed = ?self.config.speed,
            "Synthesizing with Google Translate TTS"
        );

        // MP3 frames concatenate, so chunk audio is appended as-is
        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let chunk_audio = self.synthesize_chunk(chunk, index, language).await?;
            audio.extend_from_slice(&chunk_audio);
        }

        if audio.is_empty() {
            return Err(TTSError::AudioGenerationFailed(
                "TTS API returned empty audio".to_string(),
            ));
        }

        debug!(
            audio_bytes = audio.len(),
            "Google Translate TTS synthesis complete"
        );
        Ok(Bytes::from(audio))
    }

    fn provider_name(&self) -> &'static str {
        "google-translate"
    }

    fn supports_language(&self, language: &str) -> bool {
        resolve_language(language).is_some()
    }

    fn get_provider_info(&self) -> serde_json::Value {
        json!({
            "provider": "google-translate",
            "api_type": "HTTP batchexecute RPC",
            "output_format": "mp3",
            "max_chunk_chars": MAX_CHUNK_CHARS,
            "tld": self.config.tld,
            "speed": self.config.speed,
            "endpoint": self.config.endpoint_url(),
            "supported_languages": SUPPORTED_LANGUAGES
                .iter()
                .map(|(code, _)| *code)
                .collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_rpc_normal_speed() {
        let rpc = package_rpc("Hello", "en", SpeechSpeed::Normal);
        assert_eq!(
            rpc,
            r#"[[["jQ1olc","[\"Hello\",\"en\",null,\"null\"]",null,"generic"]]]"#
        );
    }

    #[test]
    fn test_package_rpc_slow_speed() {
        let rpc = package_rpc("Hi", "fr", SpeechSpeed::Slow);
        assert!(rpc.contains(r#"[\"Hi\",\"fr\",true,\"null\"]"#));
    }

    #[test]
    fn test_encode_request_body_roundtrips_rpc() {
        let rpc = package_rpc("Welcome home, friend.", "en", SpeechSpeed::Normal);
        let body = encode_request_body(&rpc);
        assert!(body.starts_with("f.req="));
        assert!(body.ends_with('&'));

        let decoded: Vec<(String, String)> = url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].0, "f.req");
        assert_eq!(decoded[0].1, rpc);
    }

    #[test]
    fn test_extract_audio_from_response() {
        let payload = BASE64.encode(b"ID3fake-mp3");
        let body = format!(
            ")]}}'\n\n104\n[[\"wrb.fr\",\"jQ1olc\",\"[\\\"{payload}\\\"]\",null,null,null,\
             \"generic\"],[\"di\",48]]\n25\n[[\"e\",4,null,null,140]]\n"
        );
        let audio = extract_audio(&body).unwrap().unwrap();
        assert_eq!(audio, b"ID3fake-mp3");
    }

    #[test]
    fn test_extract_audio_missing_payload() {
        let body = ")]}'\n\n[[\"wrb.fr\",\"jQ1olc\",null,null,null,[3],\"generic\"]]\n";
        assert!(extract_audio(body).unwrap().is_none());
        assert!(extract_audio("").unwrap().is_none());
    }

    #[test]
    fn test_extract_audio_bad_base64() {
        let body = "[[\"wrb.fr\",\"jQ1olc\",\"[\\\"!!not-base64!!\\\"]\"]]";
        assert!(matches!(
            extract_audio(body),
            Err(TTSError::AudioGenerationFailed(_))
        ));
    }

    #[test]
    fn test_infer_error_messages() {
        let config = GoogleTranslateConfig::default();
        match infer_error(&config, reqwest::StatusCode::FORBIDDEN, "") {
            TTSError::ProviderError(msg) => assert!(msg.contains("Bad token")),
            other => panic!("Expected ProviderError, got: {other:?}"),
        }

        let config = GoogleTranslateConfig {
            tld: "xyz".to_string(),
            ..Default::default()
        };
        match infer_error(&config, reqwest::StatusCode::NOT_FOUND, "") {
            TTSError::ProviderError(msg) => assert!(msg.contains("Unsupported tld")),
            other => panic!("Expected ProviderError, got: {other:?}"),
        }

        assert!(matches!(
            infer_error(&config, reqwest::StatusCode::TOO_MANY_REQUESTS, ""),
            TTSError::RateLimited(_)
        ));
    }

    #[tokio::test]
    async fn test_unsupported_language_fails_before_request() {
        // Unroutable endpoint: any network attempt would surface as NetworkError
        let tts = GoogleTranslateTTS::new(&SynthesizerConfig {
            endpoint: Some("http://127.0.0.1:9/unreachable".to_string()),
            ..Default::default()
        })
        .unwrap();

        let result = tts.synthesize("Hello", "xx").await;
        assert!(matches!(result, Err(TTSError::UnsupportedLanguage(ref l)) if l == "xx"));
    }

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let tts = GoogleTranslateTTS::new(&SynthesizerConfig::default()).unwrap();
        let result = tts.synthesize("  ...  ", "en").await;
        assert!(matches!(result, Err(TTSError::InvalidText(_))));
    }

    #[test]
    fn test_provider_info() {
        let tts = GoogleTranslateTTS::new(&SynthesizerConfig::default()).unwrap();
        let info = tts.get_provider_info();
        assert_eq!(info["provider"], "google-translate");
        assert_eq!(info["max_chunk_chars"], 100);
        assert_eq!(info["endpoint"], GOOGLE_TRANSLATE_TTS_URL);
        assert!(
            info["supported_languages"]
                .as_array()
                .unwrap()
                .contains(&json!("en"))
        );
        assert!(tts.supports_language("EN"));
        assert!(!tts.supports_language("xx"));
    }
}
