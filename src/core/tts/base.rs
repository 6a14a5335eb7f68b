//! Base trait and types shared by every text-to-speech provider.

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use thiserror::Error;
use zeroize::Zeroizing;

/// Default per-request timeout for provider HTTP calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur while synthesizing speech.
#[derive(Debug, Error)]
pub enum TTSError {
    /// Provider could not be constructed from the given configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Language code is not in the provider's supported set
    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    /// Text was empty or could not be tokenized into speakable chunks
    #[error("Invalid text: {0}")]
    InvalidText(String),

    /// Transport-level failure (connect, timeout, body read)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Upstream returned HTTP 429
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Upstream returned a non-success response
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Upstream answered but no usable audio came back
    #[error("Audio generation failed: {0}")]
    AudioGenerationFailed(String),
}

/// Result type for synthesis operations.
pub type TTSResult<T> = Result<T, TTSError>;

impl From<reqwest::Error> for TTSError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TTSError::NetworkError(format!("Request timed out: {err}"))
        } else {
            TTSError::NetworkError(format!("Request failed: {err}"))
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Provider-agnostic synthesizer configuration.
///
/// Each provider reads the fields it understands and ignores the rest.
#[derive(Debug, Clone)]
pub struct SynthesizerConfig {
    /// API key for providers that need one, wiped from memory on drop
    pub api_key: Option<Zeroizing<String>>,
    /// Overrides the provider's default endpoint (proxies, tests)
    pub endpoint: Option<String>,
    /// Top-level domain for the Google Translate host (`translate.google.{tld}`)
    pub tld: String,
    /// Request slower speech where the provider supports it
    pub slow: bool,
    /// Provider model (e.g. "tts-1")
    pub model: Option<String>,
    /// Provider voice (e.g. "nova")
    pub voice: Option<String>,
    /// Speaking rate multiplier
    pub speaking_rate: Option<f32>,
    /// Timeout applied to each HTTP request
    pub request_timeout_secs: u64,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            tld: "com".to_string(),
            slow: false,
            model: None,
            voice: None,
            speaking_rate: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl SynthesizerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(Zeroizing::new(key.into()));
        self
    }
}

/// Build the shared HTTP client used by a provider.
pub(crate) fn build_http_client(timeout: Duration) -> TTSResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| TTSError::InvalidConfiguration(format!("Failed to build HTTP client: {e}")))
}

/// Map a non-success HTTP status to a typed error.
///
/// `body` is the (possibly empty) response text, appended for diagnostics.
pub(crate) fn error_for_status(
    provider: &str,
    status: reqwest::StatusCode,
    body: &str,
) -> TTSError {
    let detail = if body.trim().is_empty() {
        String::new()
    } else {
        format!(": {}", body.trim())
    };

    match status.as_u16() {
        429 => TTSError::RateLimited(format!("{provider} returned 429 Too Many Requests{detail}")),
        401 | 403 => TTSError::ProviderError(format!(
            "{provider} rejected the request ({status}){detail}"
        )),
        code if code >= 500 => TTSError::ProviderError(format!(
            "{provider} upstream error ({status}). Try again later{detail}"
        )),
        _ => TTSError::ProviderError(format!("{provider} API error {status}{detail}")),
    }
}

// =============================================================================
// Synthesizer Trait
// =============================================================================

/// A text-to-speech capability: text plus language code in, MP3 bytes out.
///
/// Implementations must not write files or print; persistence is the
/// caller's job. Returning an empty buffer is a contract violation and
/// should be reported as [`TTSError::AudioGenerationFailed`] instead.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesize `text` spoken in `language`, returning MP3-encoded audio.
    async fn synthesize(&self, text: &str, language: &str) -> TTSResult<Bytes>;

    /// Stable provider identifier, as accepted by the factory.
    fn provider_name(&self) -> &'static str;

    /// Whether `language` is accepted by this provider.
    fn supports_language(&self, language: &str) -> bool;

    /// Provider metadata for diagnostics.
    fn get_provider_info(&self) -> serde_json::Value;
}

/// Boxed synthesizer trait object.
pub type BoxedSynthesizer = Box<dyn Synthesizer>;
