//! Google Translate TTS configuration.

use serde::{Deserialize, Serialize};

use crate::core::tts::base::{DEFAULT_REQUEST_TIMEOUT_SECS, SynthesizerConfig};
use crate::utils::url_validation::validate_endpoint_url;

/// RPC identifier of the speech method on the batchexecute endpoint
pub const GOOGLE_TTS_RPC: &str = "jQ1olc";

/// Path of the batchexecute endpoint on `translate.google.{tld}`
const BATCHEXECUTE_PATH: &str = "/_/TranslateWebserverUi/data/batchexecute";

/// Speech speed accepted by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechSpeed {
    #[default]
    Normal,
    Slow,
}

impl SpeechSpeed {
    /// Value of the speed slot in the RPC payload (`null` or `true`).
    pub fn as_rpc_value(&self) -> serde_json::Value {
        match self {
            Self::Normal => serde_json::Value::Null,
            Self::Slow => serde_json::Value::Bool(true),
        }
    }
}

/// Google Translate TTS provider-specific configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleTranslateConfig {
    /// Top-level domain of the host, e.g. "com", "co.uk", "com.au"
    pub tld: String,
    pub speed: SpeechSpeed,
    /// Full endpoint URL override; when set, `tld` is only used for diagnostics
    pub endpoint: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for GoogleTranslateConfig {
    fn default() -> Self {
        Self {
            tld: "com".to_string(),
            speed: SpeechSpeed::Normal,
            endpoint: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl GoogleTranslateConfig {
    /// Create GoogleTranslateConfig from the provider-agnostic configuration
    pub fn from_base(base: &SynthesizerConfig) -> Result<Self, String> {
        let config = Self {
            tld: base.tld.trim().trim_start_matches('.').to_lowercase(),
            speed: if base.slow {
                SpeechSpeed::Slow
            } else {
                SpeechSpeed::Normal
            },
            endpoint: base.endpoint.clone(),
            request_timeout_secs: base.request_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.tld.is_empty() {
            return Err("Google Translate tld must not be empty".to_string());
        }

        let valid_tld = self
            .tld
            .split('.')
            .all(|label| !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric()));
        if !valid_tld {
            return Err(format!("Invalid Google Translate tld: {}", self.tld));
        }

        if let Some(ref endpoint) = self.endpoint {
            validate_endpoint_url(endpoint)
                .map_err(|e| format!("Invalid Google Translate endpoint '{endpoint}': {e}"))?;
        }

        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be greater than zero".to_string());
        }

        Ok(())
    }

    /// Get the TTS API endpoint
    pub fn endpoint_url(&self) -> String {
        match self.endpoint {
            Some(ref endpoint) => endpoint.clone(),
            None => format!("https://translate.google.{}{}", self.tld, BATCHEXECUTE_PATH),
        }
    }

    /// Referer header value; the endpoint expects requests to look like they
    /// come from the translate web page.
    pub fn referer(&self) -> &'static str {
        "http://translate.google.com/"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = GoogleTranslateConfig::default();
        assert_eq!(
            config.endpoint_url(),
            "https://translate.google.com/_/TranslateWebserverUi/data/batchexecute"
        );
    }

    #[test]
    fn test_from_base_tld_and_speed() {
        let base = SynthesizerConfig {
            tld: ".CO.UK ".to_string(),
            slow: true,
            ..Default::default()
        };
        let config = GoogleTranslateConfig::from_base(&base).unwrap();
        assert_eq!(config.tld, "co.uk");
        assert_eq!(config.speed, SpeechSpeed::Slow);
        assert_eq!(
            config.endpoint_url(),
            "https://translate.google.co.uk/_/TranslateWebserverUi/data/batchexecute"
        );
    }

    #[test]
    fn test_endpoint_override() {
        let base = SynthesizerConfig {
            endpoint: Some("http://127.0.0.1:9000/tts".to_string()),
            ..Default::default()
        };
        let config = GoogleTranslateConfig::from_base(&base).unwrap();
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:9000/tts");
    }

    #[test]
    fn test_invalid_tld_rejected() {
        for tld in ["", "co..uk", "com/evil", "c m"] {
            let base = SynthesizerConfig {
                tld: tld.to_string(),
                ..Default::default()
            };
            assert!(
                GoogleTranslateConfig::from_base(&base).is_err(),
                "tld {tld:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let base = SynthesizerConfig {
            endpoint: Some("ftp://example.com/tts".to_string()),
            ..Default::default()
        };
        let err = GoogleTranslateConfig::from_base(&base).unwrap_err();
        assert!(err.contains("Invalid Google Translate endpoint"));
    }

    #[test]
    fn test_speed_rpc_values() {
        assert_eq!(SpeechSpeed::Normal.as_rpc_value(), serde_json::Value::Null);
        assert_eq!(
            SpeechSpeed::Slow.as_rpc_value(),
            serde_json::Value::Bool(true)
        );
    }
}
