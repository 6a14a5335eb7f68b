use super::ConfigError;
use crate::core::tts::{SUPPORTED_PROVIDERS, canonical_provider_name};
use crate::core::voiceover::{SceneCatalog, SceneEntry};
use crate::utils::url_validation::validate_endpoint_url;

/// Provider name must be a known provider or alias.
pub fn validate_provider(provider: &str) -> Result<(), ConfigError> {
    if canonical_provider_name(provider).is_none() {
        return Err(ConfigError::Validation(format!(
            "Unsupported TTS provider '{provider}'. Supported providers: {}",
            SUPPORTED_PROVIDERS.join(", ")
        )));
    }
    Ok(())
}

/// Language code must be non-empty and made of letters, digits and `-`/`_`.
///
/// `_` and `-` are interchangeable separators. Whether the provider supports
/// the code is checked at synthesis time.
pub fn validate_language(language: &str) -> Result<(), ConfigError> {
    let well_formed = !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !well_formed {
        return Err(ConfigError::Validation(format!(
            "Invalid language code '{language}'"
        )));
    }
    Ok(())
}

pub fn validate_request_timeout(secs: u64) -> Result<(), ConfigError> {
    if secs == 0 {
        return Err(ConfigError::Validation(
            "request_timeout_secs must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_endpoint(endpoint: &Option<String>) -> Result<(), ConfigError> {
    if let Some(endpoint) = endpoint {
        validate_endpoint_url(endpoint).map_err(|e| {
            ConfigError::Validation(format!("Invalid endpoint '{endpoint}': {e}"))
        })?;
    }
    Ok(())
}

/// Configured scenes must form a valid catalog.
pub fn validate_scenes(scenes: &Option<Vec<SceneEntry>>) -> Result<(), ConfigError> {
    if let Some(scenes) = scenes {
        SceneCatalog::new(scenes.clone())?;
    }
    Ok(())
}
