//! Environment variable loading.
//!
//! `.env` is loaded into the process environment by the binary before any of
//! this runs, so a value here may come from either source.

use std::env;

use super::ConfigError;

pub const LANG_VAR: &str = "VOICEOVER_LANG";
pub const OUTPUT_DIR_VAR: &str = "VOICEOVER_OUTPUT_DIR";
pub const PROVIDER_VAR: &str = "VOICEOVER_PROVIDER";
pub const SLOW_VAR: &str = "VOICEOVER_SLOW";
pub const TLD_VAR: &str = "VOICEOVER_TLD";
pub const ENDPOINT_VAR: &str = "VOICEOVER_ENDPOINT";
pub const REQUEST_TIMEOUT_VAR: &str = "VOICEOVER_REQUEST_TIMEOUT_SECS";
pub const MANIFEST_VAR: &str = "VOICEOVER_MANIFEST";
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const OPENAI_MODEL_VAR: &str = "OPENAI_TTS_MODEL";
pub const OPENAI_VOICE_VAR: &str = "OPENAI_TTS_VOICE";
pub const OPENAI_SPEED_VAR: &str = "OPENAI_TTS_SPEED";

/// Values read from the environment; `None` means unset or blank.
#[derive(Debug, Default)]
pub(crate) struct EnvConfig {
    pub language: Option<String>,
    pub output_dir: Option<String>,
    pub provider: Option<String>,
    pub slow: Option<bool>,
    pub tld: Option<String>,
    pub endpoint: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub manifest: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub openai_voice: Option<String>,
    pub openai_speed: Option<f32>,
}

impl EnvConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            language: get_env(LANG_VAR),
            output_dir: get_env(OUTPUT_DIR_VAR),
            provider: get_env(PROVIDER_VAR),
            slow: get_env(SLOW_VAR)
                .map(|v| parse_bool(SLOW_VAR, &v))
                .transpose()?,
            tld: get_env(TLD_VAR),
            endpoint: get_env(ENDPOINT_VAR),
            request_timeout_secs: get_env(REQUEST_TIMEOUT_VAR)
                .map(|v| parse_number(REQUEST_TIMEOUT_VAR, &v))
                .transpose()?,
            manifest: get_env(MANIFEST_VAR),
            openai_api_key: get_env(OPENAI_API_KEY_VAR),
            openai_model: get_env(OPENAI_MODEL_VAR),
            openai_voice: get_env(OPENAI_VOICE_VAR),
            openai_speed: get_env(OPENAI_SPEED_VAR)
                .map(|v| parse_number(OPENAI_SPEED_VAR, &v))
                .transpose()?,
        })
    }
}

fn get_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}

fn parse_number<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        for value in ["true", "TRUE", "1", "yes", "on"] {
            assert!(parse_bool(SLOW_VAR, value).unwrap());
        }
        for value in ["false", "0", "No", "off"] {
            assert!(!parse_bool(SLOW_VAR, value).unwrap());
        }
        assert!(matches!(
            parse_bool(SLOW_VAR, "maybe"),
            Err(ConfigError::InvalidValue { ref key, .. }) if key == SLOW_VAR
        ));
    }

    #[test]
    fn test_parse_number() {
        let timeout: u64 = parse_number(REQUEST_TIMEOUT_VAR, " 45 ").unwrap();
        assert_eq!(timeout, 45);
        assert!(parse_number::<u64>(REQUEST_TIMEOUT_VAR, "-1").is_err());

        let speed: f32 = parse_number(OPENAI_SPEED_VAR, "1.5").unwrap();
        assert!((speed - 1.5).abs() < f32::EPSILON);
    }
}
