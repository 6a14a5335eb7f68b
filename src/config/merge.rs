use std::path::PathBuf;

use super::env::EnvConfig;
use super::yaml::YamlConfig;
use super::{ConfigError, GeneratorConfig};
use crate::core::tts::DEFAULT_REQUEST_TIMEOUT_SECS;

/// Layer YAML values over environment values over defaults.
pub(crate) fn merge_config(yaml: Option<YamlConfig>) -> Result<GeneratorConfig, ConfigError> {
    let env = EnvConfig::load()?;
    let yaml = yaml.unwrap_or_default();

    let tts = yaml.tts.unwrap_or_default();
    let openai = yaml.openai.unwrap_or_default();
    let output = yaml.output.unwrap_or_default();

    Ok(GeneratorConfig {
        provider: tts
            .provider
            .or(env.provider)
            .unwrap_or_else(|| "google-translate".to_string()),
        language: tts
            .language
            .or(env.language)
            .unwrap_or_else(|| "en".to_string()),
        output_dir: output
            .dir
            .or(env.output_dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
        slow: tts.slow.or(env.slow).unwrap_or(false),
        tld: tts.tld.or(env.tld).unwrap_or_else(|| "com".to_string()),
        endpoint: tts.endpoint.or(env.endpoint),
        request_timeout_secs: tts
            .request_timeout_secs
            .or(env.request_timeout_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        manifest_path: output.manifest.or(env.manifest).map(PathBuf::from),
        openai_api_key: openai.api_key.or(env.openai_api_key),
        openai_model: openai.model.or(env.openai_model),
        openai_voice: openai.voice.or(env.openai_voice),
        openai_speed: openai.speed.or(env.openai_speed),
        scenes: yaml.scenes,
    })
}
