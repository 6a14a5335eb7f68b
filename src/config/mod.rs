//! Configuration module for the voiceover generator
//!
//! Settings come from defaults, environment variables (including a `.env`
//! file loaded by the binary), an optional YAML file, and CLI flags.
//! Priority: CLI flags > YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//!
//! # Example
//! ```rust,no_run
//! use voiceover_gen::config::GeneratorConfig;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = GeneratorConfig::from_env()?;
//!
//! // Load from YAML file with environment variable fallbacks
//! let config = GeneratorConfig::from_file(Path::new("voiceover.yaml"))?;
//!
//! println!("Writing voiceovers to {}", config.output_dir.display());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

mod env;
mod merge;
mod validation;
mod yaml;

pub use env::{
    ENDPOINT_VAR, LANG_VAR, MANIFEST_VAR, OPENAI_API_KEY_VAR, OPENAI_MODEL_VAR, OPENAI_SPEED_VAR,
    OPENAI_VOICE_VAR, OUTPUT_DIR_VAR, PROVIDER_VAR, REQUEST_TIMEOUT_VAR, SLOW_VAR, TLD_VAR,
};
pub use yaml::{OpenAIYaml, OutputYaml, TtsYaml, YamlConfig};

use crate::core::tts::SynthesizerConfig;
use crate::core::voiceover::{GeneratorOptions, SceneCatalog, SceneEntry, SceneError};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for {key} ('{value}'): {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    Validation(String),

    #[error("Invalid scene configuration")]
    Scenes(#[from] SceneError),
}

/// Values supplied on the command line. `None` leaves the configured value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub provider: Option<String>,
    pub language: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub slow: Option<bool>,
    pub manifest_path: Option<PathBuf>,
}

/// Generator configuration
///
/// Contains everything needed for a run:
/// - Provider selection and synthesis options
/// - Output directory and optional manifest path
/// - OpenAI credentials and voice settings
/// - Optional scene catalog replacing the built-in one
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// TTS provider name or alias
    pub provider: String,
    /// Language code passed to the provider
    pub language: String,
    pub output_dir: PathBuf,
    /// Slower speech (Google Translate only)
    pub slow: bool,
    /// Google Translate host tld
    pub tld: String,
    /// Endpoint override for the selected provider
    pub endpoint: Option<String>,
    pub request_timeout_secs: u64,
    /// Where to write the id to file name manifest, if anywhere
    pub manifest_path: Option<PathBuf>,

    /// OpenAI API key for the `openai` provider
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub openai_voice: Option<String>,
    pub openai_speed: Option<f32>,

    /// Scenes from the config file; `None` uses the built-in catalog
    pub scenes: Option<Vec<SceneEntry>>,
}

impl Drop for GeneratorConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.openai_api_key {
            key.zeroize();
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables and defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = merge::merge_config(None)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file, falling back to environment
    /// variables and defaults for anything the file leaves out.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        let config = merge::merge_config(Some(yaml_config))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI overrides and re-validate.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(provider) = overrides.provider {
            self.provider = provider;
        }
        if let Some(language) = overrides.language {
            self.language = language;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(slow) = overrides.slow {
            self.slow = slow;
        }
        if let Some(manifest_path) = overrides.manifest_path {
            self.manifest_path = Some(manifest_path);
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_provider(&self.provider)?;
        validation::validate_language(&self.language)?;
        validation::validate_request_timeout(self.request_timeout_secs)?;
        validation::validate_endpoint(&self.endpoint)?;
        validation::validate_scenes(&self.scenes)?;
        Ok(())
    }

    /// Settings for the synthesizer factory.
    pub fn synthesizer_config(&self) -> SynthesizerConfig {
        let config = SynthesizerConfig {
            api_key: None,
            endpoint: self.endpoint.clone(),
            tld: self.tld.clone(),
            slow: self.slow,
            model: self.openai_model.clone(),
            voice: self.openai_voice.clone(),
            speaking_rate: self.openai_speed,
            request_timeout_secs: self.request_timeout_secs,
        };

        match self.openai_api_key {
            Some(ref key) => config.with_api_key(key.as_str()),
            None => config,
        }
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            language: self.language.clone(),
            output_dir: self.output_dir.clone(),
        }
    }

    /// Configured scenes, or the built-in catalog.
    pub fn scene_catalog(&self) -> Result<SceneCatalog, ConfigError> {
        match self.scenes {
            Some(ref scenes) => Ok(SceneCatalog::new(scenes.clone())?),
            None => Ok(SceneCatalog::default_scenes()),
        }
    }
}
