use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use voiceover_gen::core::tts::{
    SUPPORTED_PROVIDERS, create_synthesizer, get_synthesizer_urls,
    google_translate::SUPPORTED_LANGUAGES,
};
use voiceover_gen::core::voiceover::{VoiceoverGenerator, VoiceoverManifest, plan};
use voiceover_gen::{ConfigOverrides, GeneratorConfig};

/// Scene voiceover generator - renders narration text to MP3 files
#[derive(Parser, Debug)]
#[command(name = "voiceover-gen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Language code for synthesis [default: en]
    #[arg(short = 'l', long = "lang", value_name = "CODE")]
    lang: Option<String>,

    /// Directory the voiceover files are written to [default: .]
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// TTS provider (google-translate, openai) [default: google-translate]
    #[arg(short = 'p', long = "provider", value_name = "NAME")]
    provider: Option<String>,

    /// Slower speech (Google Translate only)
    #[arg(long = "slow")]
    slow: bool,

    /// Write a JSON manifest of scene id to file name after a successful run
    #[arg(long = "manifest", value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Print the files that would be written and exit without synthesizing
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available TTS providers and their default endpoints
    Providers,

    /// List language codes supported by the Google Translate provider
    Languages,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            provider: self.provider.clone(),
            language: self.lang.clone(),
            output_dir: self.output_dir.clone(),
            slow: self.slow.then_some(true),
            manifest_path: self.manifest.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries only the progress lines
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(ref command) = cli.command {
        match command {
            Commands::Providers => {
                let urls = get_synthesizer_urls();
                for provider in SUPPORTED_PROVIDERS {
                    let url = urls.get(*provider).map(String::as_str).unwrap_or("-");
                    println!("{provider}\t{url}");
                }
            }
            Commands::Languages => {
                for (code, name) in SUPPORTED_LANGUAGES {
                    println!("{code}\t{name}");
                }
            }
        }
        return Ok(());
    }

    // Load configuration from file or environment
    let config = match cli.config {
        Some(ref config_path) => {
            info!(path = %config_path.display(), "Loading configuration");
            GeneratorConfig::from_file(config_path)
                .with_context(|| format!("Failed to load {}", config_path.display()))?
        }
        None => GeneratorConfig::from_env().context("Failed to load configuration")?,
    }
    .with_overrides(cli.overrides())
    .context("Invalid command line option")?;

    let catalog = config.scene_catalog()?;

    if cli.dry_run {
        for path in plan(&catalog, &config.output_dir) {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let synthesizer = create_synthesizer(&config.provider, &config.synthesizer_config())
        .with_context(|| format!("Failed to initialize TTS provider '{}'", config.provider))?;

    let output_dir = config.output_dir.display();
    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| format!("Failed to create output directory {output_dir}"))?;

    let generator = VoiceoverGenerator::new(synthesizer, config.generator_options());
    let artifacts = generator.run(&catalog).await?;

    if let Some(ref manifest_path) = config.manifest_path {
        VoiceoverManifest::from_artifacts(&artifacts)
            .write(manifest_path)
            .await?;
    }

    Ok(())
}
