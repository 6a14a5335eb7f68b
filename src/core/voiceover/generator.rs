//! Sequential voiceover generation.
//!
//! For each scene, in declared order: synthesize the narration, write the MP3
//! to `{output_dir}/{id}_voiceover.mp3`, then report it. The first failure
//! stops the run. Audio is held in memory until synthesis of the scene is
//! complete, so a failed scene never leaves a file behind.

use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

use super::scene::{SceneCatalog, SceneEntry};
use crate::core::tts::{BoxedSynthesizer, TTSError};

/// Errors that stop a generation run.
#[derive(Debug, Error)]
pub enum VoiceoverError {
    #[error("Failed to synthesize scene '{scene_id}'")]
    Synthesis {
        scene_id: String,
        #[source]
        source: TTSError,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },
}

impl VoiceoverError {
    /// Scene that caused the failure, if any.
    pub fn scene_id(&self) -> Option<&str> {
        match self {
            Self::Synthesis { scene_id, .. } => Some(scene_id),
            _ => None,
        }
    }
}

/// One written voiceover file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceoverArtifact {
    pub scene_id: String,
    /// File name relative to the output directory
    pub file_name: String,
    pub path: PathBuf,
    pub bytes_written: usize,
}

/// Receives a notification for each saved voiceover.
pub trait ProgressSink: Send + Sync {
    fn saved(&self, artifact: &VoiceoverArtifact);
}

/// Prints `Voiceover saved: {file}` to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutProgress;

impl ProgressSink for StdoutProgress {
    fn saved(&self, artifact: &VoiceoverArtifact) {
        println!("{}", progress_line(artifact));
    }
}

/// Collects progress lines in memory.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    lines: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl ProgressSink for RecordingProgress {
    fn saved(&self, artifact: &VoiceoverArtifact) {
        self.lines.lock().push(progress_line(artifact));
    }
}

/// The line reported for a saved voiceover.
pub fn progress_line(artifact: &VoiceoverArtifact) -> String {
    format!("Voiceover saved: {}", artifact.file_name)
}

/// Per-run settings.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Language code passed to the synthesizer
    pub language: String,
    pub output_dir: PathBuf,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Paths a run over `catalog` would write, in order, without synthesizing.
pub fn plan(catalog: &SceneCatalog, output_dir: &Path) -> Vec<PathBuf> {
    catalog
        .iter()
        .map(|entry| output_dir.join(entry.file_name()))
        .collect()
}

/// Drives a synthesizer over a scene catalog.
pub struct VoiceoverGenerator {
    synthesizer: BoxedSynthesizer,
    options: GeneratorOptions,
    progress: Arc<dyn ProgressSink>,
}

impl VoiceoverGenerator {
    /// Create a generator reporting progress to stdout.
    pub fn new(synthesizer: BoxedSynthesizer, options: GeneratorOptions) -> Self {
        Self {
            synthesizer,
            options,
            progress: Arc::new(StdoutProgress),
        }
    }

    /// Replace the progress sink.
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Voice every scene in declared order, stopping at the first failure.
    pub async fn run(
        &self,
        catalog: &SceneCatalog,
    ) -> Result<Vec<VoiceoverArtifact>, VoiceoverError> {
        info!(
            provider = self.synthesizer.provider_name(),
            language = %self.options.language,
            output_dir = %self.options.output_dir.display(),
            scenes = catalog.len(),
            "Starting voiceover generation"
        );

        let mut artifacts = Vec::with_capacity(catalog.len());
        for entry in catalog {
            let artifact = self.generate_one(entry).await.inspect_err(|e| {
                error!(scene_id = %entry.id, error = ?e, "Voiceover generation failed");
            })?;
            artifacts.push(artifact);
        }

        info!(files = artifacts.len(), "Voiceover generation complete");
        Ok(artifacts)
    }

    /// Synthesize and write a single scene.
    pub async fn generate_one(
        &self,
        entry: &SceneEntry,
    ) -> Result<VoiceoverArtifact, VoiceoverError> {
        debug!(
            scene_id = %entry.id,
            chars = entry.narration.chars().count(),
            "Synthesizing scene"
        );

        let audio = self
            .synthesizer
            .synthesize(&entry.narration, &self.options.language)
            .await
            .and_then(|audio| {
                if audio.is_empty() {
                    Err(TTSError::AudioGenerationFailed(
                        "Synthesizer returned no audio".to_string(),
                    ))
                } else {
                    Ok(audio)
                }
            })
            .map_err(|source| VoiceoverError::Synthesis {
                scene_id: entry.id.clone(),
                source,
            })?;

        let file_name = entry.file_name();
        let path = self.options.output_dir.join(&file_name);

        tokio::fs::write(&path, &audio)
            .await
            .map_err(|source| VoiceoverError::Write {
                path: path.clone(),
                source,
            })?;

        let artifact = VoiceoverArtifact {
            scene_id: entry.id.clone(),
            file_name,
            path,
            bytes_written: audio.len(),
        };

        debug!(
            scene_id = %artifact.scene_id,
            path = %artifact.path.display(),
            bytes = artifact.bytes_written,
            "Voiceover written"
        );
        self.progress.saved(&artifact);

        Ok(artifact)
    }
}
