//! Scene voiceover generation.
//!
//! A [`SceneCatalog`] lists narrations in the order they should be voiced.
//! [`VoiceoverGenerator`] walks it with a [`Synthesizer`](crate::core::tts::Synthesizer)
//! and writes one `{id}_voiceover.mp3` per scene.
//!
//! # Example
//!
//! ```rust,ignore
//! use voiceover_gen::core::tts::{create_synthesizer, SynthesizerConfig};
//! use voiceover_gen::core::voiceover::{GeneratorOptions, SceneCatalog, VoiceoverGenerator};
//!
//! let synthesizer = create_synthesizer("google-translate", &SynthesizerConfig::default())?;
//! let generator = VoiceoverGenerator::new(synthesizer, GeneratorOptions::default());
//! generator.run(&SceneCatalog::default_scenes()).await?;
//! ```

mod generator;
mod manifest;
mod scene;

pub use generator::{
    GeneratorOptions, ProgressSink, RecordingProgress, StdoutProgress, VoiceoverArtifact,
    VoiceoverError, VoiceoverGenerator, plan, progress_line,
};
pub use manifest::VoiceoverManifest;
pub use scene::{SceneCatalog, SceneEntry, SceneError, VOICEOVER_FILE_SUFFIX, voiceover_file_name};
