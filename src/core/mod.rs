pub mod tts;
pub mod voiceover;

// Re-export commonly used types for convenience
pub use tts::{
    BoxedSynthesizer, Synthesizer, SynthesizerConfig, TTSError, TTSResult, create_synthesizer,
    get_synthesizer_urls,
};

pub use voiceover::{
    GeneratorOptions, SceneCatalog, SceneEntry, SceneError, VoiceoverArtifact, VoiceoverError,
    VoiceoverGenerator, VoiceoverManifest,
};
