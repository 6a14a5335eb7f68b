//! OpenAI TTS provider module.
//!
//! Synthesis through OpenAI's Audio Speech API. Requires an API key
//! (`OPENAI_API_KEY`). The whole narration is sent in one request, up to
//! 4096 characters.
//!
//! # Supported Models
//!
//! - `tts-1` - Standard quality, lower latency
//! - `tts-1-hd` - High definition quality, higher latency
//! - `gpt-4o-mini-tts`
//!
//! # Supported Voices
//!
//! alloy, ash, ballad, coral, echo, fable, onyx, nova, sage, shimmer, verse
//!
//! # Example
//!
//! ```rust,ignore
//! use voiceover_gen::core::tts::{create_synthesizer, SynthesizerConfig};
//!
//! let config = SynthesizerConfig {
//!     voice: Some("nova".to_string()),
//!     model: Some("tts-1-hd".to_string()),
//!     ..Default::default()
//! }
//! .with_api_key("sk-...");
//!
//! let tts = create_synthesizer("openai", &config)?;
//! let mp3 = tts.synthesize("Hello, world!", "en").await?;
//! ```

mod config;
mod provider;

pub use config::{MAX_INPUT_CHARS, MAX_SPEED, MIN_SPEED, OpenAITTSModel, OpenAIVoice};
pub use provider::{OPENAI_TTS_URL, OpenAITTS};
