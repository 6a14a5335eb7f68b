//! Google Translate TTS provider module.
//!
//! Speech synthesis through the public Google Translate web endpoint. No API
//! key is required. The endpoint only accepts 100 characters per request, so
//! longer narration is tokenized and the returned MP3 chunks are concatenated.
//!
//! # Options
//!
//! - `tld`: host top-level domain (`com`, `co.uk`, `com.au`, ...), which picks
//!   the regional accent for some languages
//! - `slow`: slower speech
//! - `endpoint`: full URL override (proxies, tests)
//!
//! # Example
//!
//! ```rust,ignore
//! use voiceover_gen::core::tts::{create_synthesizer, SynthesizerConfig};
//!
//! let tts = create_synthesizer("google-translate", &SynthesizerConfig::default())?;
//! let mp3 = tts.synthesize("Hello, world!", "en").await?;
//! ```

mod config;
mod languages;
mod provider;
mod tokenizer;

pub use config::{GOOGLE_TTS_RPC, GoogleTranslateConfig, SpeechSpeed};
pub use languages::{SUPPORTED_LANGUAGES, language_name, resolve_language};
pub use provider::{GOOGLE_TRANSLATE_TTS_URL, GoogleTranslateTTS};
pub use tokenizer::{MAX_CHUNK_CHARS, preprocess, tokenize};
