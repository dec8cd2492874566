//! Hinglish translator library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;

pub use config::Config;
pub use error::{HinglishError, Result};
pub use input::{DocumentExtractor, UploadedFile};
pub use llm::{ensure_translatable, GeminiClient, TranslationTone, Translator};
