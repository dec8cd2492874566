//! LLM integration module

pub mod client;
pub mod prompts;
pub mod translator;

pub use client::{GeminiClient, GenerativeTextService};
pub use prompts::TranslationTone;
pub use translator::{ensure_translatable, Translator};
