//! Hinglish translation on top of a generative-text service

use crate::error::{HinglishError, Result};
use crate::llm::client::{GenerationRequest, GenerativeTextService};
use crate::llm::prompts::{PromptTemplates, TranslationTone};
use log::{error, info, warn};
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const FALLBACK_TRANSLATION: &str = "Translation failed. Please try again.";

const SERVICE_UNAVAILABLE_MESSAGE: &str = "Failed to connect to the translation service.";
const EMPTY_INPUT_MESSAGE: &str = "Please enter some text or upload a file.";

static DEVANAGARI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Devanagari}").expect("static regex"));

fn contains_devanagari(text: &str) -> bool {
    DEVANAGARI.is_match(text)
}

/// Caller-side check run before any translation request
pub fn ensure_translatable(text: &str) -> Result<&str> {
    if text.trim().is_empty() {
        return Err(HinglishError::EmptyInput(EMPTY_INPUT_MESSAGE.to_string()));
    }
    Ok(text)
}

pub struct Translator<S> {
    service: S,
    templates: PromptTemplates,
    model: String,
    temperature: f64,
}

impl<S: GenerativeTextService> Translator<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            templates: PromptTemplates::default(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Translate non-empty text into Hinglish with a single service call
    pub async fn translate(&self, text: &str, tone: TranslationTone) -> Result<String> {
        let request = GenerationRequest {
            model: self.model.clone(),
            contents: text.to_string(),
            system_instruction: self.templates.render_system_instruction(tone),
            temperature: self.temperature,
        };

        info!("Translating {} characters ({} tone) with {}", text.len(), tone, self.model);

        let response = self.service.generate(&request).await.map_err(|e| {
            error!("Translation service error: {:#}", e);
            HinglishError::ServiceUnavailable(SERVICE_UNAVAILABLE_MESSAGE.to_string())
        })?;

        match response.text {
            Some(text) if !text.is_empty() => {
                if contains_devanagari(&text) {
                    warn!("Translation contains Devanagari characters");
                }
                Ok(text)
            }
            _ => {
                warn!("Translation service returned no text");
                Ok(FALLBACK_TRANSLATION.to_string())
            }
        }
    }
}
