//! Translation report and saved-output helpers

use crate::error::Result;
use crate::llm::prompts::TranslationTone;
use std::path::{Path, PathBuf};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            characters: text.graphemes(true).count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranslationReport {
    pub source_name: Option<String>,
    pub tone: TranslationTone,
    pub model: String,
    pub input_stats: TextStats,
    pub translation: String,
}

impl TranslationReport {
    pub fn new(
        source_name: Option<String>,
        tone: TranslationTone,
        model: &str,
        input: &str,
        translation: String,
    ) -> Self {
        Self {
            source_name,
            tone,
            model: model.to_string(),
            input_stats: TextStats::of(input),
            translation,
        }
    }

    /// `translated_<stem>.txt`, using the part of the source name before its
    /// first dot, or `text` when the input was typed in
    pub fn download_file_name(&self) -> String {
        let stem = self
            .source_name
            .as_deref()
            .and_then(|name| name.split('.').next())
            .filter(|stem| !stem.is_empty())
            .unwrap_or("text");
        format!("translated_{}.txt", stem)
    }
}

/// Write text to `path`, creating parent directories as needed
pub async fn save_text(path: &Path, text: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, text).await?;
    Ok(path.to_path_buf())
}
