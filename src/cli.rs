//! CLI interface for the Hinglish translator

use crate::llm::prompts::TranslationTone;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hinglish")]
#[command(about = "Translate English or Hindi text and documents into Hinglish")]
#[command(long_about = "Translate typed text or .txt/.docx/.pdf documents into natural Hinglish (Hindi in Latin script) using a generative-text API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate text or a document into Hinglish
    Translate {
        /// Text to translate (read from --file or stdin when omitted)
        text: Option<String>,

        /// Document to translate (TXT, DOCX, PDF)
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Tone: casual or formal
        #[arg(short, long)]
        tone: Option<String>,

        /// Save the translation; without a path writes translated_<name>.txt
        #[arg(short, long, num_args = 0..=1)]
        save: Option<Option<PathBuf>>,
    },

    /// Extract plain text from a document without translating it
    Extract {
        /// Document to read (TXT, DOCX, PDF)
        file: PathBuf,

        /// Save extracted text to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate a tone name
pub fn parse_tone(tone: &str) -> Result<TranslationTone, String> {
    tone.parse()
}
