//! Error handling for the Hinglish translator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HinglishError {
    #[error("Unsupported file format. {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    ParseFailure(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    EmptyInput(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HinglishError>;

impl HinglishError {
    /// Whether the user can fix the failure by changing the input
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            HinglishError::UnsupportedFormat(_)
                | HinglishError::ParseFailure(_)
                | HinglishError::EmptyInput(_)
                | HinglishError::InvalidInput(_)
                | HinglishError::FileTooLarge { .. }
        )
    }

    /// Input mistakes are reported as warnings, everything else as errors
    pub fn log_level(&self) -> log::Level {
        if self.is_user_correctable() {
            log::Level::Warn
        } else {
            log::Level::Error
        }
    }
}
