//! Output module: console rendering and saved translations

pub mod formatter;
pub mod report;

pub use formatter::ConsoleFormatter;
pub use report::{save_text, TextStats, TranslationReport};
