//! Console rendering of translations and extracted text

use crate::output::report::{TextStats, TranslationReport};
use colored::{Color, Colorize};

pub struct ConsoleFormatter {
    use_colors: bool,
    show_stats: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, show_stats: bool) -> Self {
        Self { use_colors, show_stats }
    }

    pub fn format_translation(&self, report: &TranslationReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("Hinglish", Color::Green));
        output.push_str(&report.translation);
        if !report.translation.ends_with('\n') {
            output.push('\n');
        }

        if self.show_stats {
            output.push_str(&self.format_stats(&report.input_stats));
            output.push_str(&self.dim(&format!("Tone: {} | Model: {}\n", report.tone, report.model)));
        }

        output
    }

    pub fn format_extracted(&self, name: &str, text: &str) -> String {
        let mut output = self.format_header(name, Color::Blue);
        output.push_str(text);
        if !text.ends_with('\n') {
            output.push('\n');
        }
        if self.show_stats {
            output.push_str(&self.format_stats(&TextStats::of(text)));
        }
        output
    }

    fn format_stats(&self, stats: &TextStats) -> String {
        self.dim(&format!("\nWords: {} | Characters: {}\n", stats.words, stats.characters))
    }

    fn format_header(&self, title: &str, color: Color) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(color).bold(), title.color(color).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
