//! File type detection

/// Accepted upload formats, in the order shown to users
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "docx", "pdf"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Text,
    Word,
    Pdf,
    Unsupported,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" => FileType::Text,
            "docx" => FileType::Word,
            "pdf" => FileType::Pdf,
            _ => FileType::Unsupported,
        }
    }

    /// Detect from a file name. Only the text after the last dot counts,
    /// and a name without a dot is unsupported.
    pub fn from_file_name(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => FileType::Unsupported,
        }
    }

    pub fn extension(&self) -> Option<&'static str> {
        match self {
            FileType::Text => Some("txt"),
            FileType::Word => Some("docx"),
            FileType::Pdf => Some("pdf"),
            FileType::Unsupported => None,
        }
    }
}

/// Human-readable list of accepted formats, e.g. ".txt, .docx, or .pdf"
pub fn supported_formats_hint() -> String {
    let dotted: Vec<String> = SUPPORTED_EXTENSIONS.iter().map(|e| format!(".{}", e)).collect();
    match dotted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}
