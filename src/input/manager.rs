//! Document extraction: routes an uploaded file to the right extraction strategy

use crate::error::{HinglishError, Result};
use crate::input::file_detector::{supported_formats_hint, FileType};
use crate::input::text_extractor::{
    DocxTextExtractor, LopdfTextExtractor, PdfTextExtractor, WordTextExtractor,
};
use log::{debug, info, warn};
use std::path::Path;
use tokio::fs;

/// A file handed in by the user: its name and raw content
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, refusing anything above `max_bytes`
    pub async fn from_path(path: &Path, max_bytes: u64) -> Result<Self> {
        let metadata = fs::metadata(path).await.map_err(|_| {
            HinglishError::InvalidInput(format!("File does not exist: {}", path.display()))
        })?;

        if !metadata.is_file() {
            return Err(HinglishError::InvalidInput(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }
        if metadata.len() > max_bytes {
            return Err(HinglishError::FileTooLarge {
                size: metadata.len(),
                limit: max_bytes,
            });
        }

        let bytes = fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self { name, bytes })
    }

    pub fn file_type(&self) -> FileType {
        FileType::from_file_name(&self.name)
    }
}

pub struct DocumentExtractor {
    word: Box<dyn WordTextExtractor>,
    pdf: Box<dyn PdfTextExtractor>,
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor {
    pub fn new() -> Self {
        Self::with_parsers(Box::new(DocxTextExtractor), Box::new(LopdfTextExtractor))
    }

    pub fn with_parsers(word: Box<dyn WordTextExtractor>, pdf: Box<dyn PdfTextExtractor>) -> Self {
        Self { word, pdf }
    }

    pub async fn extract(&self, file: &UploadedFile) -> Result<String> {
        let text = match file.file_type() {
            FileType::Text => {
                info!("Reading plain text file: {}", file.name);
                self.extract_plain_text(&file.bytes)
            }
            FileType::Word => {
                info!("Extracting text from Word document: {}", file.name);
                self.extract_word(&file.bytes)?
            }
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", file.name);
                self.extract_pdf(&file.bytes)?
            }
            FileType::Unsupported => {
                return Err(HinglishError::UnsupportedFormat(format!(
                    "Please upload {}",
                    supported_formats_hint()
                )));
            }
        };

        debug!("Extracted {} characters from {}", text.len(), file.name);
        Ok(text)
    }

    pub async fn extract_path(&self, path: &Path, max_bytes: u64) -> Result<String> {
        let file = UploadedFile::from_path(path, max_bytes).await?;
        self.extract(&file).await
    }

    fn extract_plain_text(&self, bytes: &[u8]) -> String {
        match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(e) => {
                warn!("Text file is not valid UTF-8 ({}), replacing invalid sequences", e);
                String::from_utf8_lossy(bytes).into_owned()
            }
        }
    }

    fn extract_word(&self, bytes: &[u8]) -> Result<String> {
        self.word.extract_raw_text(bytes).map_err(|e| {
            debug!("Word parser error: {:#}", e);
            parse_failure(FileType::Word)
        })
    }

    fn extract_pdf(&self, bytes: &[u8]) -> Result<String> {
        let pdf_failure = |e: anyhow::Error| {
            debug!("PDF parser error: {:#}", e);
            parse_failure(FileType::Pdf)
        };

        let document = self.pdf.load(bytes).map_err(pdf_failure)?;
        let mut full_text = String::new();

        for page in 1..=document.page_count() {
            let tokens = document.page_tokens(page).map_err(pdf_failure)?;
            full_text.push_str(&tokens.join(" "));
            full_text.push('\n');
        }

        Ok(full_text)
    }
}

fn parse_failure(file_type: FileType) -> HinglishError {
    HinglishError::ParseFailure(format!(
        "Failed to parse .{} file",
        file_type.extension().unwrap_or_default()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::text_extractor::PdfDocument;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default, Clone)]
    struct CountingWord {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl WordTextExtractor for CountingWord {
        fn extract_raw_text(&self, _bytes: &[u8]) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(anyhow!("central directory end not found"))
            } else {
                Ok("Namaste duniya\n\n".to_string())
            }
        }
    }

    #[derive(Default, Clone)]
    struct FakePdf {
        pages: Vec<Vec<&'static str>>,
        failing_page: Option<u32>,
        loads: Arc<AtomicUsize>,
    }

    impl PdfTextExtractor for FakePdf {
        fn load(&self, _bytes: &[u8]) -> anyhow::Result<Box<dyn PdfDocument>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(self.clone()))
        }
    }

    impl PdfDocument for FakePdf {
        fn page_count(&self) -> u32 {
            self.pages.len() as u32
        }

        fn page_tokens(&self, page: u32) -> anyhow::Result<Vec<String>> {
            if self.failing_page == Some(page) {
                return Err(anyhow!("broken content stream"));
            }
            Ok(self.pages[(page - 1) as usize].iter().map(|s| s.to_string()).collect())
        }
    }

    fn extractor(word: CountingWord, pdf: FakePdf) -> DocumentExtractor {
        DocumentExtractor::with_parsers(Box::new(word), Box::new(pdf))
    }

    #[tokio::test]
    async fn test_text_is_returned_unchanged() {
        let content = "Line one\r\n  indented line\n\nमुझे कल दिल्ली जाना है।\n";
        let file = UploadedFile::new("notes.txt", content.as_bytes());

        let text = DocumentExtractor::new().extract(&file).await.unwrap();
        assert_eq!(text, content);
    }

    #[tokio::test]
    async fn test_pdf_pages_are_joined_in_order() {
        let pdf = FakePdf {
            pages: vec![vec!["Page", "one", "text"], vec![], vec!["Last", "page"]],
            ..Default::default()
        };
        let file = UploadedFile::new("doc.pdf", b"%PDF".to_vec());

        let text = extractor(CountingWord::default(), pdf).extract(&file).await.unwrap();
        assert_eq!(text, "Page one text\n\nLast page\n");
        assert_eq!(text.matches('\n').count(), 3);
    }

    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        use lopdf::content::{Content, Operation};
        use lopdf::{dictionary, Document, Object, Stream};

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for line in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_real_pdf_pages_in_order() {
        let bytes = build_pdf(&["Hello world  page", "Second page here"]);
        let file = UploadedFile::new("two_pages.pdf", bytes);

        let text = DocumentExtractor::new().extract(&file).await.unwrap();
        assert_eq!(text, "Hello world page\nSecond page here\n");
    }

    #[tokio::test]
    async fn test_pdf_page_failure_is_parse_failure() {
        let pdf = FakePdf {
            pages: vec![vec!["ok"], vec!["broken"]],
            failing_page: Some(2),
            ..Default::default()
        };
        let file = UploadedFile::new("doc.pdf", b"%PDF".to_vec());

        let err = extractor(CountingWord::default(), pdf).extract(&file).await.unwrap_err();
        assert!(matches!(err, HinglishError::ParseFailure(_)));
        assert_eq!(err.to_string(), "Failed to parse .pdf file");
    }

    #[tokio::test]
    async fn test_word_failure_hides_parser_detail() {
        let word = CountingWord {
            fail: true,
            ..Default::default()
        };
        let file = UploadedFile::new("letter.docx", b"garbage".to_vec());

        let err = extractor(word, FakePdf::default()).extract(&file).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse .docx file");
        assert!(!err.to_string().contains("central directory"));
    }

    #[tokio::test]
    async fn test_unsupported_format_never_calls_parsers() {
        let word = CountingWord::default();
        let pdf = FakePdf::default();
        let word_calls = word.calls.clone();
        let pdf_loads = pdf.loads.clone();
        let extractor = extractor(word, pdf);

        for name in ["story.rtf", "README", "slides.pptx"] {
            let err = extractor
                .extract(&UploadedFile::new(name, b"data".to_vec()))
                .await
                .unwrap_err();
            assert!(matches!(err, HinglishError::UnsupportedFormat(_)));
            assert_eq!(
                err.to_string(),
                "Unsupported file format. Please upload .txt, .docx, or .pdf"
            );
        }

        assert_eq!(word_calls.load(Ordering::SeqCst), 0);
        assert_eq!(pdf_loads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_word_dispatch_uses_word_parser() {
        let word = CountingWord::default();
        let calls = word.calls.clone();
        let file = UploadedFile::new("LETTER.DOCX", b"PK".to_vec());

        let text = extractor(word, FakePdf::default()).extract(&file).await.unwrap();
        assert_eq!(text, "Namaste duniya\n\n");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_utf8_text_is_decoded_lossily() {
        let file = UploadedFile::new("broken.txt", vec![b'h', b'i', 0xff]);
        let text = DocumentExtractor::new().extract(&file).await.unwrap();
        assert_eq!(text, "hi\u{fffd}");
    }
}
