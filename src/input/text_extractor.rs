//! Text extraction backends for Word and PDF documents

use anyhow::{anyhow, Context};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

/// Word-document parser: raw bytes in, plain text out
pub trait WordTextExtractor: Send + Sync {
    fn extract_raw_text(&self, bytes: &[u8]) -> anyhow::Result<String>;
}

/// PDF parser: loads a document that can be read page by page
pub trait PdfTextExtractor: Send + Sync {
    fn load(&self, bytes: &[u8]) -> anyhow::Result<Box<dyn PdfDocument>>;
}

/// A loaded PDF. Pages are numbered from 1.
pub trait PdfDocument {
    fn page_count(&self) -> u32;

    fn page_tokens(&self, page: u32) -> anyhow::Result<Vec<String>>;
}

const DOCUMENT_XML: &str = "word/document.xml";

/// Reads `word/document.xml` out of the DOCX container and flattens it
/// to raw text: one blank line after each paragraph, tabs and breaks kept.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxTextExtractor;

impl WordTextExtractor for DocxTextExtractor {
    fn extract_raw_text(&self, bytes: &[u8]) -> anyhow::Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .context("not a zip container")?;
        let mut entry = archive
            .by_name(DOCUMENT_XML)
            .with_context(|| format!("missing {}", DOCUMENT_XML))?;

        let mut xml = String::new();
        entry.read_to_string(&mut xml)?;

        document_xml_to_text(&xml)
    }
}

fn document_xml_to_text(xml: &str) -> anyhow::Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run = false;
    let mut in_text = false;
    // Drawings and text boxes appear twice; only the mc:Fallback copy is read
    let mut choice_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"mc:Choice" => choice_depth += 1,
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"mc:Choice" => choice_depth = choice_depth.saturating_sub(1),
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                b"w:p" if choice_depth == 0 => text.push_str("\n\n"),
                _ => {}
            },
            Event::Empty(e) if choice_depth == 0 => match e.name().as_ref() {
                b"w:tab" if in_run => text.push('\t'),
                b"w:br" | b"w:cr" if in_run => text.push('\n'),
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Event::Text(t) if in_text && choice_depth == 0 => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

/// PDF backend built on `lopdf`
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfTextExtractor;

struct LopdfDocument {
    doc: lopdf::Document,
    page_numbers: Vec<u32>,
}

impl PdfTextExtractor for LopdfTextExtractor {
    fn load(&self, bytes: &[u8]) -> anyhow::Result<Box<dyn PdfDocument>> {
        let doc = lopdf::Document::load_mem(bytes).context("failed to load PDF")?;
        let page_numbers = doc.get_pages().keys().copied().collect();
        Ok(Box::new(LopdfDocument { doc, page_numbers }))
    }
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> u32 {
        self.page_numbers.len() as u32
    }

    fn page_tokens(&self, page: u32) -> anyhow::Result<Vec<String>> {
        let page_number = page
            .checked_sub(1)
            .and_then(|idx| self.page_numbers.get(idx as usize))
            .ok_or_else(|| anyhow!("page {} out of range", page))?;

        let text = self
            .doc
            .extract_text(&[*page_number])
            .with_context(|| format!("failed to extract text from page {}", page))?;

        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}
