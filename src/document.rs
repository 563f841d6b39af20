// src/document.rs

use lopdf::Document;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Minimum number of non-whitespace characters we expect from a
/// "real" text PDF. Below this threshold we warn that it may be scanned.
pub const MIN_TEXT_CHARS: usize = 30;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("No claim document supplied")]
    NoInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parsing failed: {0}")]
    Pdf(String),

    #[error("PDF is scanned or image-only; OCR is not supported")]
    Scanned,
}

/// How the raw bytes of a claim document are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
}

impl DocumentFormat {
    /// `.pdf` (any case) is a PDF; anything else is read as text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => Self::Pdf,
            _ => Self::PlainText,
        }
    }
}

/// Read a claim document from disk, or from stdin when `path` is `-`.
pub fn load_document(path: &Path, min_text_chars: usize) -> Result<String, DocumentError> {
    if path.as_os_str() == "-" {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        return load_bytes(&bytes, DocumentFormat::PlainText, min_text_chars);
    }

    let bytes = std::fs::read(path)?;
    let format = DocumentFormat::from_path(path);
    info!(path = %path.display(), bytes = bytes.len(), format = ?format, "Loaded document");
    load_bytes(&bytes, format, min_text_chars)
}

/// Decode raw document bytes into the text handed to the claim pipeline.
///
/// Empty or near-empty text is still returned; the pipeline routes it to
/// manual review.
pub fn load_bytes(
    bytes: &[u8],
    format: DocumentFormat,
    min_text_chars: usize,
) -> Result<String, DocumentError> {
    match format {
        DocumentFormat::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
        DocumentFormat::Pdf => extract_text_from_pdf(bytes, min_text_chars),
    }
}

fn extract_text_from_pdf(pdf_bytes: &[u8], min_text_chars: usize) -> Result<String, DocumentError> {
    // --- Phase 1: structural check with lopdf ---
    let doc = Document::load_mem(pdf_bytes)
        .map_err(|e| DocumentError::Pdf(format!("Failed to parse PDF: {e}")))?;

    if looks_like_scanned(&doc) {
        info!("PDF structural check: likely scanned / image-only");
        return Err(DocumentError::Scanned);
    }

    // --- Phase 2: full text extraction ---
    match pdf_extract::extract_text_from_mem(pdf_bytes) {
        Ok(text) => {
            let meaningful = text.chars().filter(|c| !c.is_whitespace()).count();
            if meaningful < min_text_chars {
                warn!(
                    chars = meaningful,
                    min = min_text_chars,
                    "Extracted text is short — PDF may be partly scanned"
                );
            } else {
                info!(chars = meaningful, "Text extracted successfully");
            }
            Ok(text)
        }
        Err(e) => {
            warn!(error = %e, "pdf-extract failed — may be scanned or corrupted");
            Err(DocumentError::Pdf(e.to_string()))
        }
    }
}

/// Heuristic: a page with XObject images but no Font resources is
/// almost certainly a scanned page.
fn looks_like_scanned(doc: &Document) -> bool {
    let pages = doc.get_pages();
    if pages.is_empty() {
        return false; // Can't tell — let text extraction try
    }

    let image_only_pages = pages
        .values()
        .filter(|&&object_id| {
            let Some(page_dict) = doc.get_object(object_id).ok().and_then(|o| o.as_dict().ok())
            else {
                return false;
            };
            let resources = page_dict
                .get(b"Resources")
                .ok()
                .and_then(|r| doc.dereference(r).ok())
                .and_then(|(_, resolved)| resolved.as_dict().ok());
            let has_entries = |key: &[u8]| {
                resources
                    .and_then(|res| res.get(key).ok())
                    .and_then(|v| doc.dereference(v).ok())
                    .and_then(|(_, resolved)| resolved.as_dict().ok())
                    .is_some_and(|dict| !dict.is_empty())
            };
            has_entries(b"XObject") && !has_entries(b"Font")
        })
        .count();

    let total = pages.len();
    let ratio = image_only_pages as f64 / total as f64;
    info!(
        total_pages = total,
        image_only = image_only_pages,
        ratio = format!("{ratio:.2}"),
        "Scanned-page analysis"
    );

    // If ≥80% of pages are image-only, treat the whole PDF as scanned
    ratio >= 0.8
}
