//! Turns an uploaded artifact into raw report text.
//!
//! Extraction never fails outward: PDF and OCR problems degrade to fixed
//! sentinel strings, unreadable plain text degrades to an empty string, and
//! every failure is logged.

pub mod error;
pub mod ocr;
pub mod pdf;

use std::path::Path;
use tracing::{debug, error, warn};

pub use error::ExtractionError;

pub const PDF_FALLBACK_TEXT: &str = "PDF content extraction failed. Please upload as text file.";
pub const IMAGE_FALLBACK_TEXT: &str =
    "Image text extraction failed. Please ensure image is clear and well-lit.";

/// Message returned for content types the extractor has no strategy for.
pub fn unsupported_type_message(content_type: &str) -> String {
    format!(
        "File type {} detected. Please provide text content directly for best results.",
        content_type
    )
}

#[derive(Debug, Clone)]
pub struct TextExtractor {
    ocr_language: String,
}

impl TextExtractor {
    pub fn new<S: Into<String>>(ocr_language: S) -> Self {
        Self { ocr_language: ocr_language.into() }
    }

    pub fn extract_text(&self, path: &Path, content_type: &str) -> String {
        debug!("Extracting text from {} as {}", path.display(), content_type);

        match content_type {
            "text/plain" => match read_plain_text(path) {
                Ok(text) => text,
                Err(e) => {
                    error!("Error extracting text from {}: {}", content_type, e);
                    String::new()
                }
            },
            "application/pdf" => match pdf::extract_text_from_pdf(path) {
                Ok(text) => text,
                Err(e) => {
                    error!("PDF extraction error [{}]: {}", e.error_code(), e);
                    PDF_FALLBACK_TEXT.to_string()
                }
            },
            image if image.starts_with("image/") => {
                match ocr::extract_text_from_image(path, &self.ocr_language) {
                    Ok(text) => text,
                    Err(e) => {
                        error!("OCR extraction error [{}]: {}", e.error_code(), e);
                        if e.is_configuration_error() {
                            warn!("Image uploads will keep failing until OCR is installed and enabled");
                        }
                        IMAGE_FALLBACK_TEXT.to_string()
                    }
                }
            }
            other => unsupported_type_message(other),
        }
    }
}

/// Reads a file as UTF-8, dropping any byte sequences that do not decode.
fn read_plain_text(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes)
        .chars()
        .filter(|c| *c != char::REPLACEMENT_CHARACTER)
        .collect())
}
