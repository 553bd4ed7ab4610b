use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("OCR support is not compiled in. Rebuild with the `ocr` feature and install tesseract")]
    OcrUnavailable,

    #[error("Tesseract initialization failed: {details}")]
    OcrInitialization { details: String },

    #[error("OCR failed: {details}")]
    Ocr { details: String },

    #[error("Invalid image format or corrupted image: {details}")]
    InvalidImageFormat { details: String },

    #[error("Path is not valid UTF-8: {path}")]
    InvalidPath { path: String },

    #[error("Failed to parse PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ExtractionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ExtractionError::OcrUnavailable => "OCR_NOT_AVAILABLE",
            ExtractionError::OcrInitialization { .. } => "OCR_INIT_FAILED",
            ExtractionError::Ocr { .. } => "OCR_FAILED",
            ExtractionError::InvalidImageFormat { .. } => "OCR_INVALID_FORMAT",
            ExtractionError::InvalidPath { .. } => "INVALID_PATH",
            ExtractionError::Pdf(_) => "PDF_PARSE_FAILED",
            ExtractionError::Io(_) => "IO_ERROR",
        }
    }

    /// Errors caused by how the binary was built or the host was set up,
    /// rather than by the uploaded file.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ExtractionError::OcrUnavailable | ExtractionError::OcrInitialization { .. }
        )
    }
}
