use std::path::Path;

use super::error::ExtractionError;

#[cfg(feature = "ocr")]
use tesseract::Tesseract;

/// Runs tesseract over the whole image and returns the recognised text.
pub fn extract_text_from_image(path: &Path, lang: &str) -> Result<String, ExtractionError> {
    #[cfg(feature = "ocr")]
    {
        let path_str = path.to_str().ok_or_else(|| ExtractionError::InvalidPath {
            path: path.display().to_string(),
        })?;

        // Decode the header first so corrupt uploads are reported as such
        let (width, height) = image::ImageReader::open(path)?
            .with_guessed_format()?
            .into_dimensions()
            .map_err(|e| ExtractionError::InvalidImageFormat { details: e.to_string() })?;
        tracing::debug!("Running OCR on {}x{} image {}", width, height, path_str);

        let mut tesseract = Tesseract::new(None, Some(lang))
            .map_err(|e| ExtractionError::OcrInitialization { details: e.to_string() })?
            .set_image(path_str)
            .map_err(|e| ExtractionError::Ocr { details: e.to_string() })?;

        let text = tesseract
            .get_text()
            .map_err(|e| ExtractionError::Ocr { details: format!("Failed to extract text: {}", e) })?;

        Ok(text)
    }

    #[cfg(not(feature = "ocr"))]
    {
        let _ = (path, lang);
        Err(ExtractionError::OcrUnavailable)
    }
}
