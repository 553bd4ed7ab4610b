//! Upload content types accepted by the file endpoint.
//!
//! Only the declared multipart content type is consulted; files are never
//! sniffed. `image/jpg` is accepted alongside `image/jpeg`.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedContentType {
    PlainText,
    Pdf,
    Jpeg,
    Jpg,
    Png,
}

impl SupportedContentType {
    pub const ALL: [SupportedContentType; 5] = [
        SupportedContentType::PlainText,
        SupportedContentType::Pdf,
        SupportedContentType::Jpeg,
        SupportedContentType::Jpg,
        SupportedContentType::Png,
    ];

    pub fn mime_type(&self) -> &'static str {
        match self {
            SupportedContentType::PlainText => "text/plain",
            SupportedContentType::Pdf => "application/pdf",
            SupportedContentType::Jpeg => "image/jpeg",
            SupportedContentType::Jpg => "image/jpg",
            SupportedContentType::Png => "image/png",
        }
    }

    /// Suffix for the staged temp file, so downstream tools that look at
    /// extensions see the right one.
    pub fn file_extension(&self) -> &'static str {
        match self {
            SupportedContentType::PlainText => ".txt",
            SupportedContentType::Pdf => ".pdf",
            SupportedContentType::Jpeg | SupportedContentType::Jpg => ".jpg",
            SupportedContentType::Png => ".png",
        }
    }

    /// Matches a declared content type exactly, ignoring any `; charset=...`
    /// parameters and ASCII case.
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type.split(';').next().unwrap_or("").trim();
        Self::ALL
            .into_iter()
            .find(|t| t.mime_type().eq_ignore_ascii_case(essence))
    }

    pub fn supported_mime_types() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.mime_type()).collect()
    }
}

/// Best-effort content type for a local file, from its extension.
pub fn guess_content_type(path: &Path) -> Option<&'static str> {
    mime_guess::from_path(path).first_raw()
}
