use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::{debug, warn};

use crate::content_type::SupportedContentType;

/// Writes `bytes` to a fresh temp file under `dir`, named with the content
/// type's extension so extractors that look at suffixes see the right one.
pub fn stage_upload(
    dir: &Path,
    content_type: SupportedContentType,
    bytes: &[u8],
) -> io::Result<NamedTempFile> {
    let mut file = Builder::new()
        .prefix("report-")
        .suffix(content_type.file_extension())
        .tempfile_in(dir)?;
    file.write_all(bytes)?;
    file.flush()?;
    debug!("Staged {} bytes at {}", bytes.len(), file.path().display());
    Ok(file)
}

/// Removes a staged file. Failure is logged and otherwise ignored.
pub fn release(file: NamedTempFile) {
    let path = file.path().to_path_buf();
    if let Err(e) = file.close() {
        warn!("Could not delete temp file {}: {}", path.display(), e);
    }
}

/// Stages `bytes`, hands the path to `process`, then removes the file
/// whatever `process` returned.
pub fn with_staged_upload<T, F>(
    dir: &Path,
    content_type: SupportedContentType,
    bytes: &[u8],
    process: F,
) -> io::Result<T>
where
    F: FnOnce(&Path) -> T,
{
    let staged = stage_upload(dir, content_type, bytes)?;
    let output = process(staged.path());
    release(staged);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn staged_file_carries_extension_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let staged = stage_upload(dir.path(), SupportedContentType::Pdf, b"%PDF-1.4").unwrap();

        let name = staged.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("report-"));
        assert!(name.ends_with(".pdf"));
        assert_eq!(fs::read(staged.path()).unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn file_is_removed_after_processing() {
        let dir = tempfile::tempdir().unwrap();

        let (seen_path, contents) = with_staged_upload(
            dir.path(),
            SupportedContentType::PlainText,
            b"Sodium 140",
            |path| (path.to_path_buf(), fs::read_to_string(path).unwrap()),
        )
        .unwrap();

        assert_eq!(contents, "Sodium 140");
        assert!(!seen_path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_staging_dir_is_an_error() {
        let result = with_staged_upload(
            Path::new("/nonexistent/staging"),
            SupportedContentType::PlainText,
            b"",
            |_| (),
        );
        assert!(result.is_err());
    }
}
