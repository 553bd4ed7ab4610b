use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

use crate::pipeline::OcrCorrection;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_address: String,
    /// Character limit for the text endpoint
    pub max_text_length: usize,
    /// Request body limit for uploads, in bytes
    pub max_upload_bytes: usize,
    pub ocr_language: String,
    pub ocr_correction: OcrCorrection,
    /// Staging directory for uploads; the system temp dir when unset
    pub temp_dir: Option<PathBuf>,
    /// Length of the `original_text` preview, in characters
    pub preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: "0.0.0.0:5000".to_string(),
            max_text_length: 20_000,
            max_upload_bytes: 16 * 1024 * 1024,
            ocr_language: "eng".to_string(),
            ocr_correction: OcrCorrection::default(),
            temp_dir: None,
            preview_chars: 1000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unparseable numbers fall
    /// back to their defaults; an unknown OCR correction mode is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let ocr_correction = match lookup("OCR_CORRECTION") {
            Some(mode) => mode.parse::<OcrCorrection>().map_err(|e| anyhow!(e))?,
            None => defaults.ocr_correction,
        };

        Ok(Config {
            server_address: lookup("SERVER_ADDRESS").unwrap_or(defaults.server_address),
            max_text_length: lookup("MAX_TEXT_LENGTH")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_text_length),
            max_upload_bytes: lookup("MAX_UPLOAD_MB")
                .and_then(|s| s.parse::<usize>().ok())
                .map(|mb| mb * 1024 * 1024)
                .unwrap_or(defaults.max_upload_bytes),
            ocr_language: lookup("OCR_LANGUAGE").unwrap_or(defaults.ocr_language),
            ocr_correction,
            temp_dir: lookup("TEMP_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            preview_chars: lookup("PREVIEW_CHARS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.preview_chars),
        })
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(env::temp_dir)
    }
}
