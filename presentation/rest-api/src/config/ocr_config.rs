use std::env;
use std::path::PathBuf;
use std::time::Duration;

use business::application::menu::page_scanner::ScannerOptions;

use super::env_parse::{non_empty, parse_optional_secs, parse_usize};

/// Configuration for the OCR engine and the page scanner pool.
pub struct OcrConfig {
    pub binary: PathBuf,
    pub language: String,
    pub tessdata_dir: Option<PathBuf>,
    pub max_concurrent_pages: usize,
    pub page_timeout: Option<Duration>,
}

impl OcrConfig {
    /// Load OCR configuration from environment variables
    ///
    /// Environment variables:
    /// - TESSERACT_PATH: OCR binary (default: "tesseract")
    /// - TESSDATA_DIR: Language data directory (default: engine's own)
    /// - OCR_LANGUAGE: Recognition language (default: "eng")
    /// - OCR_MAX_CONCURRENT_PAGES: Pages recognized at once (default: 4)
    /// - OCR_PAGE_TIMEOUT_SECS: Per-page deadline, 0 or unset for none
    pub fn from_env() -> Self {
        let defaults = ScannerOptions::default();
        Self {
            binary: non_empty(env::var("TESSERACT_PATH").ok())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("tesseract")),
            language: non_empty(env::var("OCR_LANGUAGE").ok()).unwrap_or_else(|| "eng".to_string()),
            tessdata_dir: non_empty(env::var("TESSDATA_DIR").ok()).map(PathBuf::from),
            max_concurrent_pages: parse_usize(
                env::var("OCR_MAX_CONCURRENT_PAGES").ok(),
                defaults.max_concurrent_pages,
            )
            .max(1),
            page_timeout: parse_optional_secs(env::var("OCR_PAGE_TIMEOUT_SECS").ok()),
        }
    }

    pub fn scanner_options(&self) -> ScannerOptions {
        ScannerOptions {
            max_concurrent_pages: self.max_concurrent_pages,
            page_timeout: self.page_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_config_to_scanner_options() {
        // Arrange
        let config = OcrConfig {
            binary: PathBuf::from("tesseract"),
            language: "eng".to_string(),
            tessdata_dir: None,
            max_concurrent_pages: 2,
            page_timeout: Some(Duration::from_secs(20)),
        };

        // Act
        let options = config.scanner_options();

        // Assert
        assert_eq!(options.max_concurrent_pages, 2);
        assert_eq!(options.page_timeout, Some(Duration::from_secs(20)));
    }
}
