/// Failure of a single OCR page.
/// Code-style identifiers for i18n compatibility; the detail carries the engine's own message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OcrError {
    #[error("ocr.unreadable_image: {0}")]
    UnreadableImage(String),
    #[error("ocr.engine_unavailable: {0}")]
    EngineUnavailable(String),
    #[error("ocr.recognition_failed: {0}")]
    Recognition(String),
    #[error("ocr.timeout: {0}")]
    Timeout(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MenuScanError {
    /// The caller supplied no pages to scan.
    #[error("menu.no_pages")]
    NoPages,
}
