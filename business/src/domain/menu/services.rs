use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::errors::OcrError;
use super::model::PageScan;

/// One OCR engine instance, owned by a single page scan and released on drop.
///
/// Implementations must treat the whole image as a single block of text
/// (no column or region detection).
#[async_trait]
pub trait OcrSession: Send {
    /// Recognizes the page at `path` and returns its text line by line.
    /// An empty vector means nothing was found, which is not an error.
    async fn recognize_lines(&mut self, path: &Path) -> Result<Vec<String>, OcrError>;
}

/// Service port handing out independent OCR sessions, one per page.
pub trait OcrEngineProvider: Send + Sync {
    fn acquire(&self) -> Result<Box<dyn OcrSession>, OcrError>;
}

/// Service port turning a set of page files into one aggregated text blob.
///
/// Never fails as a whole: pages that cannot be recognized are reported in
/// [`PageScan::failures`] while the others still contribute text.
#[async_trait]
pub trait PageScannerService: Send + Sync {
    async fn scan_pages(&self, paths: &[PathBuf]) -> PageScan;
}
