use std::path::{Path, PathBuf};

use poem_openapi::types::multipart::Upload;
use uuid::Uuid;

const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "pdf"];

/// Page files written to disk for OCR. Removed when dropped.
#[derive(Debug, Default)]
pub struct StagedPages {
    paths: Vec<PathBuf>,
}

impl StagedPages {
    pub fn push(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Drop for StagedPages {
    fn drop(&mut self) {
        for path in &self.paths {
            if let Err(err) = std::fs::remove_file(path) {
                tracing::warn!("Could not remove staged page {}: {}", path.display(), err);
            }
        }
    }
}

pub struct StagingOutcome {
    pub pages: StagedPages,
    /// One message per upload that was rejected or could not be saved.
    pub errors: Vec<String>,
}

/// Checks an upload's name and size. Returns the lower-cased extension to stage it under.
pub fn validate_upload(file_name: &str, size: usize, max_bytes: usize) -> Result<String, String> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        let shown = if extension.is_empty() {
            "no extension".to_string()
        } else {
            format!(".{}", extension)
        };
        return Err(format!("unsupported file type for {}: {}", file_name, shown));
    }

    if size > max_bytes {
        return Err(format!(
            "file {} is {} bytes, above the {} byte limit",
            file_name, size, max_bytes
        ));
    }

    Ok(extension)
}

/// Validates every upload and writes the accepted ones into `dir` under fresh names.
pub async fn stage_uploads(uploads: Vec<Upload>, dir: &Path, max_bytes: usize) -> StagingOutcome {
    let mut pages = StagedPages::default();
    let mut errors = Vec::new();

    for upload in uploads {
        let file_name = upload.file_name().unwrap_or("unnamed").to_string();
        let extension = match validate_upload(&file_name, upload.size(), max_bytes) {
            Ok(extension) => extension,
            Err(reason) => {
                errors.push(reason);
                continue;
            }
        };

        let target = dir.join(format!("{}.{}", Uuid::new_v4(), extension));
        let saved = match upload.into_vec().await {
            Ok(bytes) => tokio::fs::write(&target, bytes).await,
            Err(err) => Err(err),
        };

        match saved {
            Ok(()) => pages.push(target),
            Err(err) => {
                let _ = tokio::fs::remove_file(&target).await;
                errors.push(format!("failed to save file {}: {}", file_name, err));
            }
        }
    }

    StagingOutcome { pages, errors }
}
