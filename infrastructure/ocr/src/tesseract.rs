use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use business::domain::menu::errors::OcrError;
use business::domain::menu::services::{OcrEngineProvider, OcrSession};

use crate::client::TesseractClient;

/// Hands out one Tesseract process per page.
pub struct TesseractProvider {
    client: Arc<TesseractClient>,
}

impl TesseractProvider {
    pub fn new(client: TesseractClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Reports the engine version, failing when the binary cannot be run.
    pub async fn version(&self) -> Result<String, OcrError> {
        let output = tokio::process::Command::new(&self.client.binary)
            .arg("--version")
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| engine_unavailable(&self.client, e))?;

        // Older releases print the version on stderr.
        let text = if output.stdout.is_empty() {
            output.stderr
        } else {
            output.stdout
        };

        Ok(String::from_utf8_lossy(&text)
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string())
    }
}

impl OcrEngineProvider for TesseractProvider {
    fn acquire(&self) -> Result<Box<dyn OcrSession>, OcrError> {
        Ok(Box::new(TesseractSession {
            client: self.client.clone(),
        }))
    }
}

/// A single recognition run; dropping it mid-call kills the child process.
pub struct TesseractSession {
    client: Arc<TesseractClient>,
}

#[async_trait]
impl OcrSession for TesseractSession {
    async fn recognize_lines(&mut self, path: &Path) -> Result<Vec<String>, OcrError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| OcrError::UnreadableImage(format!("{}: {}", path.display(), e)))?;
        if !metadata.is_file() {
            return Err(OcrError::UnreadableImage(format!(
                "{}: not a regular file",
                path.display()
            )));
        }

        let output = self
            .client
            .recognize_command(path)
            .output()
            .await
            .map_err(|e| engine_unavailable(&self.client, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("tesseract exited with {}", output.status)
            } else {
                stderr
            };
            return Err(OcrError::Recognition(reason));
        }

        Ok(parse_lines(&output.stdout))
    }
}

fn engine_unavailable(client: &TesseractClient, err: std::io::Error) -> OcrError {
    OcrError::EngineUnavailable(format!("{}: {}", client.binary.display(), err))
}

/// Splits Tesseract stdout into lines, dropping form feeds and trailing blank lines.
fn parse_lines(stdout: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(stdout);
    let mut lines: Vec<String> = text
        .lines()
        .map(|line| line.replace('\u{c}', ""))
        .collect();

    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines
}
