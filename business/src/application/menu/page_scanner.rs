use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;

use crate::domain::logger::Logger;
use crate::domain::menu::errors::OcrError;
use crate::domain::menu::model::{PageFailure, PageOutcome, PageScan};
use crate::domain::menu::services::{OcrEngineProvider, PageScannerService};

const DEFAULT_MAX_CONCURRENT_PAGES: usize = 4;

/// Tuning for [`ConcurrentPageScanner`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScannerOptions {
    /// Pages allowed in OCR at the same time. Values below 1 are treated as 1.
    pub max_concurrent_pages: usize,
    /// Deadline for a single OCR call. `None` waits as long as the engine takes.
    pub page_timeout: Option<Duration>,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            max_concurrent_pages: DEFAULT_MAX_CONCURRENT_PAGES,
            page_timeout: None,
        }
    }
}

/// Runs OCR on every page in its own task and gathers the results once all
/// of them have finished.
///
/// Each task acquires its own engine session, so sessions are never shared.
/// Results arrive over a channel in completion order and are put back in
/// input order before the text is joined.
pub struct ConcurrentPageScanner {
    pub engine: Arc<dyn OcrEngineProvider>,
    pub options: ScannerOptions,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PageScannerService for ConcurrentPageScanner {
    async fn scan_pages(&self, paths: &[PathBuf]) -> PageScan {
        let permits = Arc::new(Semaphore::new(self.options.max_concurrent_pages.max(1)));
        let (sender, mut receiver) = mpsc::unbounded_channel::<PageOutcome>();
        let mut tasks = JoinSet::new();

        for (index, path) in paths.iter().cloned().enumerate() {
            let engine = self.engine.clone();
            let permits = permits.clone();
            let sender = sender.clone();
            let timeout = self.options.page_timeout;

            tasks.spawn(async move {
                let result = scan_page(engine.as_ref(), &path, &permits, timeout).await;
                // The receiver lives until every sender is gone.
                let _ = sender.send(PageOutcome {
                    index,
                    path,
                    result,
                });
            });
        }
        drop(sender);

        let mut outcomes = Vec::with_capacity(paths.len());
        while let Some(outcome) = receiver.recv().await {
            match &outcome.result {
                Ok(_) => self.logger.debug(&format!(
                    "Processed page {}: {}",
                    outcome.index,
                    outcome.path.display()
                )),
                Err(err) => self.logger.warn(&format!(
                    "Page {} failed: {}: {}",
                    outcome.index,
                    outcome.path.display(),
                    err
                )),
            }
            outcomes.push(outcome);
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(err) = joined {
                self.logger.error(&format!("Page task ended abnormally: {}", err));
            }
        }

        collect_missing_pages(paths, &mut outcomes);
        aggregate(outcomes)
    }
}

async fn scan_page(
    engine: &dyn OcrEngineProvider,
    path: &Path,
    permits: &Semaphore,
    timeout: Option<Duration>,
) -> Result<String, OcrError> {
    let _permit = permits
        .acquire()
        .await
        .map_err(|_| OcrError::EngineUnavailable("scanner pool closed".to_string()))?;

    let mut session = engine.acquire()?;
    let lines = match timeout {
        Some(limit) => tokio::time::timeout(limit, session.recognize_lines(path))
            .await
            .map_err(|_| {
                OcrError::Timeout(format!("no result after {} ms", limit.as_millis()))
            })??,
        None => session.recognize_lines(path).await?,
    };

    Ok(lines.join("\n"))
}

/// A task that panicked never sent its outcome; report those pages as failed.
fn collect_missing_pages(paths: &[PathBuf], outcomes: &mut Vec<PageOutcome>) {
    let mut seen = vec![false; paths.len()];
    for outcome in outcomes.iter() {
        if let Some(slot) = seen.get_mut(outcome.index) {
            *slot = true;
        }
    }

    for (index, path) in paths.iter().enumerate() {
        if !seen[index] {
            outcomes.push(PageOutcome {
                index,
                path: path.clone(),
                result: Err(OcrError::Recognition(
                    "page task ended without a result".to_string(),
                )),
            });
        }
    }
}

fn aggregate(mut outcomes: Vec<PageOutcome>) -> PageScan {
    outcomes.sort_by_key(|o| o.index);

    let mut pages = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Ok(text) => pages.push(text),
            Err(reason) => failures.push(PageFailure {
                path: outcome.path,
                reason,
            }),
        }
    }

    PageScan {
        text: pages.join("\n"),
        failures,
    }
}
