use std::sync::Arc;

use logger::TracingLogger;
use ocr::client::TesseractClient;
use ocr::tesseract::TesseractProvider;

use business::application::menu::page_scanner::ConcurrentPageScanner;
use business::application::menu::scan_menu::ScanMenuUseCaseImpl;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub menu_api: crate::api::menu::routes::MenuApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        // Infrastructure adapters
        let mut client = TesseractClient::new(config.ocr.binary.clone(), config.ocr.language.clone());
        if let Some(dir) = &config.ocr.tessdata_dir {
            client = client.with_tessdata_dir(dir.clone());
        }
        let ocr_engine = TesseractProvider::new(client);

        let ocr_version = match ocr_engine.version().await {
            Ok(version) => {
                tracing::info!("OCR engine ready: {}", version);
                Some(version)
            }
            Err(err) => {
                // Scans still run; every page will come back as a warning.
                tracing::warn!("OCR engine unavailable: {}", err);
                None
            }
        };

        // Menu use cases
        let page_scanner = Arc::new(ConcurrentPageScanner {
            engine: Arc::new(ocr_engine),
            options: config.ocr.scanner_options(),
            logger: Arc::new(TracingLogger::new("page_scanner")),
        });
        let scan_menu_use_case = Arc::new(ScanMenuUseCaseImpl {
            scanner: page_scanner,
            logger: Arc::new(TracingLogger::new("scan_menu")),
        });

        let health_api = crate::api::health::routes::Api::new(ocr_version);
        let menu_api =
            crate::api::menu::routes::MenuApi::new(scan_menu_use_case, config.upload.clone());

        Ok(Self {
            health_api,
            menu_api,
        })
    }
}
