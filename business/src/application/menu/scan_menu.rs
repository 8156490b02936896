use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::classifier::classify_menu_text;
use crate::domain::menu::errors::MenuScanError;
use crate::domain::menu::model::MenuScanResult;
use crate::domain::menu::services::PageScannerService;
use crate::domain::menu::use_cases::scan_menu::{ScanMenuParams, ScanMenuUseCase};

pub struct ScanMenuUseCaseImpl {
    pub scanner: Arc<dyn PageScannerService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ScanMenuUseCase for ScanMenuUseCaseImpl {
    async fn execute(&self, params: ScanMenuParams) -> Result<MenuScanResult, MenuScanError> {
        if params.file_paths.is_empty() {
            return Err(MenuScanError::NoPages);
        }

        self.logger.info(&format!(
            "Scanning menu for tenant {}: {} page(s)",
            params.tenant_id,
            params.file_paths.len()
        ));

        let scan = self.scanner.scan_pages(&params.file_paths).await;
        let menu = classify_menu_text(&scan.text);
        let warnings: Vec<String> = scan.failures.iter().map(|f| f.to_string()).collect();

        for warning in &warnings {
            self.logger.warn(&format!("OCR page skipped: {}", warning));
        }
        self.logger.info(&format!(
            "Menu scanned for tenant {}: {} categories, {} items, {} failed page(s)",
            params.tenant_id,
            menu.categories.len(),
            menu.item_count(),
            warnings.len()
        ));

        Ok(MenuScanResult { menu, warnings })
    }
}
