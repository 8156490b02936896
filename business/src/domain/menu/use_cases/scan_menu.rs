use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::menu::errors::MenuScanError;
use crate::domain::menu::model::MenuScanResult;
use crate::domain::shared::value_objects::TenantId;

pub struct ScanMenuParams {
    pub tenant_id: TenantId,
    /// Already validated, readable page files, in upload order.
    pub file_paths: Vec<PathBuf>,
}

#[async_trait]
pub trait ScanMenuUseCase: Send + Sync {
    async fn execute(&self, params: ScanMenuParams) -> Result<MenuScanResult, MenuScanError>;
}
