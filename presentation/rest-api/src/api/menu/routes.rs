use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, payload::Json};

use business::domain::menu::use_cases::scan_menu::{ScanMenuParams, ScanMenuUseCase};
use business::domain::shared::value_objects::TenantId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::menu::dto::{ScanMenuForm, ScanMenuResultResponse};
use crate::api::menu::upload::stage_uploads;
use crate::api::tags::ApiTags;
use crate::config::upload_config::UploadConfig;

pub struct MenuApi {
    scan_menu_use_case: Arc<dyn ScanMenuUseCase>,
    upload: UploadConfig,
}

impl MenuApi {
    pub fn new(scan_menu_use_case: Arc<dyn ScanMenuUseCase>, upload: UploadConfig) -> Self {
        Self {
            scan_menu_use_case,
            upload,
        }
    }
}

/// Menu ingestion API
#[OpenApi]
impl MenuApi {
    /// Scan menu pages
    ///
    /// Runs OCR on photos or PDFs of a printed menu and returns the
    /// recognized categories and items. Rejected uploads and pages that
    /// could not be read are listed in `errors` next to the partial menu.
    #[oai(path = "/menu/scan", method = "post", tag = "ApiTags::Menu")]
    async fn scan_menu(
        &self,
        #[oai(name = "X-Tenant-Id")] tenant_id: Header<Option<String>>,
        form: ScanMenuForm,
    ) -> ScanMenuResponse {
        // A missing header is reported like a malformed one.
        let Some(tenant_id) = tenant_id
            .0
            .as_deref()
            .and_then(|raw| raw.parse::<TenantId>().ok())
        else {
            return ScanMenuResponse::BadRequest(ErrorResponse::json(
                "ValidationError",
                "menu.invalid_tenant",
            ));
        };

        if form.images.is_empty() {
            return ScanMenuResponse::BadRequest(ErrorResponse::json(
                "ValidationError",
                "menu.no_images",
            ));
        }

        let staged = stage_uploads(
            form.images,
            &self.upload.temp_dir,
            self.upload.max_file_bytes,
        )
        .await;

        if staged.pages.is_empty() {
            return ScanMenuResponse::BadRequest(ErrorResponse::json(
                "ValidationError",
                format!("menu.no_valid_images: {}", staged.errors.join("; ")),
            ));
        }

        let params = ScanMenuParams {
            tenant_id,
            file_paths: staged.pages.paths().to_vec(),
        };

        // Staged pages are deleted when `staged` goes out of scope.
        match self.scan_menu_use_case.execute(params).await {
            Ok(scan) => {
                let mut errors = staged.errors;
                errors.extend(scan.warnings);
                ScanMenuResponse::Ok(Json(ScanMenuResultResponse {
                    menu: scan.menu.into(),
                    errors,
                }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ScanMenuResponse::BadRequest(json),
                    _ => ScanMenuResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ScanMenuResponse {
    #[oai(status = 200)]
    Ok(Json<ScanMenuResultResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
