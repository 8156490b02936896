use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// OCR engine version detected at startup, absent when the engine could not be run
    pub ocr_engine: Option<String>,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    ocr_engine: Option<String>,
}

impl Api {
    pub fn new(ocr_engine: Option<String>) -> Self {
        Self { ocr_engine }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service. Public, no tenant header needed.
    ///
    /// ## Response
    /// - `status`: "healthy" if the service is running, "degraded" without an OCR engine
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    /// - `ocr_engine`: Tesseract version line
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let status = if self.ocr_engine.is_some() {
            "healthy"
        } else {
            "degraded"
        };

        Json(HealthCheckResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ocr_engine: self.ocr_engine.clone(),
        })
    }
}
