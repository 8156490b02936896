use super::{
    cors_config, ocr_config::OcrConfig, server_config::ServerConfig, upload_config::UploadConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub ocr: OcrConfig,
    pub upload: UploadConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            ocr: OcrConfig::from_env(),
            upload: UploadConfig::from_env(),
        }
    }
}
