pub mod app_config;
pub mod cors_config;
pub mod env_parse;
pub mod ocr_config;
pub mod server_config;
pub mod upload_config;
