use std::env;
use std::path::PathBuf;

use super::env_parse::{non_empty, parse_usize};

const DEFAULT_MAX_FILE_BYTES: usize = 10 * 1024 * 1024;

/// Limits and scratch location for uploaded menu pages.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_file_bytes: usize,
    pub temp_dir: PathBuf,
}

impl UploadConfig {
    /// Environment variables:
    /// - UPLOAD_MAX_FILE_BYTES: Largest accepted file (default: 10 MiB)
    /// - UPLOAD_TEMP_DIR: Where pages are staged for OCR (default: system temp dir)
    pub fn from_env() -> Self {
        Self {
            max_file_bytes: parse_usize(
                env::var("UPLOAD_MAX_FILE_BYTES").ok(),
                DEFAULT_MAX_FILE_BYTES,
            ),
            temp_dir: non_empty(env::var("UPLOAD_TEMP_DIR").ok())
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
        }
    }
}
