use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware for the menu dashboard
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:3000,http://localhost:8080")
///
/// Configuration:
/// - Methods: GET, POST, OPTIONS
/// - Headers: content-type, authorization, x-tenant-id
/// - Credentials: Enabled
pub fn init_cors() -> Cors {
    let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://localhost:8080".to_string());

    Cors::new()
        .allow_origins(split_origins(&allowed_origins))
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization", "x-tenant-id"])
        .allow_credentials(true)
}

fn split_origins(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect()
}
