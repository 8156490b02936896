use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::menu::errors::MenuScanError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MenuScanError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            MenuScanError::NoPages => (StatusCode::BAD_REQUEST, "ValidationError", "menu.no_pages"),
        };

        (status, ErrorResponse::json(name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_no_pages_to_bad_request() {
        let (status, json) = MenuScanError::NoPages.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "menu.no_pages");
    }
}
