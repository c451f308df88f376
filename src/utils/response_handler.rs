// JSON envelope for responses outside the auth contract (404, 408, 413, 500)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

/// Standard JSON error format
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: String,        // Upper-snake status text (e.g. "NOT_FOUND")
    pub code: u16,             // HTTP status code
    pub messages: Vec<String>, // Human-readable details
    pub date: String,          // ISO timestamp
}

impl ErrorBody {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status: status_label(status_code),
            code: status_code.as_u16(),
            messages: Vec::new(),
            date: Utc::now().to_rfc3339(),
        }
    }

    /// Adds an informational message to the body
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        let status_code: StatusCode =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status_code, Json(self)).into_response()
    }
}

/// "Payload Too Large" -> "PAYLOAD_TOO_LARGE"
fn status_label(status_code: StatusCode) -> String {
    status_code
        .canonical_reason()
        .unwrap_or("UNKNOWN STATUS")
        .to_uppercase()
        .replace(' ', "_")
}
