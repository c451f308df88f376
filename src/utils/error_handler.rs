// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;
use tracing::warn;

use crate::utils::response_handler::ErrorBody;

/// Maps layer errors to HTTP responses
pub async fn handle_global_error(err: BoxError) -> Response {
    let status_code: StatusCode = status_for(&err);
    warn!(status = status_code.as_u16(), "Request failed in middleware: {}", err);

    ErrorBody::new(status_code)
        .message(err.to_string())
        .into_response()
}

fn status_for(err: &BoxError) -> StatusCode {
    // 413 if the body was too large
    if err.is::<LengthLimitError>() || find_cause::<LengthLimitError>(&**err).is_some() {
        return StatusCode::PAYLOAD_TOO_LARGE;
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    StatusCode::INTERNAL_SERVER_ERROR
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
