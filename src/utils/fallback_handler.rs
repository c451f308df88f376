// Start of file: src/utils/fallback_handler.rs

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::utils::response_handler::ErrorBody;

pub async fn fallback_handler(uri: Uri) -> Response {
    debug!("No route for {}", uri.path());

    ErrorBody::new(StatusCode::NOT_FOUND)
        .message(format!("The requested route does not exist: {}", uri.path()))
        .into_response()
}

// End of file: src/utils/fallback_handler.rs
