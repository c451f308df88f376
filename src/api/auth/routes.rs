use axum::{routing::get, Router};
use crate::config::state::AppState;
use super::handler;

/// Auth routes, relative to the `/api/v1` prefix
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth", get(handler::auth))
}
