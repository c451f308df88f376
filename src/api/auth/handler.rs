use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// DTOs
// =============================================================================

/// Identity returned to every caller of the auth endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user_id: i64,
    pub location_id: i64,
    pub controller_id: i64,
}

impl AuthResponse {
    pub const FIXED: AuthResponse = AuthResponse {
        user_id: 1,
        location_id: 2,
        controller_id: 3,
    };
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Answers with the fixed identity. Method details, headers, query and
/// body are never read.
pub async fn auth() -> Json<AuthResponse> {
    debug!("Serving fixed auth response");
    Json(AuthResponse::FIXED)
}
