use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::MessageResponse;

/// Handler for unmatched routes.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    let body = Json(MessageResponse::new("The requested resource was not found"));
    (StatusCode::NOT_FOUND, body).into_response()
}
