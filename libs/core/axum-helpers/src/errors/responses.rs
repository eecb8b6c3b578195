//! Reusable OpenAPI response types for consistent API documentation.

use super::MessageResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "message": "User not found" })
)]
pub struct NotFoundResponse(pub MessageResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed JSON body",
    content_type = "application/json",
    example = json!({ "message": "expected value at line 1 column 1" })
)]
pub struct BadRequestJsonResponse(pub MessageResponse);
