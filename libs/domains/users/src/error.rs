use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Message returned to clients for any unknown user id
pub const USER_NOT_FOUND: &str = "User not found";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    /// No record matches the id. `None` when the path segment was not a number.
    #[error("User not found: {}", .0.map_or_else(|| "<unparsable>".to_string(), |id| id.to_string()))]
    NotFound(Option<u64>),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => AppError::NotFound(USER_NOT_FOUND.to_string()),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "User lookup failed");
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
