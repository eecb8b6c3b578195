//! API routes module

pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes, mounted under `/api` by the server
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/users", users::router(state))
}
