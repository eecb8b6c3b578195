//! # Axum Helpers
//!
//! Shared glue for the Axum services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router setup with API docs, health check, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: `AppError` and the `{"message": ...}` response body
//! - **[`extractors`]**: Lenient extractors (integer id path, optional JSON body)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::{cors::CorsConfig, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes, &CorsConfig::default())?;
//!
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    create_app, create_router, health_router, normalize_trailing_slash, shutdown_signal,
    HealthResponse, OPENAPI_JSON_PATH,
};

// Re-export HTTP middleware
pub use http::{
    cors_layer, create_cors_layer, create_permissive_cors_layer, security_header_values,
    security_headers,
};

// Re-export error types
pub use errors::{AppError, MessageResponse};

// Re-export extractors
pub use extractors::{parse_id, IdPath, LenientJson};
