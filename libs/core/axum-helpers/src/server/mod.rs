//! Server infrastructure module.
//!
//! - Router setup with OpenAPI documentation UIs
//! - Health endpoint
//! - Graceful shutdown on SIGINT/SIGTERM
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let router = create_router::<ApiDoc>(api_routes, &cors)?;
//! let app = router.merge(health_router(app_info!()));
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router, normalize_trailing_slash, OPENAPI_JSON_PATH};
pub use health::{health_router, HealthResponse};
pub use shutdown::shutdown_signal;
