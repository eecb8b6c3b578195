use axum::http::{header::InvalidHeaderValue, HeaderValue, Method};
use core_config::cors::CorsConfig;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Builds the CORS layer described by `config`.
///
/// No configured origins means any origin is accepted.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, InvalidHeaderValue> {
    if config.is_permissive() {
        return Ok(create_permissive_cors_layer());
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(create_cors_layer(origins))
}

/// Creates a CORS layer restricted to `allowed_origins`.
///
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: Content-Type, Accept
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600))
}

/// Creates a CORS layer that allows any origin, method and header.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
