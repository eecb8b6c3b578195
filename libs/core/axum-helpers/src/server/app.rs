use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer, security_headers};
use axum::{extract::Request, Router};
use core_config::cors::CorsConfig;
use core_config::server::ServerConfig;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;

/// Path of the raw OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs.json";

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::create_app;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let router = Router::new();
///     let config = ServerConfig::default();
///     create_app(router, &config).await?;
///     Ok(())
/// }
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    let local_addr = listener.local_addr()?;

    let app = normalize_trailing_slash(router);

    info!(address = %local_addr, "Server is running on port {}", local_addr.port());
    axum::serve(listener, axum::ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Strips a trailing slash before routing, so `/api/users/` is served as `/api/users`.
///
/// Has to wrap the finished router: a layer added with `Router::layer` runs after
/// the route has already been matched.
pub fn normalize_trailing_slash(router: Router) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(router)
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - `/api-docs.json`: the OpenAPI document generated from `T`
/// - `/api-docs`: Swagger UI, plus ReDoc (`/redoc`), RapiDoc (`/rapidoc`) and Scalar (`/scalar`)
/// - API routes nested under `/api`
/// - Common middleware (tracing, security headers, CORS, compression)
/// - 404 fallback handler
///
/// `create_app` adds trailing-slash normalization in front of the result.
///
/// Health endpoints are added by the app with `health_router()`.
///
/// # Errors
/// Returns an error if an origin in `cors` is not a valid header value.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use utoipa::OpenApi;
/// use axum_helpers::server::create_router;
/// use core_config::cors::CorsConfig;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new().route("/example", get(handler));
/// let router = create_router::<ApiDoc>(api_routes, &CorsConfig::default())?;
/// ```
pub fn create_router<T>(apis: Router, cors: &CorsConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_layer(cors).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
        )
    })?;

    if cors.is_permissive() {
        info!("CORS configured to allow any origin");
    } else {
        info!("CORS configured with allowed origins: {}", cors.allowed_origins.join(","));
    }

    let router = Router::new()
        .merge(SwaggerUi::new("/api-docs").url(OPENAPI_JSON_PATH, T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new(OPENAPI_JSON_PATH).path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    Ok(security_headers(router)
        .layer(cors_layer)
        .layer(CompressionLayer::new()))
}
