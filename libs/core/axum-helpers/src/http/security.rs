use axum::{
    http::{
        header::{self, HeaderName},
        HeaderValue,
    },
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

/// Headers stamped on every response unless a handler already set them
pub fn security_header_values() -> [(HeaderName, HeaderValue); 4] {
    [
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ),
        (
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
        ),
    ]
}

/// Wraps `router` with one `SetResponseHeaderLayer` per security header.
///
/// Covers the fallback and the documentation UIs as well as the API routes.
pub fn security_headers(router: Router) -> Router {
    security_header_values()
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(name, value))
        })
}
