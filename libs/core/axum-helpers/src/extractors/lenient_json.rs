//! JSON body extractor that tolerates missing bodies.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

const NOT_AN_OBJECT: &str = "JSON body must be an object or an array";

/// JSON extractor that falls back to `T::default()`.
///
/// - no JSON content type: the body is ignored and `T::default()` is used
/// - JSON content type with an empty body: `T::default()`
/// - JSON content type with an array body: `T::default()`, arrays carry no fields
/// - JSON content type with a malformed body or a bare scalar: 400 with a message body
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::LenientJson;
/// use serde::Deserialize;
///
/// #[derive(Default, Deserialize)]
/// struct CreateUser {
///     name: Option<String>,
/// }
///
/// async fn create_user(LenientJson(payload): LenientJson<CreateUser>) -> String {
///     format!("Creating user: {:?}", payload.name)
/// }
///
/// let app = Router::new().route("/users", post(create_user));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(LenientJson(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(LenientJson(T::default()));
        }

        match serde_json::from_slice::<Value>(&bytes)? {
            object @ Value::Object(_) => Ok(LenientJson(serde_json::from_value(object)?)),
            Value::Array(_) => Ok(LenientJson(T::default())),
            _ => Err(AppError::BadRequest(NOT_AN_OBJECT.to_string())),
        }
    }
}

/// `application/json` or any `application/*+json` media type
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Payload {
        name: Option<String>,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn extract(req: Request) -> Result<Payload, AppError> {
        LenientJson::<Payload>::from_request(req, &())
            .await
            .map(|LenientJson(p)| p)
    }

    #[tokio::test]
    async fn test_parses_json_body() {
        let payload = extract(request(Some("application/json"), r#"{"name":"Ann"}"#))
            .await
            .unwrap();
        assert_eq!(payload.name.as_deref(), Some("Ann"));
    }

    #[tokio::test]
    async fn test_accepts_charset_parameter() {
        let payload = extract(request(
            Some("application/json; charset=utf-8"),
            r#"{"name":"Ann"}"#,
        ))
        .await
        .unwrap();
        assert_eq!(payload.name.as_deref(), Some("Ann"));
    }

    #[tokio::test]
    async fn test_missing_content_type_defaults() {
        let payload = extract(request(None, r#"{"name":"Ann"}"#)).await.unwrap();
        assert_eq!(payload, Payload::default());
    }

    #[tokio::test]
    async fn test_empty_body_defaults() {
        let payload = extract(request(Some("application/json"), "")).await.unwrap();
        assert_eq!(payload, Payload::default());
    }

    #[tokio::test]
    async fn test_array_body_defaults() {
        let payload = extract(request(Some("application/json"), "[]")).await.unwrap();
        assert_eq!(payload, Payload::default());

        let payload = extract(request(Some("application/json"), r#"[{"name":"Ann"}]"#))
            .await
            .unwrap();
        assert_eq!(payload, Payload::default());
    }

    #[tokio::test]
    async fn test_scalar_body_is_rejected() {
        for body in ["5", r#""Ann""#, "null"] {
            let err = extract(request(Some("application/json"), body))
                .await
                .unwrap_err();
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let err = extract(request(Some("application/json"), "{name:"))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
