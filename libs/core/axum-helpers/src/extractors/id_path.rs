//! Integer id path parameter extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::convert::Infallible;

/// Extractor for a single integer `{id}` path parameter.
///
/// Never rejects. Holds `None` when the segment does not start with a
/// number, so handlers can treat a malformed id like an unknown one.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_user(IdPath(id): IdPath) -> String {
///     format!("User ID: {:?}", id)
/// }
///
/// let app = Router::new().route("/users/{id}", get(get_user));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub Option<u64>);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = Path::<String>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Path(raw)| parse_id(&raw));

        Ok(IdPath(id))
    }
}

/// Lenient integer parsing for path ids.
///
/// Skips leading whitespace, accepts an optional sign and a `0x` prefix,
/// then reads as many digits as it can and ignores the rest: `"12abc"` is 12.
/// Returns `None` when no digit is found, for negative values and on overflow.
pub fn parse_id(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = s
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }

    let value = u64::from_str_radix(digits, radix).ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}
