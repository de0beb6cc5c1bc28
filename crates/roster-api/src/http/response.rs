//! Response wrappers that set the caching headers each endpoint needs.
//!
//! JSON data must never be cached, since quote samples change per request.
//! Generated avatars are deterministic and may be cached for a day.

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::http::error::AppError;

/// `Cache-Control` for every JSON response.
pub const NO_STORE: &str = "no-store, max-age=0, must-revalidate";

/// `Cache-Control` for generated avatar images.
pub const AVATAR_CACHE_CONTROL: &str = "public, max-age=86400";

/// JSON body sent with cache-disabling headers.
#[derive(Debug)]
pub struct NoStoreJson<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for NoStoreJson<T> {
    fn into_response(self) -> Response {
        let body = match serde_json::to_vec(&self.0) {
            Ok(body) => body,
            Err(e) => {
                return AppError::Internal(format!("failed to serialize response: {e}"))
                    .into_response();
            }
        };

        (
            [
                (CONTENT_TYPE, "application/json"),
                (CACHE_CONTROL, NO_STORE),
                (PRAGMA, "no-cache"),
                (EXPIRES, "0"),
            ],
            body,
        )
            .into_response()
    }
}

/// SVG image body with a one-day public cache lifetime.
#[derive(Debug)]
pub struct SvgImage(pub String);

impl IntoResponse for SvgImage {
    fn into_response(self) -> Response {
        (
            [
                (CONTENT_TYPE, "image/svg+xml"),
                (CACHE_CONTROL, AVATAR_CACHE_CONTROL),
            ],
            self.0,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn no_store_json_sets_cache_headers() {
        let resp = NoStoreJson(serde_json::json!({"ok": true})).into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[CACHE_CONTROL], NO_STORE);
        assert_eq!(headers[PRAGMA], "no-cache");
        assert_eq!(headers[EXPIRES], "0");
    }

    #[test]
    fn svg_image_is_cacheable() {
        let resp = SvgImage("<svg/>".to_string()).into_response();
        assert_eq!(resp.headers()[CONTENT_TYPE], "image/svg+xml");
        assert_eq!(resp.headers()[CACHE_CONTROL], AVATAR_CACHE_CONTROL);
    }

    #[test]
    fn serialization_failure_becomes_500() {
        use std::collections::HashMap;

        // Non-string map keys cannot be encoded as JSON object keys.
        let mut bad = HashMap::new();
        bad.insert((1, 2), "x");
        let resp = NoStoreJson(bad).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
