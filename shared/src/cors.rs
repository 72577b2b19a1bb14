use lambda_http::{http::response::Builder, Body, Error, Response};
use serde::Serialize;

use crate::error::ProxyError;

pub const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const ALLOW_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

/// Response builder with the CORS header set applied.
///
/// The allow-origin header echoes the inbound origin so credentialed
/// storefront requests work; absent an origin it falls back to `*`.
pub fn builder(status: u16, origin: Option<&str>) -> Builder {
    Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", origin.unwrap_or("*"))
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .header("Content-Type", "application/json")
}

/// Serialize `payload` into a JSON response with CORS headers.
///
/// A serialization failure is replaced with a generic 500 body instead of
/// crashing the handler.
pub fn json_response<T: Serialize>(
    status: u16,
    origin: Option<&str>,
    payload: &T,
) -> Result<Response<Body>, Error> {
    let body = match serde_json::to_string(payload) {
        Ok(body) => body,
        Err(err) => {
            tracing::error!("response serialization failed: {err}");
            return Ok(builder(500, origin)
                .body(r#"{"error":"Internal serialization failure"}"#.into())
                .map_err(Box::new)?);
        }
    };

    Ok(builder(status, origin).body(body.into()).map_err(Box::new)?)
}

/// Fixed success body for OPTIONS preflight requests.
pub fn preflight(origin: Option<&str>) -> Result<Response<Body>, Error> {
    json_response(
        200,
        origin,
        &serde_json::json!({ "message": "CORS preflight successful" }),
    )
}

/// Structured `{error, message}` body for errors that surface to the caller.
pub fn error_response(err: &ProxyError, origin: Option<&str>) -> Result<Response<Body>, Error> {
    json_response(
        err.status_code(),
        origin,
        &serde_json::json!({
            "error": err.label(),
            "message": err.to_string(),
        }),
    )
}
