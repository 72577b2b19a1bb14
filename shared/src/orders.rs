use lambda_http::{Body, Error, Response};
use serde_json::{json, Value};

use crate::cors;
use crate::error::ProxyError;
use crate::fallback;
use crate::query::QueryBuilder;
use crate::request::InboundRequest;
use crate::scrub;
use crate::upstream::{timeouts, UpstreamClient};

/// GET /Orders/{id} - single order lookup.
///
/// An upstream 404 (or any other failure) substitutes a minimal mock order
/// record; the storefront's order-status page never sees an error status.
pub async fn get_order(
    upstream: &UpstreamClient,
    order_id: &str,
    origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    let path = format!("/Orders/{order_id}");
    match upstream
        .get_json(&path, &[], timeouts::SINGLE_ORDER)
        .await
    {
        Ok(value) => cors::json_response(200, origin, &value),
        Err(err) => {
            tracing::warn!("Order {order_id} lookup failed, serving mock record: {err}");
            let record = fallback::mock_order(order_id, fallback::FALLBACK_NOTE);
            cors::json_response(200, origin, &json!([record]))
        }
    }
}

/// PUT /Orders/{id} - order update.
///
/// Failure is reported inside the payload (`Status: "error"`) while the
/// HTTP status stays 200; callers watching only the status code cannot
/// tell, which is the storefront's long-standing contract.
pub async fn update_order(
    upstream: &UpstreamClient,
    order_id: &str,
    body: Option<&Value>,
    origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    let path = format!("/Orders/{order_id}");
    let payload = body.cloned().unwrap_or_else(|| json!({}));
    tracing::info!(
        "Order {order_id} update: {}",
        scrub::mask_sensitive(&payload)
    );

    match upstream
        .send_json(
            reqwest::Method::PUT,
            &path,
            &[],
            Some(&payload),
            timeouts::SINGLE_ORDER,
        )
        .await
    {
        Ok(value) => cors::json_response(200, origin, &value),
        Err(err) => {
            tracing::warn!("Order {order_id} update failed: {err}");
            let result = fallback::order_update_error_result(order_id, &err.to_string());
            cors::json_response(200, origin, &json!([result]))
        }
    }
}

/// GET/PUT /Orders/test-{...} - reserved test orders, resolved locally
/// without contacting upstream.
pub fn test_order_response(
    order_id: &str,
    update: bool,
    origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    tracing::info!("Test order {order_id} handled locally (update: {update})");
    if update {
        let result = fallback::test_order_update_result(order_id);
        cors::json_response(200, origin, &json!([result]))
    } else {
        let record = fallback::mock_order(order_id, fallback::TEST_ORDER_NOTE);
        cors::json_response(200, origin, &json!([record]))
    }
}

/// POST /orders - order submission.
///
/// A best-effort payment-method pre-check runs first; its failure is
/// logged and swallowed. The submission itself carries fixed flags that
/// force real (non-test-mode) processing. On failure the caller receives a
/// success-shaped acknowledgement with a synthesized order id, marked by
/// `ApiError`.
pub async fn create_order(
    upstream: &UpstreamClient,
    req: &InboundRequest,
    origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    if let Err(err) = upstream
        .get_json("/PaymentMethods", &[], timeouts::PAYMENT_METHODS)
        .await
    {
        tracing::warn!("Payment-method pre-check failed, submitting anyway: {err}");
    }

    let mut query = QueryBuilder::new();
    query.push("bypassorderprocessing", "false");
    query.push("bypassorderemail", "false");
    query.extend_from(&req.query);

    let payload = req.body.clone().unwrap_or_else(|| json!({}));
    tracing::info!("Order submission: {}", scrub::mask_sensitive(&payload));

    match upstream
        .send_json(
            reqwest::Method::POST,
            "/Orders",
            query.pairs(),
            Some(&payload),
            timeouts::CREATE_ORDER,
        )
        .await
    {
        Ok(value) => cors::json_response(200, origin, &value),
        Err(err) => {
            tracing::warn!("Order submission failed, synthesizing acknowledgement: {err}");
            let result = fallback::synthesized_order_result(&err.to_string());
            cors::json_response(200, origin, &json!([result]))
        }
    }
}

/// Any unrecognized (method, path): forward verbatim.
///
/// This is the only endpoint class where upstream failures surface to the
/// caller, with the upstream's status when it sent one.
pub async fn passthrough(
    upstream: &UpstreamClient,
    req: &InboundRequest,
    origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    let method = match reqwest::Method::from_bytes(req.method.as_str().as_bytes()) {
        Ok(method) => method,
        Err(_) => {
            let err = ProxyError::UnsupportedMethod(req.method.to_string());
            return cors::error_response(&err, origin);
        }
    };

    let mut query = QueryBuilder::new();
    query.extend_from(&req.query);
    // Pagination hints from the caller survive passthrough untouched.
    if let Some(limit) = req.limit {
        query.push("limit", limit.to_string());
    }
    if let Some(offset) = req.offset {
        query.push("offset", offset.to_string());
    }

    match upstream
        .send_json(
            method,
            &req.resource_path,
            query.pairs(),
            req.body.as_ref(),
            timeouts::PASSTHROUGH,
        )
        .await
    {
        Ok(value) => cors::json_response(200, origin, &value),
        Err(err) => {
            tracing::warn!("Passthrough {} {} failed: {err}", req.method, req.resource_path);
            cors::error_response(&err, origin)
        }
    }
}
