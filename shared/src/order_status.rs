use lambda_http::{Body, Error, Response};

use crate::cors;
use crate::fallback;
use crate::upstream::{timeouts, UpstreamClient};

/// GET /orderstatus - status definitions with a fixed fallback set.
///
/// Empty and failed upstream responses both yield the 4-entry fallback
/// list; the caller always sees a 200.
pub async fn list_order_statuses(
    upstream: &UpstreamClient,
    origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    match upstream
        .get_json("/OrderStatus", &[], timeouts::ORDER_STATUS)
        .await
    {
        Ok(value) => match value.as_array() {
            Some(statuses) if !statuses.is_empty() => cors::json_response(200, origin, &statuses),
            _ => {
                tracing::info!("Upstream returned no order statuses, serving fallback set");
                cors::json_response(200, origin, &fallback::fallback_order_statuses())
            }
        },
        Err(err) => {
            tracing::warn!("Order status fetch failed, serving fallback set: {err}");
            cors::json_response(200, origin, &fallback::fallback_order_statuses())
        }
    }
}
