use lambda_http::{Body, Error, Response};

use crate::cors;
use crate::fallback;
use crate::request::InboundRequest;
use crate::scrub;
use crate::upstream::{timeouts, UpstreamClient};

/// GET /paymentmethods - merchant payment-method introspection.
///
/// Failure collapses to an empty array with a 200; the checkout UI treats
/// "no methods" as "use the default flow".
pub async fn list_payment_methods(
    upstream: &UpstreamClient,
    origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    match upstream
        .get_json("/PaymentMethods", &[], timeouts::PAYMENT_METHODS)
        .await
    {
        Ok(value) => cors::json_response(200, origin, &value),
        Err(err) => {
            tracing::warn!("Payment method fetch failed, serving empty list: {err}");
            cors::json_response(200, origin, &serde_json::json!([]))
        }
    }
}

/// POST /create-payment-token - local token synthesis shim.
///
/// No upstream call is made; the minted token is explicitly flagged
/// `test_mode` so it can never be mistaken for a gateway token.
pub fn create_payment_token(
    req: &InboundRequest,
    origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    if let Some(body) = &req.body {
        tracing::info!(
            "Payment token requested: {}",
            scrub::mask_sensitive(body)
        );
    }

    cors::json_response(200, origin, &fallback::payment_token())
}
