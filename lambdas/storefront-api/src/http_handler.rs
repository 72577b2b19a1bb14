use lambda_http::{Body, Error, Request, Response};
use std::sync::Arc;

use storefront_shared::config::ProxyConfig;
use storefront_shared::request::InboundRequest;
use storefront_shared::routes::Route;
use storefront_shared::upstream::UpstreamClient;
use storefront_shared::{cors, order_status, orders, payments, products, AppState};

/// Main Lambda handler - normalizes the event and dispatches by route.
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let origin_header = event
        .headers()
        .get("origin")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let origin = origin_header.as_deref();

    tracing::info!(
        "Storefront proxy invoked - Method: {} Path: {}",
        event.method(),
        event.uri().path()
    );

    // CORS preflight short-circuits before normalization or config.
    if event.method() == "OPTIONS" {
        return cors::preflight(origin);
    }

    let inbound = match InboundRequest::from_event(&event) {
        Ok(inbound) => inbound,
        Err(err) => {
            tracing::warn!("Rejected inbound event: {err}");
            return cors::error_response(&err, origin);
        }
    };

    let config = match ProxyConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{err}");
            return cors::error_response(&err, origin);
        }
    };
    let upstream = UpstreamClient::new(state.http_client.clone(), config);

    let route = Route::decide(&inbound);
    tracing::info!("Route matched: {route:?} for {}", inbound.resource_path);

    match route {
        Route::PaymentTokenMock => payments::create_payment_token(&inbound, origin),
        Route::TestOrder { id, update } => orders::test_order_response(&id, update, origin),
        Route::SingleOrder { id, update: false } => {
            orders::get_order(&upstream, &id, origin).await
        }
        Route::SingleOrder { id, update: true } => {
            orders::update_order(&upstream, &id, inbound.body.as_ref(), origin).await
        }
        Route::ProductList => products::list_products(&upstream, &inbound, origin).await,
        Route::PaymentMethods => payments::list_payment_methods(&upstream, origin).await,
        Route::OrderStatuses => order_status::list_order_statuses(&upstream, origin).await,
        Route::CreateOrder => orders::create_order(&upstream, &inbound, origin).await,
        Route::Passthrough => orders::passthrough(&upstream, &inbound, origin).await,
    }
}
