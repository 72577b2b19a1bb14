use lambda_http::{Body, Error, Response};

use crate::cors;
use crate::fallback;
use crate::request::InboundRequest;
use crate::types::Product;
use crate::upstream::UpstreamClient;

/// GET /products - paginated catalog fetch with fallback substitution.
///
/// Upstream failure never surfaces here: the storefront gets the static
/// catalog with a 200 instead. An upstream that genuinely has zero
/// products yields an empty array, not the fallback.
pub async fn list_products(
    upstream: &UpstreamClient,
    req: &InboundRequest,
    origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    match upstream
        .fetch_all_products(req.limit, req.offset, &req.query)
        .await
    {
        Ok(raw) => {
            let products: Vec<Product> = raw.iter().map(Product::from_upstream).collect();
            tracing::info!("Product listing: {} items from upstream", products.len());
            cors::json_response(200, origin, &products)
        }
        Err(err) => {
            tracing::warn!("Product listing failed, serving fallback catalog: {err}");
            cors::json_response(200, origin, &fallback::fallback_products())
        }
    }
}
