pub mod config;
pub mod cors;
pub mod error;
pub mod fallback;
pub mod order_status;
pub mod orders;
pub mod payments;
pub mod products;
pub mod query;
pub mod request;
pub mod routes;
pub mod scrub;
pub mod types;
pub mod upstream;

use std::sync::Arc;

/// Shared application state, built once at startup.
///
/// The proxy is otherwise stateless; the only thing worth keeping across
/// invocations is the HTTP client's connection pool.
pub struct AppState {
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(http_client: reqwest::Client) -> Arc<Self> {
        Arc::new(Self { http_client })
    }
}
