use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;
use storefront_shared::AppState;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // One client for the lifetime of the execution environment so keep-alive
    // connections to the commerce API survive across invocations.
    let http_client = reqwest::Client::new();
    let state = AppState::new(http_client);

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
