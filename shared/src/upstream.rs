//! HTTP client for the upstream commerce REST API.
//!
//! Wraps the shared `reqwest::Client` with merchant-credential headers,
//! per-endpoint timeouts, and the bounded paginated catalog fetch. No
//! retries: a timed-out or failed call is terminal and handled by the
//! endpoint's fallback policy.

use std::time::Duration;

use serde_json::Value;

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::query::QueryBuilder;

/// Versioned base path of the commerce API, appended to the store URL.
pub const API_BASE_PATH: &str = "/3dCartWebAPI/v1";

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Hard bound on catalog pagination (2000 items at the default limit).
/// The upstream signals the end of data by shrinking the page; this cap
/// stops the loop if it never does.
pub const MAX_PAGES: u32 = 40;

/// Per-endpoint request budgets. Order creation gets the longest one since
/// the upstream runs payment capture inline.
pub mod timeouts {
    use std::time::Duration;

    pub const PAYMENT_METHODS: Duration = Duration::from_secs(5);
    pub const ORDER_STATUS: Duration = Duration::from_secs(5);
    pub const PRODUCT_PAGE: Duration = Duration::from_secs(10);
    pub const SINGLE_ORDER: Duration = Duration::from_secs(15);
    pub const PASSTHROUGH: Duration = Duration::from_secs(30);
    pub const CREATE_ORDER: Duration = Duration::from_secs(45);
}

const ERROR_BODY_LIMIT: usize = 500;

/// Client for the upstream commerce API, carrying merchant credentials.
pub struct UpstreamClient {
    client: reqwest::Client,
    config: ProxyConfig,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(client: reqwest::Client, config: ProxyConfig) -> Self {
        let base_url = format!("{}{API_BASE_PATH}", config.store_url.trim_end_matches('/'));
        Self {
            client,
            config,
            base_url,
        }
    }

    /// GET `path` and parse the JSON response.
    pub async fn get_json(
        &self,
        path: &str,
        query: &[(String, String)],
        timeout: Duration,
    ) -> Result<Value, ProxyError> {
        self.send_json(reqwest::Method::GET, path, query, None, timeout)
            .await
    }

    /// Issue a single call with the merchant header set attached.
    pub async fn send_json(
        &self,
        method: reqwest::Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        timeout: Duration,
    ) -> Result<Value, ProxyError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::info!("Upstream call: {method} {path}");

        let mut request = self
            .client
            .request(method, url)
            .header("PrivateKey", &self.config.private_key)
            .header("Token", &self.config.token)
            .header("SecureURL", &self.config.secure_url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .timeout(timeout);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ProxyError::UpstreamFailure {
                status: Some(status.as_u16()),
                message: truncate(&text, ERROR_BODY_LIMIT),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| ProxyError::UpstreamFailure {
            status: None,
            message: format!("invalid JSON from upstream: {e}"),
        })
    }

    /// Fetch the whole catalog page by page.
    ///
    /// Stops when a page comes back empty, shorter than `limit`, or not a
    /// JSON array (end of data, not an error), or at [`MAX_PAGES`]. Any
    /// page-level error abandons the accumulated items so the caller
    /// substitutes fallback data instead of serving a partial catalog.
    pub async fn fetch_all_products(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
        extra: &[(String, String)],
    ) -> Result<Vec<Value>, ProxyError> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);
        let mut offset = offset.unwrap_or(0);
        let mut items: Vec<Value> = Vec::new();

        for page in 1..=MAX_PAGES {
            let mut query = QueryBuilder::new();
            query.push("limit", limit.to_string());
            query.push("offset", offset.to_string());
            query.extend_from(extra);

            let value = self
                .get_json("/Products", query.pairs(), timeouts::PRODUCT_PAGE)
                .await?;

            let Some(page_items) = value.as_array() else {
                break;
            };
            if page_items.is_empty() {
                break;
            }

            let count = page_items.len() as u32;
            items.extend(page_items.iter().cloned());

            if count < limit {
                break;
            }
            if page == MAX_PAGES {
                tracing::warn!(
                    "catalog pagination stopped at the {MAX_PAGES}-page cap with {} items",
                    items.len()
                );
                break;
            }
            offset += count;
        }

        Ok(items)
    }
}

fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        text.to_string()
    } else {
        let mut end = limit;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}
