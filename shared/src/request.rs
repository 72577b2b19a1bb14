use lambda_http::http::Method;
use lambda_http::{Body, Request, RequestExt};
use serde_json::Value;

use crate::error::ProxyError;

/// Query keys the product route recomputes itself; captured separately so
/// they are never forwarded twice.
const PAGINATION_KEYS: [&str; 3] = ["limit", "offset", "page"];

/// Normalized view of the inbound event, immutable once built.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    pub resource_path: String,
    /// Non-pagination query pairs in arrival order, first value per key.
    pub query: Vec<(String, String)>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub body: Option<Value>,
}

impl InboundRequest {
    /// Extract method, resource path, query parameters, and parsed body
    /// from the raw event. Parsing only; no side effects.
    pub fn from_event(event: &Request) -> Result<Self, ProxyError> {
        let method = event.method().clone();
        if !matches!(method, Method::GET | Method::POST | Method::PUT | Method::DELETE) {
            return Err(ProxyError::UnsupportedMethod(method.to_string()));
        }

        let resource_path = resolve_resource_path(event);

        let mut query = Vec::new();
        let mut limit = None;
        let mut offset = None;
        for (key, value) in event.query_string_parameters().iter() {
            if key.eq_ignore_ascii_case("limit") {
                limit = limit.or_else(|| value.parse().ok());
            } else if key.eq_ignore_ascii_case("offset") {
                offset = offset.or_else(|| value.parse().ok());
            } else if PAGINATION_KEYS.iter().any(|p| key.eq_ignore_ascii_case(p)) {
                // `page` has no upstream equivalent; dropped.
            } else if !query.iter().any(|(k, _): &(String, String)| k == key) {
                query.push((key.to_string(), value.to_string()));
            }
        }

        let body = parse_body(event.body())?;

        Ok(Self {
            method,
            resource_path,
            query,
            limit,
            offset,
            body,
        })
    }
}

/// Resource path precedence: explicit `proxy` path parameter, then an
/// `orderid` path parameter (mapped to `/Orders/{id}`), then the raw URI
/// path reduced to its trailing segment(s).
fn resolve_resource_path(event: &Request) -> String {
    let params = event.path_parameters();

    if let Some(proxy) = params.first("proxy") {
        return format!("/{}", proxy.trim_start_matches('/'));
    }

    if let Some(order_id) = params.first("orderid") {
        return format!("/Orders/{order_id}");
    }

    let segments: Vec<&str> = event
        .uri()
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match segments.as_slice() {
        [] => "/".to_string(),
        [.., parent, last] if parent.eq_ignore_ascii_case("Orders") => {
            format!("/{parent}/{last}")
        }
        [.., last] => format!("/{last}"),
    }
}

fn parse_body(body: &Body) -> Result<Option<Value>, ProxyError> {
    let bytes: &[u8] = match body {
        Body::Empty => return Ok(None),
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes,
    };
    if bytes.is_empty() {
        return Ok(None);
    }

    serde_json::from_slice(bytes)
        .map(Some)
        .map_err(|e| ProxyError::InvalidRequestBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn event(method: &str, path: &str) -> Request {
        lambda_http::http::Request::builder()
            .method(method)
            .uri(path)
            .body(Body::Empty)
            .unwrap()
    }

    #[test]
    fn proxy_path_parameter_takes_precedence() {
        let mut params = HashMap::new();
        params.insert("proxy".to_string(), "products".to_string());
        let request = event("GET", "/default/commerce-proxy/products")
            .with_path_parameters(params);

        let inbound = InboundRequest::from_event(&request).unwrap();
        assert_eq!(inbound.resource_path, "/products");
    }

    #[test]
    fn orderid_parameter_maps_to_orders_path() {
        let mut params = HashMap::new();
        params.insert("orderid".to_string(), "AB-1009".to_string());
        let request = event("GET", "/default/orders/AB-1009").with_path_parameters(params);

        let inbound = InboundRequest::from_event(&request).unwrap();
        assert_eq!(inbound.resource_path, "/Orders/AB-1009");
    }

    #[test]
    fn raw_path_keeps_two_segments_under_orders() {
        let inbound = InboundRequest::from_event(&event("GET", "/stage/Orders/1009")).unwrap();
        assert_eq!(inbound.resource_path, "/Orders/1009");

        let inbound = InboundRequest::from_event(&event("GET", "/stage/store/products")).unwrap();
        assert_eq!(inbound.resource_path, "/products");
    }

    #[test]
    fn pagination_keys_are_captured_not_forwarded() {
        let mut query = HashMap::new();
        query.insert("limit".to_string(), "10".to_string());
        query.insert("offset".to_string(), "20".to_string());
        query.insert("page".to_string(), "3".to_string());
        query.insert("onsale".to_string(), "1".to_string());
        let request = event("GET", "/products").with_query_string_parameters(query);

        let inbound = InboundRequest::from_event(&request).unwrap();
        assert_eq!(inbound.limit, Some(10));
        assert_eq!(inbound.offset, Some(20));
        assert_eq!(inbound.query, vec![("onsale".to_string(), "1".to_string())]);
    }

    #[test]
    fn non_json_body_is_rejected() {
        let request = lambda_http::http::Request::builder()
            .method("POST")
            .uri("/orders")
            .body(Body::from("{not json"))
            .unwrap();

        match InboundRequest::from_event(&request) {
            Err(ProxyError::InvalidRequestBody(_)) => {}
            other => panic!("expected InvalidRequestBody, got {other:?}"),
        }
    }

    #[test]
    fn empty_body_parses_to_none() {
        let inbound = InboundRequest::from_event(&event("GET", "/products")).unwrap();
        assert!(inbound.body.is_none());
    }

    #[test]
    fn patch_method_is_unsupported() {
        match InboundRequest::from_event(&event("PATCH", "/products")) {
            Err(ProxyError::UnsupportedMethod(m)) => assert_eq!(m, "PATCH"),
            other => panic!("expected UnsupportedMethod, got {other:?}"),
        }
    }
}
