use lambda_http::http::Method;

use crate::error::ErrorVisibility;
use crate::fallback::TEST_ORDER_PREFIX;
use crate::request::InboundRequest;

/// Handling mode for a normalized request.
///
/// Matching is case-insensitive on path segments. The single-order match is
/// the most specific rule, the named listing routes come next, and anything
/// else is forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// POST `/create-payment-token`: local token synthesis, no upstream call.
    PaymentTokenMock,
    /// GET/PUT `/Orders/{id}` with the reserved test prefix; never reaches
    /// upstream.
    TestOrder { id: String, update: bool },
    /// GET/PUT `/Orders/{id}`.
    SingleOrder { id: String, update: bool },
    /// GET `/products`: paginated catalog fetch.
    ProductList,
    /// GET `/paymentmethods`.
    PaymentMethods,
    /// GET `/orderstatus`.
    OrderStatuses,
    /// POST `/orders`: upstream order submission with non-test-mode flags.
    CreateOrder,
    /// Anything else: forwarded with a method-appropriate upstream call.
    Passthrough,
}

impl Route {
    pub fn decide(req: &InboundRequest) -> Route {
        let segments: Vec<&str> = req
            .resource_path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        if let [order_seg, id] = segments.as_slice() {
            if order_seg.eq_ignore_ascii_case("orders")
                && matches!(req.method, Method::GET | Method::PUT)
            {
                let update = req.method == Method::PUT;
                let id = (*id).to_string();
                return if id.starts_with(TEST_ORDER_PREFIX) {
                    Route::TestOrder { id, update }
                } else {
                    Route::SingleOrder { id, update }
                };
            }
        }

        if let [single] = segments.as_slice() {
            match (&req.method, single.to_ascii_lowercase().as_str()) {
                (&Method::POST, "create-payment-token") => return Route::PaymentTokenMock,
                (&Method::GET, "products") => return Route::ProductList,
                (&Method::GET, "paymentmethods") => return Route::PaymentMethods,
                (&Method::GET, "orderstatus") => return Route::OrderStatuses,
                (&Method::POST, "orders") => return Route::CreateOrder,
                _ => {}
            }
        }

        Route::Passthrough
    }

    /// Failure policy for the route class: read and order-mutation endpoints
    /// absorb upstream failures into 200 responses with substitute data;
    /// only generic passthrough surfaces them.
    pub fn error_visibility(&self) -> ErrorVisibility {
        match self {
            Route::Passthrough => ErrorVisibility::Surfaced,
            _ => ErrorVisibility::Suppressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(method: Method, path: &str) -> InboundRequest {
        InboundRequest {
            method,
            resource_path: path.to_string(),
            query: Vec::new(),
            limit: None,
            offset: None,
            body: None,
        }
    }

    #[test]
    fn single_order_beats_listing_rules() {
        assert_eq!(
            Route::decide(&req(Method::GET, "/Orders/1009")),
            Route::SingleOrder { id: "1009".into(), update: false }
        );
        assert_eq!(
            Route::decide(&req(Method::PUT, "/orders/1009")),
            Route::SingleOrder { id: "1009".into(), update: true }
        );
    }

    #[test]
    fn reserved_prefix_routes_to_test_order() {
        assert_eq!(
            Route::decide(&req(Method::GET, "/Orders/test-123")),
            Route::TestOrder { id: "test-123".into(), update: false }
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(Route::decide(&req(Method::GET, "/PRODUCTS")), Route::ProductList);
        assert_eq!(Route::decide(&req(Method::GET, "/PaymentMethods")), Route::PaymentMethods);
        assert_eq!(Route::decide(&req(Method::GET, "/OrderStatus")), Route::OrderStatuses);
    }

    #[test]
    fn order_collection_routes_by_method() {
        assert_eq!(Route::decide(&req(Method::POST, "/orders")), Route::CreateOrder);
        // GET on the collection is not a named route; it forwards verbatim.
        assert_eq!(Route::decide(&req(Method::GET, "/orders")), Route::Passthrough);
    }

    #[test]
    fn payment_token_requires_post() {
        assert_eq!(
            Route::decide(&req(Method::POST, "/create-payment-token")),
            Route::PaymentTokenMock
        );
        assert_eq!(
            Route::decide(&req(Method::GET, "/create-payment-token")),
            Route::Passthrough
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_passthrough() {
        assert_eq!(Route::decide(&req(Method::DELETE, "/Orders/1009")), Route::Passthrough);
        assert_eq!(Route::decide(&req(Method::GET, "/Categories")), Route::Passthrough);
    }

    #[test]
    fn error_visibility_policy_table() {
        let suppressed = [
            Route::decide(&req(Method::GET, "/products")),
            Route::decide(&req(Method::GET, "/orderstatus")),
            Route::decide(&req(Method::GET, "/paymentmethods")),
            Route::decide(&req(Method::POST, "/orders")),
            Route::decide(&req(Method::GET, "/Orders/1009")),
            Route::decide(&req(Method::PUT, "/Orders/1009")),
        ];
        for route in suppressed {
            assert_eq!(route.error_visibility(), ErrorVisibility::Suppressed, "{route:?}");
        }

        assert_eq!(
            Route::decide(&req(Method::GET, "/Categories")).error_visibility(),
            ErrorVisibility::Surfaced
        );
    }
}
