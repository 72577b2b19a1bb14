//! Static substitute payloads and locally synthesized results.
//!
//! These are immutable constants returned when the upstream call fails (or,
//! for order statuses, returns nothing). Read endpoints prioritize
//! availability: the storefront keeps rendering even when the commerce API
//! is down.

use serde_json::{json, Value};

use crate::types::{OrderStatus, OrderSubmissionResult, Product};

/// Marker explaining that a result object was synthesized locally.
pub const FALLBACK_NOTE: &str = "Upstream commerce API unavailable; response synthesized locally";

/// Marker attached to records for reserved test orders.
pub const TEST_ORDER_NOTE: &str = "Reserved test order; handled locally";

/// Reserved order-id prefix handled entirely without contacting upstream.
pub const TEST_ORDER_PREFIX: &str = "test-";

const THUMB: &str = "assets/images/thumbnails/1_thumbnail.png";

/// Substitute catalog returned when the product listing cannot be fetched.
pub fn fallback_products() -> Vec<Product> {
    let entries: [(i64, &str, f64, i64, &str); 12] = [
        (12, "GENERAL ADMISSION - NOV 15 - 7:30 PM Breckenridge Vipers vs Park City SilverKings", 22.0, 833, "VIPERS HOME GAME TICKETS (AVAILABLE NOW!!)/NOV 15 - 7:30 PM (Breckenridge Vipers vs Park City SilverKings)"),
        (14, "WHISKEY STAR SKYBOX - NOV 15 (Breckenridge Vipers vs Park City SilverKings)", 44.0, 12, "WHISKEY STAR SKYBOX"),
        (18, "GENERAL ADMISSION - NOV 16 - 7:30 PM Breckenridge Vipers vs Park City SilverKings", 22.0, 972, "VIPERS HOME GAME TICKETS (AVAILABLE NOW!!)/NOV 16 - 7:30 PM (Breckenridge Vipers vs Park City SilverKings)"),
        (19, "GENERAL ADMISSION - NOV 22 - 7:30 PM Breckenridge Vipers vs Mansfield", 22.0, 921, "VIPERS HOME GAME TICKETS (AVAILABLE NOW!!)/NOV 22 - 7:30 PM (Breckenridge Vipers vs Mansfield)"),
        (46, "CHILD ADMISSION - NOV15 Breckenridge Vipers vs Park City SilverKings", 7.0, 493, "CHILD TICKETS (12 & UNDER)"),
        (47, "CHILD ADMISSION - NOV16 Breckenridge Vipers vs Park City SilverKings", 7.0, 499, "CHILD TICKETS (12 & UNDER)"),
        (65, "SKYBOX SEASON PASS 2024/25", 395.0, 145, "SEASON TICKETS"),
        (67, "Viper Pit- Season Pass 17 Games ", 195.0, 189, "SEASON TICKETS@GENERAL ADMISSION"),
        (89, "Black Vipers T-Shirt Unisex Adult", 35.0, 100, "shift4shop"),
        (91, "Grey Vipers T-Shirt Unisex Adult", 35.0, 100, "shift4shop"),
        (97, "Black Vipers Hoodie Adult Unisex", 65.0, 100, "shift4shop"),
        (99, "Black Vipers Hoodie Unisex Youth", 65.0, 100, "shift4shop"),
    ];

    entries
        .iter()
        .map(|&(catalogid, name, price, stock, categoryid)| Product {
            catalogid,
            name: name.to_string(),
            price,
            listprice: None,
            thumbnailurl: THUMB.to_string(),
            mainimagefile: THUMB.to_string(),
            description: String::new(),
            stock,
            featured: false,
            categoryid: categoryid.to_string(),
        })
        .collect()
}

/// Fixed order-status set returned when the upstream list is empty or fails.
pub fn fallback_order_statuses() -> Vec<OrderStatus> {
    let entries: [(i64, &str); 4] = [
        (1, "New"),
        (2, "Processing"),
        (4, "Shipped"),
        (5, "Cancelled"),
    ];

    entries
        .iter()
        .map(|&(id, text)| OrderStatus {
            orderstatus_id: id,
            sorting: id,
            status_definition: text.to_string(),
            status_text: text.to_string(),
            visible: true,
        })
        .collect()
}

/// Success-shaped order acknowledgement produced when upstream order
/// creation fails.
///
/// The `ApiError` marker is the only signal distinguishing this from a real
/// acknowledgement; the status code stays 200 by storefront contract.
pub fn synthesized_order_result(detail: &str) -> OrderSubmissionResult {
    OrderSubmissionResult {
        key: "OrderID".to_string(),
        value: format!("LIVE-{}", chrono::Utc::now().timestamp_millis()),
        status: "ok".to_string(),
        message: "Order received".to_string(),
        transaction_id: Some(uuid::Uuid::new_v4().to_string()),
        payment_info: None,
        api_error: Some(format!("{FALLBACK_NOTE}: {detail}")),
    }
}

/// "Error"-status result for a failed order update, still delivered with 200.
pub fn order_update_error_result(order_id: &str, detail: &str) -> OrderSubmissionResult {
    OrderSubmissionResult {
        key: "OrderID".to_string(),
        value: order_id.to_string(),
        status: "error".to_string(),
        message: "Order update failed".to_string(),
        transaction_id: None,
        payment_info: None,
        api_error: Some(format!("{FALLBACK_NOTE}: {detail}")),
    }
}

/// Result object acknowledging an update to a reserved test order.
pub fn test_order_update_result(order_id: &str) -> OrderSubmissionResult {
    OrderSubmissionResult {
        key: "OrderID".to_string(),
        value: order_id.to_string(),
        status: "ok".to_string(),
        message: "Test order updated".to_string(),
        transaction_id: None,
        payment_info: None,
        api_error: None,
    }
}

/// Minimal order record substituted when the upstream has no such order
/// (or for reserved test order ids, which never reach upstream).
pub fn mock_order(order_id: &str, note: &str) -> Value {
    json!({
        "OrderID": order_id,
        "OrderStatusID": 1,
        "OrderDate": chrono::Utc::now().to_rfc3339(),
        "OrderAmount": 0.0,
        "BillingFirstName": "",
        "BillingLastName": "",
        "OrderItemList": [],
        "ApiError": note,
    })
}

/// Locally minted payment token; marked so it can never pass for a real
/// gateway token.
pub fn payment_token() -> Value {
    json!({
        "token": uuid::Uuid::new_v4().to_string(),
        "expires_at": (chrono::Utc::now() + chrono::Duration::minutes(30)).to_rfc3339(),
        "test_mode": true,
    })
}
