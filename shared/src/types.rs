use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Image path substituted when the upstream record carries none.
pub const IMAGE_PLACEHOLDER: &str = "/assets/logo-placeholder.png";

/// Default category assigned to uncategorized products.
pub const DEFAULT_CATEGORY: &str = "shift4shop";

// ========== PRODUCT ==========
//
// Field names match the storefront's expected lowercase shape, which in
// turn mirrors the upstream catalog records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub catalogid: i64,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listprice: Option<f64>,
    pub thumbnailurl: String,
    pub mainimagefile: String,
    pub description: String,
    pub stock: i64,
    pub featured: bool,
    pub categoryid: String,
}

impl Product {
    /// Map a raw upstream catalog record into the storefront shape.
    ///
    /// The upstream is loose with types (numbers arrive as strings on some
    /// records), so numeric fields coerce and default to 0 rather than
    /// failing the whole listing.
    pub fn from_upstream(raw: &Value) -> Self {
        let thumbnail = first_string(raw, &["thumbnail", "thumbnailurl", "image1"])
            .unwrap_or_else(|| IMAGE_PLACEHOLDER.to_string());
        let main_image = first_string(raw, &["image1", "thumbnail", "thumbnailurl"])
            .unwrap_or_else(|| IMAGE_PLACEHOLDER.to_string());

        Self {
            catalogid: lossy_i64(raw.get("catalogid").or_else(|| raw.get("id"))),
            name: string_or_default(raw.get("name")),
            price: lossy_f64(raw.get("price")),
            listprice: raw
                .get("listprice")
                .or_else(|| raw.get("list_price"))
                .and_then(opt_f64),
            thumbnailurl: thumbnail,
            mainimagefile: main_image,
            description: string_or_default(raw.get("description")),
            stock: lossy_i64(raw.get("stock")),
            featured: raw
                .get("featured")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            categoryid: first_string(raw, &["categories", "categoryid"])
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }
}

// ========== ORDER STATUS ==========
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderStatus {
    #[serde(rename = "OrderStatusID")]
    pub orderstatus_id: i64,
    #[serde(rename = "Sorting")]
    pub sorting: i64,
    #[serde(rename = "StatusDefinition")]
    pub status_definition: String,
    #[serde(rename = "StatusText")]
    pub status_text: String,
    #[serde(rename = "Visible")]
    pub visible: bool,
}

// ========== ORDER SUBMISSION ==========
//
// Shape of the upstream order-creation acknowledgement, also used for the
// locally synthesized stand-ins. `ApiError` is present exactly when the
// result was synthesized instead of confirmed by the upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSubmissionResult {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "TransactionID", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(rename = "PaymentInfo", skip_serializing_if = "Option::is_none")]
    pub payment_info: Option<Value>,
    #[serde(rename = "ApiError", skip_serializing_if = "Option::is_none")]
    pub api_error: Option<String>,
}

fn string_or_default(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn first_string(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        raw.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

fn opt_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lossy_f64(value: Option<&Value>) -> f64 {
    value.and_then(opt_f64).unwrap_or(0.0)
}

fn lossy_i64(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_coerces_string_numbers() {
        let raw = json!({
            "catalogid": "42",
            "name": "Season Pass",
            "price": "395.00",
            "list_price": "450.00",
            "stock": "145",
            "image1": "assets/images/3.png",
            "categoryid": "SEASON TICKETS"
        });

        let product = Product::from_upstream(&raw);
        assert_eq!(product.catalogid, 42);
        assert_eq!(product.price, 395.0);
        assert_eq!(product.listprice, Some(450.0));
        assert_eq!(product.stock, 145);
        assert_eq!(product.mainimagefile, "assets/images/3.png");
        assert_eq!(product.thumbnailurl, "assets/images/3.png");
        assert_eq!(product.categoryid, "SEASON TICKETS");
    }

    #[test]
    fn product_defaults_on_malformed_fields() {
        let raw = json!({
            "id": 7,
            "price": "not-a-price",
            "stock": null,
            "featured": "yes"
        });

        let product = Product::from_upstream(&raw);
        assert_eq!(product.catalogid, 7);
        assert_eq!(product.price, 0.0);
        assert_eq!(product.listprice, None);
        assert_eq!(product.stock, 0);
        assert!(!product.featured);
        assert_eq!(product.name, "");
        assert_eq!(product.thumbnailurl, IMAGE_PLACEHOLDER);
        assert_eq!(product.mainimagefile, IMAGE_PLACEHOLDER);
        assert_eq!(product.categoryid, DEFAULT_CATEGORY);
    }

    #[test]
    fn product_serializes_without_absent_listprice() {
        let raw = json!({ "catalogid": 1, "name": "Ticket", "price": 22 });
        let rendered = serde_json::to_value(Product::from_upstream(&raw)).unwrap();
        assert!(rendered.get("listprice").is_none());
        assert_eq!(rendered["catalogid"], 1);
    }

    #[test]
    fn order_status_uses_upstream_field_names() {
        let status = OrderStatus {
            orderstatus_id: 1,
            sorting: 1,
            status_definition: "New".into(),
            status_text: "New".into(),
            visible: true,
        };

        let rendered = serde_json::to_value(&status).unwrap();
        assert_eq!(rendered["OrderStatusID"], 1);
        assert_eq!(rendered["StatusText"], "New");
    }
}
