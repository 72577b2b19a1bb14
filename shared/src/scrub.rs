//! Masking of secrets in values bound for the logs.
//!
//! Invoked on request/response payloads before they are passed to
//! `tracing`; credentials and card data never reach CloudWatch in clear
//! text.

use serde_json::Value;

const SENSITIVE_KEYS: &[&str] = &[
    "cardnumber",
    "card_number",
    "cardverification",
    "cardverificationvalue",
    "cvv",
    "cvv2",
    "securitycode",
    "privatekey",
    "private_key",
    "token",
    "secureurl_token",
    "password",
    "authorization",
];

fn is_sensitive(key: &str) -> bool {
    SENSITIVE_KEYS
        .iter()
        .any(|candidate| key.eq_ignore_ascii_case(candidate))
}

/// Deep-copy `value` with every sensitive field replaced by `"***"`.
pub fn mask_sensitive(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let masked = map
                .iter()
                .map(|(key, inner)| {
                    if is_sensitive(key) {
                        (key.clone(), Value::String("***".to_string()))
                    } else {
                        (key.clone(), mask_sensitive(inner))
                    }
                })
                .collect();
            Value::Object(masked)
        }
        Value::Array(items) => Value::Array(items.iter().map(mask_sensitive).collect()),
        other => other.clone(),
    }
}
