use std::env;
use std::fmt;

use crate::error::ProxyError;

/// Merchant credentials and upstream location, loaded from the environment.
///
/// There are deliberately no compiled-in defaults: a missing required
/// variable fails the invocation with a 500 before any upstream call.
#[derive(Clone)]
pub struct ProxyConfig {
    pub store_url: String,
    pub private_key: String,
    pub token: String,
    pub secure_url: String,
    pub merchant_number: Option<String>,
}

impl ProxyConfig {
    pub fn from_env() -> Result<Self, ProxyError> {
        let store_url = required("SHIFT4SHOP_STORE_URL")?;
        let store_url = store_url.trim_end_matches('/').to_string();
        let private_key = required("SHIFT4SHOP_PRIVATE_KEY")?;
        let token = required("SHIFT4SHOP_TOKEN")?;
        // The upstream treats SecureURL and the store URL interchangeably.
        let secure_url = optional("SHIFT4SHOP_SECURE_URL").unwrap_or_else(|| store_url.clone());

        Ok(Self {
            store_url,
            private_key,
            token,
            secure_url,
            merchant_number: optional("SHIFT4SHOP_MERCHANT_NUMBER"),
        })
    }
}

// Credentials are opaque secrets; keep them out of debug logs.
impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("store_url", &self.store_url)
            .field("private_key", &"***")
            .field("token", &"***")
            .field("secure_url", &self.secure_url)
            .field("merchant_number", &self.merchant_number.as_deref().map(|_| "***"))
            .finish()
    }
}

fn required(name: &'static str) -> Result<String, ProxyError> {
    optional(name).ok_or(ProxyError::MissingConfiguration(name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_credentials() {
        let config = ProxyConfig {
            store_url: "https://example.s4shops.com".into(),
            private_key: "pk-secret".into(),
            token: "tok-secret".into(),
            secure_url: "https://example.s4shops.com".into(),
            merchant_number: Some("12345".into()),
        };

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("pk-secret"));
        assert!(!rendered.contains("tok-secret"));
        assert!(!rendered.contains("12345"));
        assert!(rendered.contains("example.s4shops.com"));
    }

    #[test]
    fn from_env_reports_first_missing_variable() {
        // Single test covers both outcomes so the process-global environment
        // is never mutated concurrently from another test thread.
        env::remove_var("SHIFT4SHOP_STORE_URL");
        env::remove_var("SHIFT4SHOP_PRIVATE_KEY");
        env::remove_var("SHIFT4SHOP_TOKEN");
        env::remove_var("SHIFT4SHOP_SECURE_URL");

        match ProxyConfig::from_env() {
            Err(ProxyError::MissingConfiguration(name)) => {
                assert_eq!(name, "SHIFT4SHOP_STORE_URL");
            }
            other => panic!("expected MissingConfiguration, got {other:?}"),
        }

        env::set_var("SHIFT4SHOP_STORE_URL", "https://store.example.com/");
        env::set_var("SHIFT4SHOP_PRIVATE_KEY", "pk");
        env::set_var("SHIFT4SHOP_TOKEN", "tok");

        let config = ProxyConfig::from_env().expect("all required variables set");
        assert_eq!(config.store_url, "https://store.example.com");
        assert_eq!(config.secure_url, "https://store.example.com");

        env::remove_var("SHIFT4SHOP_STORE_URL");
        env::remove_var("SHIFT4SHOP_PRIVATE_KEY");
        env::remove_var("SHIFT4SHOP_TOKEN");
    }
}
