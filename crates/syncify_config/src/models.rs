// --- File: crates/syncify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Salesforce Config ---
// Holds the connected-app identity for the JWT bearer flow. The private
// key itself stays on disk; only its path is configured.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SalesforceConfig {
    pub client_id: String, // Connected App consumer key (JWT `iss`)
    pub username: String,  // Integration user (JWT `sub`)
    pub login_url: String, // e.g. https://login.salesforce.com (JWT `aud`)
    pub key_path: String,  // RS256 private key PEM, read fresh per token request
}

// --- Shopify Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShopifyConfig {
    pub store_domain: String, // e.g. my-store.myshopify.com
    pub admin_token: String,  // Admin API access token (X-Shopify-Access-Token)
    #[serde(default = "default_shopify_api_version")]
    pub api_version: String,
}

fn default_shopify_api_version() -> String {
    "2025-04".to_string()
}

impl ShopifyConfig {
    /// Base URL for Admin API calls. `store_domain` is normally a bare
    /// domain; a value that already carries a scheme is used as-is so
    /// local setups can point at a non-TLS endpoint.
    pub fn admin_base_url(&self) -> String {
        if self.store_domain.starts_with("http://") || self.store_domain.starts_with("https://") {
            self.store_domain.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", self.store_domain)
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_salesforce: bool,
    #[serde(default)]
    pub use_shopify: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub salesforce: Option<SalesforceConfig>,
    #[serde(default)]
    pub shopify: Option<ShopifyConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_base_url_prefixes_https_for_bare_domain() {
        let cfg = ShopifyConfig {
            store_domain: "my-store.myshopify.com".to_string(),
            admin_token: "shpat_test".to_string(),
            api_version: default_shopify_api_version(),
        };
        assert_eq!(cfg.admin_base_url(), "https://my-store.myshopify.com");
    }

    #[test]
    fn admin_base_url_keeps_explicit_scheme() {
        let cfg = ShopifyConfig {
            store_domain: "http://127.0.0.1:9292/".to_string(),
            admin_token: "shpat_test".to_string(),
            api_version: default_shopify_api_version(),
        };
        assert_eq!(cfg.admin_base_url(), "http://127.0.0.1:9292");
    }

    #[test]
    fn app_config_defaults_flags_and_sections() {
        let cfg: AppConfig = serde_json::from_str(
            r#"{ "server": { "host": "127.0.0.1", "port": 3000 } }"#,
        )
        .unwrap();
        assert!(!cfg.use_salesforce);
        assert!(!cfg.use_shopify);
        assert!(cfg.salesforce.is_none());
        assert!(cfg.shopify.is_none());
    }

    #[test]
    fn shopify_api_version_defaults_when_absent() {
        let cfg: ShopifyConfig = serde_json::from_str(
            r#"{ "store_domain": "x.myshopify.com", "admin_token": "t" }"#,
        )
        .unwrap();
        assert_eq!(cfg.api_version, "2025-04");
    }
}
