// --- File: crates/syncify_shopify/src/error.rs ---
use thiserror::Error;

/// Shopify-specific error types.
#[derive(Error, Debug)]
pub enum ShopifyError {
    /// Error occurred during a Shopify Admin API request
    #[error("Shopify API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Error returned by the Shopify Admin API
    #[error("Shopify API returned an error: Status={status}, Body='{body}'")]
    Api { status: u16, body: String },

    /// Error parsing a Shopify API response
    #[error("Failed to parse Shopify API response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Missing or incomplete Shopify configuration
    #[error("Shopify configuration missing or incomplete")]
    Config,
}
