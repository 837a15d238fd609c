// --- File: crates/syncify_salesforce/src/error.rs ---
use thiserror::Error;

/// Salesforce-specific error types.
#[derive(Error, Debug)]
pub enum SalesforceError {
    /// Private key file could not be read
    #[error("Failed to read private key file: {0}")]
    Key(#[from] std::io::Error),

    /// Signing the JWT assertion failed
    #[error("Failed to sign JWT assertion: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Token endpoint rejected the assertion exchange
    #[error("Token exchange rejected: Status={status}, Body='{body}'")]
    TokenExchange { status: u16, body: String },

    /// Error occurred during a Salesforce API request
    #[error("Salesforce API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Error returned by the Salesforce API
    #[error("Salesforce API returned an error: Status={status}, Body='{body}'")]
    Api { status: u16, body: String },

    /// Error parsing a Salesforce API response
    #[error("Failed to parse Salesforce API response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failed to encode the token request body
    #[error("Failed to encode token request body: {0}")]
    Encoding(String),

    /// Missing or incomplete Salesforce configuration
    #[error("Salesforce configuration missing or incomplete")]
    Config,
}
