// --- File: crates/syncify_sync/src/error.rs ---
use syncify_salesforce::SalesforceError;
use syncify_shopify::ShopifyError;
use thiserror::Error;

/// Sync-specific error types. Only failures of the surrounding run end
/// up here; per-record failures inside a loop are collected into the
/// sync report instead.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error(transparent)]
    Salesforce(#[from] SalesforceError),

    #[error(transparent)]
    Shopify(#[from] ShopifyError),

    /// Missing or incomplete configuration for one of the two sides
    #[error("Sync configuration missing or incomplete")]
    Config,
}
