// --- File: crates/syncify_sync/src/handlers.rs ---
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::error;

use syncify_config::{AppConfig, SalesforceConfig, ShopifyConfig};
use syncify_shopify::OrderCreated;

use crate::logic::{
    forward_order_created, sync_salesforce_to_shopify, sync_shopify_to_salesforce, SyncReport,
};

// --- State for Sync Handlers ---
#[derive(Clone)]
pub struct SyncState {
    pub config: Arc<AppConfig>,
}

/// Both sides must be enabled and configured before any sync or webhook
/// forwarding can run.
fn guarded_configs(
    state: &SyncState,
) -> Result<(&SalesforceConfig, &ShopifyConfig), (StatusCode, String)> {
    if !state.config.use_salesforce || !state.config.use_shopify {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Sync requires both Salesforce and Shopify to be enabled.".to_string(),
        ));
    }
    match (state.config.salesforce.as_ref(), state.config.shopify.as_ref()) {
        (Some(sf), Some(shopify)) => Ok((sf, shopify)),
        _ => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Sync configuration not loaded.".to_string(),
        )),
    }
}

/// Liveness probe for the webhook path.
pub async fn webhook_liveness_handler() -> &'static str {
    "Hello, Shopify Webhook order!"
}

/// Receives an order-created webhook and forwards it to Salesforce.
/// No signature verification and no queueing; a failed forward is
/// reported as 500 and the event is lost.
#[axum::debug_handler]
pub async fn order_created_handler(
    State(state): State<Arc<SyncState>>,
    Json(order): Json<OrderCreated>,
) -> Result<String, (StatusCode, String)> {
    let (sf_config, _) = guarded_configs(&state)?;
    match forward_order_created(sf_config, &order).await {
        Ok(()) => Ok("Webhook received and Salesforce record created.".to_string()),
        Err(e) => {
            error!("Order webhook forwarding failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Salesforce API call failed.".to_string(),
            ))
        }
    }
}

/// Outbound sync: Shopify customers -> Salesforce member records.
#[axum::debug_handler]
pub async fn shopify_to_salesforce_handler(
    State(state): State<Arc<SyncState>>,
) -> Result<Json<SyncReport>, (StatusCode, String)> {
    let (sf_config, shopify_config) = guarded_configs(&state)?;
    match sync_shopify_to_salesforce(sf_config, shopify_config).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            error!("Shopify -> Salesforce sync failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to sync Shopify members to Salesforce.".to_string(),
            ))
        }
    }
}

/// Inbound sync: Salesforce membership tags -> Shopify customer tags.
#[axum::debug_handler]
pub async fn salesforce_to_shopify_handler(
    State(state): State<Arc<SyncState>>,
) -> Result<Json<SyncReport>, (StatusCode, String)> {
    let (sf_config, shopify_config) = guarded_configs(&state)?;
    match sync_salesforce_to_shopify(sf_config, shopify_config).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            error!("Salesforce -> Shopify sync failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to sync Salesforce members to Shopify.".to_string(),
            ))
        }
    }
}
