// --- File: crates/syncify_sync/src/routes.rs ---

use crate::handlers::{
    order_created_handler, salesforce_to_shopify_handler, shopify_to_salesforce_handler,
    webhook_liveness_handler, SyncState,
};
use axum::{
    routing::{get, post},
    Router,
};
use syncify_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing the webhook receiver and both sync
/// endpoints.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let state = Arc::new(SyncState { config });

    Router::new()
        .route(
            "/webhook/order/created",
            get(webhook_liveness_handler).post(order_created_handler),
        )
        .route(
            "/sync/members/shopify-salesforce",
            post(shopify_to_salesforce_handler),
        )
        .route(
            "/sync/members/salesforce-shopify",
            post(salesforce_to_shopify_handler),
        )
        .with_state(state)
}
