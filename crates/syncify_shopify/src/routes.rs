// --- File: crates/syncify_shopify/src/routes.rs ---

use crate::handlers::{list_customers_handler, ShopifyState};
use axum::{routing::get, Router};
use syncify_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all Shopify-side routes.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let state = Arc::new(ShopifyState { config });

    Router::new()
        .route("/shopify/customers", get(list_customers_handler))
        .with_state(state)
}
