// --- File: crates/syncify_shopify/src/handlers.rs ---
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::error;

use syncify_config::AppConfig;

use crate::logic::{list_customers, Customer};

// --- State for Shopify Handlers ---
#[derive(Clone)]
pub struct ShopifyState {
    pub config: Arc<AppConfig>,
}

/// Lists the storefront customers (single unpaged Admin API call).
#[axum::debug_handler]
pub async fn list_customers_handler(
    State(state): State<Arc<ShopifyState>>,
) -> Result<Json<Vec<Customer>>, (StatusCode, String)> {
    if !state.config.use_shopify {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Shopify service is disabled.".to_string(),
        ));
    }
    let Some(shopify_config) = state.config.shopify.as_ref() else {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Shopify configuration not loaded.".to_string(),
        ));
    };

    match list_customers(shopify_config).await {
        Ok(customers) => Ok(Json(customers)),
        Err(e) => {
            error!("Failed to read Shopify customers: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read Shopify customers.".to_string(),
            ))
        }
    }
}
