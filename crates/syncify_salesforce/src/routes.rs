// --- File: crates/syncify_salesforce/src/routes.rs ---

use crate::handlers::{
    jwt_exchange_handler, list_members_handler, test_salesforce_handler, SalesforceState,
};
use axum::{routing::get, Router};
use syncify_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all Salesforce-side routes.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let state = Arc::new(SalesforceState { config });

    Router::new()
        .route("/salesforce/jwt", get(jwt_exchange_handler))
        .route("/test/salesforce", get(test_salesforce_handler))
        .route("/salesforce/members", get(list_members_handler))
        .with_state(state)
}
