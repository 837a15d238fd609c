// File: services/syncify_backend/src/main.rs
use axum::{routing::get, Router};
use chrono::Utc;
use syncify_config::load_config;
#[cfg(feature = "salesforce")]
use syncify_salesforce::routes as salesforce_routes;
#[cfg(feature = "shopify")]
use syncify_shopify::routes as shopify_routes;
#[cfg(feature = "sync")]
use syncify_sync::routes as sync_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

async fn status_handler() -> String {
    format!("{}: Syncify relay server is running", Utc::now().to_rfc3339())
}

#[tokio::main]
async fn main() {
    syncify_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    #[allow(unused_mut)] // mutable only when integration features are enabled
    let mut app = Router::new().route("/", get(status_handler));
    #[cfg(feature = "salesforce")]
    {
        app = app.merge(salesforce_routes(config.clone()));
    }
    #[cfg(feature = "shopify")]
    {
        app = app.merge(shopify_routes(config.clone()));
    }
    #[cfg(feature = "sync")]
    {
        app = app.merge(sync_routes(config.clone()));
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind address");
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
