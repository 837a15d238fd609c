// --- File: crates/syncify_salesforce/src/handlers.rs ---
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use syncify_config::AppConfig;

use crate::auth::acquire_token;
use crate::logic::{describe_member_object, list_members};

// --- State for Salesforce Handlers ---
// Only needs AppConfig; the reqwest client is shared via syncify_common.
#[derive(Clone)]
pub struct SalesforceState {
    pub config: Arc<AppConfig>,
}

fn guarded_config(
    state: &SalesforceState,
) -> Result<&syncify_config::SalesforceConfig, (StatusCode, String)> {
    if !state.config.use_salesforce {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Salesforce service is disabled.".to_string(),
        ));
    }
    state.config.salesforce.as_ref().ok_or((
        StatusCode::INTERNAL_SERVER_ERROR,
        "Salesforce configuration not loaded.".to_string(),
    ))
}

/// Smoke-test handler for the JWT bearer exchange. The token itself is
/// only logged, never returned to the caller.
#[axum::debug_handler]
pub async fn jwt_exchange_handler(
    State(state): State<Arc<SalesforceState>>,
) -> Result<String, (StatusCode, String)> {
    let sf_config = guarded_config(&state)?;
    match acquire_token(sf_config).await {
        Ok(credential) => {
            info!(
                instance_url = %credential.instance_url,
                "Salesforce JWT authentication succeeded"
            );
            Ok("JWT authentication succeeded. Access token logged on the server.".to_string())
        }
        Err(e) => {
            error!("Salesforce JWT authentication failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Salesforce JWT authentication failed.".to_string(),
            ))
        }
    }
}

/// Fetches the member object description and passes it through verbatim.
#[axum::debug_handler]
pub async fn test_salesforce_handler(
    State(state): State<Arc<SalesforceState>>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let sf_config = guarded_config(&state)?;
    let credential = acquire_token(sf_config).await.map_err(|e| {
        error!("Salesforce JWT authentication failed: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Salesforce JWT authentication failed.".to_string(),
        )
    })?;
    match describe_member_object(&credential).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            error!("Salesforce API call failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Salesforce API call failed.".to_string(),
            ))
        }
    }
}

/// Lists all member records (the QueryGateway read path).
#[axum::debug_handler]
pub async fn list_members_handler(
    State(state): State<Arc<SalesforceState>>,
) -> Result<Json<Vec<Value>>, (StatusCode, String)> {
    let sf_config = guarded_config(&state)?;
    let credential = acquire_token(sf_config).await.map_err(|e| {
        error!("Salesforce JWT authentication failed: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Salesforce JWT authentication failed.".to_string(),
        )
    })?;
    match list_members(&credential).await {
        Ok(records) => Ok(Json(records)),
        Err(e) => {
            error!("Failed to read Salesforce member records: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read Salesforce member records.".to_string(),
            ))
        }
    }
}
