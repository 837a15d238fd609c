// --- File: crates/syncify_shopify/src/logic.rs ---
//
// Shopify Admin REST calls, authenticated with the store's admin token
// via the X-Shopify-Access-Token header. The customer list is fetched
// in a single unpaged call; stores larger than one API page are
// silently truncated.

use serde::{Deserialize, Serialize};
use tracing::debug;

use syncify_common::HTTP_CLIENT;
use syncify_config::ShopifyConfig;

use crate::error::ShopifyError;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

// --- Data Structures ---

/// A storefront customer as returned by the Admin API. Everything but
/// the id is optional; Shopify omits fields freely.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Customer {
    pub id: i64,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    /// Free-text tag string, reused as the membership tier label.
    #[serde(default)]
    pub tags: Option<String>,
}

#[derive(Deserialize, Debug)]
struct CustomersResponse {
    #[serde(default)]
    customers: Vec<Customer>,
}

/// Customer object embedded in an order-created webhook payload.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct OrderCustomer {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Order-created webhook payload. Arrives unauthenticated and without
/// shape validation; every field is tolerated as absent and defaulted
/// downstream rather than rejected.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct OrderCreated {
    pub id: Option<i64>,
    #[serde(default)]
    pub customer: Option<OrderCustomer>,
    pub contact_email: Option<String>,
    pub total_price: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Serialize, Debug)]
struct CustomerTagUpdate<'a> {
    customer: CustomerTagFields<'a>,
}

#[derive(Serialize, Debug)]
struct CustomerTagFields<'a> {
    id: &'a str,
    tags: &'a str,
}

fn admin_url(config: &ShopifyConfig, path: &str) -> String {
    format!(
        "{}/admin/api/{}{}",
        config.admin_base_url(),
        config.api_version,
        path
    )
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ShopifyError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ShopifyError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

// --- Core Logic Functions ---

/// Fetches the full customer list in one unpaged call.
pub async fn list_customers(config: &ShopifyConfig) -> Result<Vec<Customer>, ShopifyError> {
    let url = admin_url(config, "/customers.json");
    debug!("Fetching Shopify customers from {}", url);
    let response = HTTP_CLIENT
        .get(&url)
        .header(ACCESS_TOKEN_HEADER, &config.admin_token)
        .header("Content-Type", "application/json")
        .send()
        .await?;
    let body: CustomersResponse = check_status(response).await?.json().await?;
    Ok(body.customers)
}

/// Replaces a customer's tag field outright.
///
/// Deliberately destructive: existing tags are not merged in. Preserving
/// them would need a GET first and a recombined string.
pub async fn update_customer_tags(
    config: &ShopifyConfig,
    customer_id: &str,
    tags: &str,
) -> Result<(), ShopifyError> {
    let url = admin_url(config, &format!("/customers/{customer_id}.json"));
    let payload = CustomerTagUpdate {
        customer: CustomerTagFields {
            id: customer_id,
            tags,
        },
    };
    let response = HTTP_CLIENT
        .put(&url)
        .header(ACCESS_TOKEN_HEADER, &config.admin_token)
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await?;
    check_status(response).await?;
    Ok(())
}
