// --- File: crates/syncify_sync/src/logic.rs ---
//
// The two member sync loops and the order webhook forwarder. Both loops
// are best-effort: a per-record failure is logged, recorded in the
// report and skipped, never aborting the run. Records are processed
// sequentially; there is no concurrent fan-out.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use syncify_config::{SalesforceConfig, ShopifyConfig};
use syncify_salesforce::auth::acquire_token;
use syncify_salesforce::logic::{
    create_order_record, query_members_with_tag, upsert_member, MemberFields, MemberTagRecord,
    OrderRecord,
};
use syncify_shopify::logic::{list_customers, update_customer_tags, OrderCreated};

use crate::error::SyncError;

// --- Data Structures ---

/// A single skipped record: which one, and why.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SyncFailure {
    pub id: String,
    pub error: String,
}

/// Outcome of one sync run. `synced` is a happy count (see the sync
/// functions for what each direction counts); `failures` makes the
/// best-effort policy observable instead of log-only.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SyncReport {
    pub synced: usize,
    pub failures: Vec<SyncFailure>,
}

// --- Core Logic Functions ---

/// Pushes every Shopify customer onto its Salesforce member record,
/// keyed by the external customer id.
///
/// `synced` reports the number of customers fetched, not the number of
/// successful upserts; per-customer failures land in `failures` and do
/// not stop the loop.
pub async fn sync_shopify_to_salesforce(
    sf_config: &SalesforceConfig,
    shopify_config: &ShopifyConfig,
) -> Result<SyncReport, SyncError> {
    let credential = acquire_token(sf_config).await?;
    let customers = list_customers(shopify_config).await?;

    let mut failures = Vec::new();
    for customer in &customers {
        let fields = MemberFields {
            email: customer.email.clone().unwrap_or_default(),
            first_name: customer.first_name.clone().unwrap_or_default(),
            last_name: customer.last_name.clone().unwrap_or_default(),
            phone: customer.phone.clone().unwrap_or_default(),
            membership_level: customer.tags.clone().unwrap_or_default(),
        };
        let customer_id = customer.id.to_string();
        match upsert_member(&credential, &customer_id, &fields).await {
            Ok(()) => info!("Synced customer {} to Salesforce", customer_id),
            Err(e) => {
                error!("Upsert failed for customer {}: {e}", customer_id);
                failures.push(SyncFailure {
                    id: customer_id,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(SyncReport {
        synced: customers.len(),
        failures,
    })
}

/// Extracts the (customer id, tag) pair from a member record, or `None`
/// when either side is missing or empty. Skipped records get no Shopify
/// call and no log line.
pub fn tag_target(record: &MemberTagRecord) -> Option<(&str, &str)> {
    let customer_id = record.shopify_customer_id.as_deref().filter(|s| !s.is_empty())?;
    let tag = record.membership_level.as_deref().filter(|s| !s.is_empty())?;
    Some((customer_id, tag))
}

/// Pushes each tagged Salesforce member's membership level back onto
/// the Shopify customer record. The tag field is replaced outright.
///
/// `synced` counts successful updates only.
pub async fn sync_salesforce_to_shopify(
    sf_config: &SalesforceConfig,
    shopify_config: &ShopifyConfig,
) -> Result<SyncReport, SyncError> {
    let credential = acquire_token(sf_config).await?;
    let records = query_members_with_tag(&credential).await?;

    let mut updated = 0;
    let mut failures = Vec::new();
    for record in &records {
        let Some((customer_id, tag)) = tag_target(record) else {
            continue;
        };
        match update_customer_tags(shopify_config, customer_id, tag).await {
            Ok(()) => {
                info!("Updated Shopify customer {} with tag '{}'", customer_id, tag);
                updated += 1;
            }
            Err(e) => {
                error!("Shopify update failed for customer {}: {e}", customer_id);
                failures.push(SyncFailure {
                    id: customer_id.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(SyncReport {
        synced: updated,
        failures,
    })
}

/// Maps an order webhook payload onto the denormalized Salesforce order
/// record. Missing fields become empty strings; an unparseable total
/// price becomes null rather than an error.
pub fn map_order(order: &OrderCreated) -> OrderRecord {
    let customer = order.customer.as_ref();
    OrderRecord {
        shopify_order_id: order.id.map(|id| id.to_string()).unwrap_or_default(),
        customer_id: customer
            .and_then(|c| c.id)
            .map(|id| id.to_string())
            .unwrap_or_default(),
        contact_email: order.contact_email.clone().unwrap_or_default(),
        first_name: customer
            .and_then(|c| c.first_name.clone())
            .unwrap_or_default(),
        last_name: customer
            .and_then(|c| c.last_name.clone())
            .unwrap_or_default(),
        total_price: order.total_price.as_deref().and_then(|p| p.parse().ok()),
        order_created_at: order.created_at.clone(),
        order_updated_at: order.updated_at.clone(),
    }
}

/// Forwards an order-created webhook payload to Salesforce as a new
/// order record. No retry and no queue; a failure here loses the event.
pub async fn forward_order_created(
    sf_config: &SalesforceConfig,
    order: &OrderCreated,
) -> Result<(), SyncError> {
    let record = map_order(order);
    info!(
        order_id = %record.shopify_order_id,
        customer_id = %record.customer_id,
        contact_email = %record.contact_email,
        total_price = ?record.total_price,
        "Received order-created webhook"
    );

    let credential = acquire_token(sf_config).await?;
    create_order_record(&credential, &record).await?;
    Ok(())
}
