// --- File: crates/syncify_salesforce/src/logic.rs ---
//
// REST calls against {instance_url}/services/data/{API_VERSION}. Every
// call takes the bearer credential acquired by `auth::acquire_token`;
// there is no shared session state.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use syncify_common::HTTP_CLIENT;

use crate::auth::AccessCredential;
use crate::error::SalesforceError;

pub const API_VERSION: &str = "v60.0";
pub const MEMBER_OBJECT: &str = "Shopify_Member__c";
pub const ORDER_OBJECT: &str = "Shopify_Order__c";
/// External-id field linking a member record back to its Shopify customer.
/// Sync correctness hangs on this identifier never colliding or changing.
pub const MEMBER_EXTERNAL_ID_FIELD: &str = "Shopify_Customer_Id__c";

/// Field set pushed onto a member record during the outbound sync.
#[derive(Serialize, Debug, Default)]
pub struct MemberFields {
    #[serde(rename = "Email__c")]
    pub email: String,
    #[serde(rename = "First_Name__c")]
    pub first_name: String,
    #[serde(rename = "Last_Name__c")]
    pub last_name: String,
    #[serde(rename = "Phone__c")]
    pub phone: String,
    #[serde(rename = "Membership_Level__c")]
    pub membership_level: String,
}

/// Denormalized order record created on webhook receipt.
#[derive(Serialize, Debug, Default)]
pub struct OrderRecord {
    #[serde(rename = "Shopify_Order_Id__c")]
    pub shopify_order_id: String,
    #[serde(rename = "Customer_Id__c")]
    pub customer_id: String,
    #[serde(rename = "Contact_Email__c")]
    pub contact_email: String,
    #[serde(rename = "First_Name__c")]
    pub first_name: String,
    #[serde(rename = "Last_Name__c")]
    pub last_name: String,
    #[serde(rename = "Total_Price__c")]
    pub total_price: Option<f64>,
    #[serde(rename = "Order_Create_At__c", skip_serializing_if = "Option::is_none")]
    pub order_created_at: Option<String>,
    #[serde(rename = "Order_Update_At__c", skip_serializing_if = "Option::is_none")]
    pub order_updated_at: Option<String>,
}

/// Member record subset used by the inbound tag sync.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct MemberTagRecord {
    #[serde(rename = "Shopify_Customer_Id__c", default)]
    pub shopify_customer_id: Option<String>,
    #[serde(rename = "Membership_Level__c", default)]
    pub membership_level: Option<String>,
}

fn data_url(cred: &AccessCredential, path: &str) -> String {
    format!(
        "{}/services/data/{API_VERSION}{path}",
        cred.instance_url.trim_end_matches('/')
    )
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SalesforceError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SalesforceError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Fetches the member object description. Backs the `/test/salesforce`
/// smoke-test endpoint; the response is passed through verbatim.
pub async fn describe_member_object(cred: &AccessCredential) -> Result<Value, SalesforceError> {
    let url = data_url(cred, &format!("/sobjects/{MEMBER_OBJECT}"));
    let response = HTTP_CLIENT
        .get(&url)
        .bearer_auth(&cred.access_token)
        .send()
        .await?;
    let body = check_status(response).await?.json().await?;
    Ok(body)
}

/// Creates an order record mapped from a webhook payload.
pub async fn create_order_record(
    cred: &AccessCredential,
    record: &OrderRecord,
) -> Result<(), SalesforceError> {
    let url = data_url(cred, &format!("/sobjects/{ORDER_OBJECT}/"));
    debug!("Creating {} record for order {}", ORDER_OBJECT, record.shopify_order_id);
    let response = HTTP_CLIENT
        .post(&url)
        .bearer_auth(&cred.access_token)
        .json(record)
        .send()
        .await?;
    check_status(response).await?;
    Ok(())
}

/// Upserts a member record keyed by the Shopify customer id stored in
/// the external-id field.
pub async fn upsert_member(
    cred: &AccessCredential,
    shopify_customer_id: &str,
    fields: &MemberFields,
) -> Result<(), SalesforceError> {
    let url = data_url(
        cred,
        &format!("/sobjects/{MEMBER_OBJECT}/{MEMBER_EXTERNAL_ID_FIELD}/{shopify_customer_id}"),
    );
    let response = HTTP_CLIENT
        .patch(&url)
        .bearer_auth(&cred.access_token)
        .json(fields)
        .send()
        .await?;
    check_status(response).await?;
    Ok(())
}

/// Runs a SOQL query and returns the raw `records` array.
pub async fn query(cred: &AccessCredential, soql: &str) -> Result<Vec<Value>, SalesforceError> {
    let url = data_url(cred, "/query");
    let response = HTTP_CLIENT
        .get(&url)
        .query(&[("q", soql)])
        .bearer_auth(&cred.access_token)
        .send()
        .await?;
    let body: Value = check_status(response).await?.json().await?;
    let records = body
        .get("records")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    Ok(records)
}

/// Lists all member records with the full field set. Records are
/// returned verbatim; no paging or projection controls.
pub async fn list_members(cred: &AccessCredential) -> Result<Vec<Value>, SalesforceError> {
    let soql = format!(
        "SELECT Id, Name, Email__c, First_Name__c, Last_Name__c, Phone__c, \
         {MEMBER_EXTERNAL_ID_FIELD}, Membership_Level__c, Total_Lifetime_Spend__c, \
         Last_Order_Date__c FROM {MEMBER_OBJECT}"
    );
    query(cred, &soql).await
}

/// Queries members carrying a membership tag, the input set of the
/// inbound sync.
pub async fn query_members_with_tag(
    cred: &AccessCredential,
) -> Result<Vec<MemberTagRecord>, SalesforceError> {
    let soql = format!(
        "SELECT {MEMBER_EXTERNAL_ID_FIELD}, Membership_Level__c FROM {MEMBER_OBJECT} \
         WHERE Membership_Level__c != null"
    );
    let records = query(cred, &soql).await?;
    records
        .into_iter()
        .map(|r| serde_json::from_value(r).map_err(SalesforceError::Parse))
        .collect()
}
