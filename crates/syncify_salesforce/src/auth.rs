// --- File: crates/syncify_salesforce/src/auth.rs ---
//
// OAuth 2.0 JWT bearer flow against the Salesforce token endpoint: a
// short-lived signed assertion is exchanged directly for an access
// token and the org's instance URL. No user interaction, no refresh
// token. The credential is re-acquired per request and never cached;
// the private key is read fresh from disk on every acquisition.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tracing::debug;

use syncify_common::HTTP_CLIENT;
use syncify_config::SalesforceConfig;

use crate::error::SalesforceError;

/// Grant type for the assertion-bearer exchange.
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime in seconds (Salesforce caps this at 5 minutes).
pub const ASSERTION_LIFETIME_SECS: i64 = 180;

/// Claim set of the signed assertion sent to the token endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String, // Connected App consumer key
    pub sub: String, // Integration user username
    pub aud: String, // Login URL
    pub iat: i64,
    pub exp: i64,
    pub scope: String,
}

/// Short-lived bearer credential returned by the token endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct AccessCredential {
    pub access_token: String,
    pub instance_url: String,
}

/// Builds the assertion claim set for a given issue time.
///
/// Kept separate from signing so the expiry arithmetic is testable
/// without key material or a clock.
pub fn build_assertion_claims(config: &SalesforceConfig, issued_at: i64) -> AssertionClaims {
    AssertionClaims {
        iss: config.client_id.clone(),
        sub: config.username.clone(),
        aud: config.login_url.clone(),
        iat: issued_at,
        exp: issued_at + ASSERTION_LIFETIME_SECS,
        scope: "api".to_string(),
    }
}

/// Signs the assertion claims with the given RS256 private key PEM.
pub fn sign_assertion(
    config: &SalesforceConfig,
    private_key_pem: &[u8],
    issued_at: i64,
) -> Result<String, SalesforceError> {
    let claims = build_assertion_claims(config, issued_at);
    let key = EncodingKey::from_rsa_pem(private_key_pem)?;
    let token = encode(&Header::new(Algorithm::RS256), &claims, &key)?;
    Ok(token)
}

/// Exchanges a freshly signed assertion for an access token.
///
/// Reads the private key from `config.key_path` on every call, signs a
/// 3-minute assertion and POSTs it form-encoded to
/// `{login_url}/services/oauth2/token`. No retries; the caller decides
/// how to surface a failure.
pub async fn acquire_token(config: &SalesforceConfig) -> Result<AccessCredential, SalesforceError> {
    let private_key = tokio::fs::read(&config.key_path).await?;
    let assertion = sign_assertion(config, &private_key, Utc::now().timestamp())?;

    let token_url = format!(
        "{}/services/oauth2/token",
        config.login_url.trim_end_matches('/')
    );
    let body = serde_urlencoded::to_string([
        ("grant_type", JWT_BEARER_GRANT_TYPE),
        ("assertion", assertion.as_str()),
    ])
    .map_err(|e| SalesforceError::Encoding(e.to_string()))?;

    debug!("Exchanging JWT assertion at {}", token_url);
    let response = HTTP_CLIENT
        .post(&token_url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SalesforceError::TokenExchange {
            status: status.as_u16(),
            body,
        });
    }

    let credential: AccessCredential = response.json().await?;
    Ok(credential)
}
