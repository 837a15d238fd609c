// --- File: crates/syncify_salesforce/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
#[cfg(test)]
mod auth_test;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;

pub use auth::{acquire_token, AccessCredential};
pub use error::SalesforceError;
pub use routes::routes;
