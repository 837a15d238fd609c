// --- File: crates/syncify_shopify/src/lib.rs ---
// Declare modules within this crate
pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;

pub use error::ShopifyError;
pub use logic::{Customer, OrderCreated, OrderCustomer};
pub use routes::routes;
