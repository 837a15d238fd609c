// --- File: crates/syncify_sync/src/lib.rs ---
// Declare modules within this crate
pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;

pub use error::SyncError;
pub use logic::{SyncFailure, SyncReport};
pub use routes::routes;
