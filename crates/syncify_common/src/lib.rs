// --- File: crates/syncify_common/src/lib.rs ---

// Declare modules within this crate
pub mod http; // Shared HTTP client
pub mod logging; // Logging utilities

// Re-export HTTP utilities for easier access
pub use http::HTTP_CLIENT;
