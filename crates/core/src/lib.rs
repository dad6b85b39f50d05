//! Stockfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Stockfolio.
//! It is storage-agnostic and defines repository traits that are
//! implemented by the `storage-memory` crate.

pub mod constants;
pub mod errors;
pub mod notes;
pub mod portfolio;
pub mod stocks;
pub mod transactions;

// Re-export common types from the stock and portfolio modules
pub use portfolio::*;
pub use stocks::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
