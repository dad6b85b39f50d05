//! In-memory storage implementation for Stockfolio.
//!
//! This crate provides a thread-safe, in-process implementation of the
//! repository traits defined in `stockfolio-core`. It contains:
//! - A shared [`MemoryStore`] holding all records behind a single lock
//! - Repository implementations for all domain entities
//!
//! Records live only as long as the process; there is no durability.
//!
//! # Architecture
//!
//! This crate is the only place in the application that knows how records
//! are stored. `core` is storage-agnostic and works with traits.
//!
//! ```text
//!      core (domain)
//!            │
//!            ▼
//! storage-memory (this crate)
//!            │
//!            ▼
//!   RwLock<HashMap> maps
//! ```

pub mod store;

// Repository implementations
pub mod notes;
pub mod stocks;
pub mod transactions;

// Re-export the shared store
pub use store::MemoryStore;

// Re-export from stockfolio-core for convenience
pub use stockfolio_core::errors::{Error, Result};
