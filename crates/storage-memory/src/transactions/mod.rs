//! In-memory storage implementation for transactions.

mod repository;

pub use repository::TransactionRepository;
