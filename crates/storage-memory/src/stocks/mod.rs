//! In-memory storage implementation for stocks.

mod repository;

pub use repository::StockRepository;
