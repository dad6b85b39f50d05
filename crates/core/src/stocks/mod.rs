//! Stocks module - domain models, services, and traits.

mod stocks_errors;
mod stocks_model;
mod stocks_service;
mod stocks_traits;



pub use stocks_errors::StockError;
pub use stocks_model::{NewStock, Stock, StockUpdate};
pub use stocks_service::StockService;
pub use stocks_traits::{StockRepositoryTrait, StockServiceTrait};
