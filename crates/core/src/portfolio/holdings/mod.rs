//! Holdings module - derived position views over transaction histories.

mod holdings_model;
mod holdings_service;


pub use holdings_model::StockHolding;
pub use holdings_service::{HoldingsService, HoldingsServiceTrait};
