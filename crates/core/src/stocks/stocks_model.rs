//! Stock domain models.

use crate::stocks::stocks_errors::StockError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing a stock tracked by the portfolio.
///
/// Holdings, average cost, and book value are derived from the stock's
/// transaction history on demand and never stored on this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Listing currency of the stock
    pub currency: String,
    /// Sector classification; stocks without one fall into the
    /// "Uncategorized" allocation bucket
    pub sector: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for adding a new stock
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewStock {
    pub id: Option<String>,
    pub symbol: String,
    pub name: String,
    pub currency: String,
    pub sector: Option<String>,
}

impl NewStock {
    /// Validates the new stock data
    pub fn validate(&self) -> std::result::Result<(), StockError> {
        validate_stock_fields(&self.symbol, &self.name, &self.currency)
    }
}

/// Input model for updating an existing stock
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub currency: String,
    pub sector: Option<String>,
}

impl StockUpdate {
    /// Validates the updated stock data
    pub fn validate(&self) -> std::result::Result<(), StockError> {
        if self.id.trim().is_empty() {
            return Err(StockError::InvalidData(
                "Stock ID cannot be empty".to_string(),
            ));
        }
        validate_stock_fields(&self.symbol, &self.name, &self.currency)
    }
}

fn validate_stock_fields(
    symbol: &str,
    name: &str,
    currency: &str,
) -> std::result::Result<(), StockError> {
    if symbol.trim().is_empty() {
        return Err(StockError::InvalidData(
            "Symbol cannot be empty".to_string(),
        ));
    }
    if name.trim().is_empty() {
        return Err(StockError::InvalidData("Name cannot be empty".to_string()));
    }
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(StockError::InvalidData(format!(
            "Invalid currency code: '{}'. Expected a 3-letter ISO code",
            currency
        )));
    }
    Ok(())
}
