use super::stocks_model::*;
use crate::Result;
use async_trait::async_trait;

/// Trait defining the contract for Stock repository operations.
#[async_trait]
pub trait StockRepositoryTrait: Send + Sync {
    fn get_stock(&self, stock_id: &str) -> Result<Stock>;
    fn get_stocks(&self) -> Result<Vec<Stock>>;
    /// Looks up a stock by its ticker symbol, case-insensitively.
    fn get_stock_by_symbol(&self, symbol: &str) -> Result<Option<Stock>>;
    async fn create_stock(&self, new_stock: NewStock) -> Result<Stock>;
    async fn update_stock(&self, stock_update: StockUpdate) -> Result<Stock>;
    /// Deletes a stock and returns the deleted record. Implementations also
    /// remove the stock's transactions and notes so no orphaned records
    /// survive the delete.
    async fn delete_stock(&self, stock_id: String) -> Result<Stock>;
}

/// Trait defining the contract for Stock service operations.
#[async_trait]
pub trait StockServiceTrait: Send + Sync {
    fn get_stock(&self, stock_id: &str) -> Result<Stock>;
    fn get_stocks(&self) -> Result<Vec<Stock>>;
    fn get_stock_by_symbol(&self, symbol: &str) -> Result<Option<Stock>>;
    async fn create_stock(&self, new_stock: NewStock) -> Result<Stock>;
    async fn update_stock(&self, stock_update: StockUpdate) -> Result<Stock>;
    async fn delete_stock(&self, stock_id: String) -> Result<Stock>;
}
