use log::{debug, warn};
use std::sync::Arc;

use crate::stocks::stocks_model::*;
use crate::stocks::{StockError, StockRepositoryTrait, StockServiceTrait};
use crate::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service for managing tracked stocks
pub struct StockService {
    stock_repository: Arc<dyn StockRepositoryTrait>,
}

impl StockService {
    /// Creates a new StockService instance with injected dependencies
    pub fn new(stock_repository: Arc<dyn StockRepositoryTrait>) -> Self {
        Self { stock_repository }
    }

    /// Validates a new stock and normalizes it for persistence.
    fn prepare_new_stock(&self, mut stock: NewStock) -> Result<NewStock> {
        stock.validate()?;

        stock.symbol = stock.symbol.to_uppercase();
        stock.currency = stock.currency.to_uppercase();

        // Reject duplicate symbols; the symbol lookup is case-insensitive
        if let Some(existing) = self.stock_repository.get_stock_by_symbol(&stock.symbol)? {
            warn!(
                "Rejecting stock '{}': symbol already tracked as {}",
                stock.symbol, existing.id
            );
            return Err(StockError::DuplicateSymbol(stock.symbol).into());
        }

        if stock.id.is_none() {
            stock.id = Some(Uuid::new_v4().to_string());
        }

        Ok(stock)
    }

    /// Validates an updated stock and normalizes it for persistence.
    fn prepare_update_stock(&self, mut stock: StockUpdate) -> Result<StockUpdate> {
        stock.validate()?;

        stock.symbol = stock.symbol.to_uppercase();
        stock.currency = stock.currency.to_uppercase();

        // The symbol may collide only with the record being updated
        if let Some(existing) = self.stock_repository.get_stock_by_symbol(&stock.symbol)? {
            if existing.id != stock.id {
                return Err(StockError::DuplicateSymbol(stock.symbol).into());
            }
        }

        Ok(stock)
    }
}

#[async_trait]
impl StockServiceTrait for StockService {
    /// Retrieves a stock by ID
    fn get_stock(&self, stock_id: &str) -> Result<Stock> {
        self.stock_repository.get_stock(stock_id)
    }

    /// Retrieves all tracked stocks
    fn get_stocks(&self) -> Result<Vec<Stock>> {
        self.stock_repository.get_stocks()
    }

    /// Retrieves a stock by its ticker symbol
    fn get_stock_by_symbol(&self, symbol: &str) -> Result<Option<Stock>> {
        self.stock_repository.get_stock_by_symbol(symbol)
    }

    /// Adds a new stock to the portfolio
    async fn create_stock(&self, new_stock: NewStock) -> Result<Stock> {
        let prepared = self.prepare_new_stock(new_stock)?;
        debug!("Tracking new stock {}", prepared.symbol);
        self.stock_repository.create_stock(prepared).await
    }

    /// Updates an existing stock
    async fn update_stock(&self, stock_update: StockUpdate) -> Result<Stock> {
        let prepared = self.prepare_update_stock(stock_update)?;
        self.stock_repository.update_stock(prepared).await
    }

    /// Deletes a stock. The repository cascades the delete to the stock's
    /// transactions and notes.
    async fn delete_stock(&self, stock_id: String) -> Result<Stock> {
        debug!("Deleting stock {} and its dependent records", stock_id);
        self.stock_repository.delete_stock(stock_id).await
    }
}
