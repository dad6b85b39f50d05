use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use uuid::Uuid;

use stockfolio_core::stocks::{NewStock, Stock, StockError, StockRepositoryTrait, StockUpdate};
use stockfolio_core::Result;

use crate::store::MemoryStore;

/// Repository for stock records backed by the shared [`MemoryStore`].
pub struct StockRepository {
    store: Arc<MemoryStore>,
}

impl StockRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        StockRepository { store }
    }
}

#[async_trait]
impl StockRepositoryTrait for StockRepository {
    fn get_stock(&self, stock_id: &str) -> Result<Stock> {
        let records = self.store.read()?;
        records
            .stocks
            .get(stock_id)
            .cloned()
            .ok_or_else(|| StockError::NotFound(stock_id.to_string()).into())
    }

    fn get_stocks(&self) -> Result<Vec<Stock>> {
        let records = self.store.read()?;
        let mut stocks: Vec<Stock> = records.stocks.values().cloned().collect();
        stocks.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Ok(stocks)
    }

    fn get_stock_by_symbol(&self, symbol: &str) -> Result<Option<Stock>> {
        let records = self.store.read()?;
        Ok(records
            .stocks
            .values()
            .find(|stock| stock.symbol.eq_ignore_ascii_case(symbol))
            .cloned())
    }

    async fn create_stock(&self, new_stock: NewStock) -> Result<Stock> {
        let now = Utc::now();
        let stock = Stock {
            id: new_stock.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            symbol: new_stock.symbol,
            name: new_stock.name,
            currency: new_stock.currency,
            sector: new_stock.sector,
            created_at: now,
            updated_at: now,
        };

        let mut records = self.store.write()?;
        records.stocks.insert(stock.id.clone(), stock.clone());
        Ok(stock)
    }

    async fn update_stock(&self, stock_update: StockUpdate) -> Result<Stock> {
        let mut records = self.store.write()?;
        let stock = records
            .stocks
            .get_mut(&stock_update.id)
            .ok_or_else(|| StockError::NotFound(stock_update.id.clone()))?;

        stock.symbol = stock_update.symbol;
        stock.name = stock_update.name;
        stock.currency = stock_update.currency;
        stock.sector = stock_update.sector;
        stock.updated_at = Utc::now();

        Ok(stock.clone())
    }

    async fn delete_stock(&self, stock_id: String) -> Result<Stock> {
        let mut records = self.store.write()?;
        let deleted = records
            .stocks
            .remove(&stock_id)
            .ok_or_else(|| StockError::NotFound(stock_id.clone()))?;

        // Cascade under the same write lock so no orphaned records survive.
        let transactions_before = records.transactions.len();
        records
            .transactions
            .retain(|_, transaction| transaction.stock_id != stock_id);
        let notes_before = records.notes.len();
        records.notes.retain(|_, note| note.stock_id != stock_id);

        debug!(
            "Deleted stock {} along with {} transactions and {} notes",
            stock_id,
            transactions_before - records.transactions.len(),
            notes_before - records.notes.len()
        );

        Ok(deleted)
    }
}
