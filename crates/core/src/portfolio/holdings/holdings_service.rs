use log::debug;
use std::sync::Arc;

use crate::portfolio::holdings::holdings_model::StockHolding;
use crate::portfolio::valuation::{
    calculate_average_cost, calculate_book_value, calculate_net_quantity,
};
use crate::stocks::{Stock, StockRepositoryTrait};
use crate::transactions::{Transaction, TransactionRepositoryTrait};
use crate::Result;

/// Trait defining the contract for holdings queries.
pub trait HoldingsServiceTrait: Send + Sync {
    /// Computes the holding view for a single stock.
    fn get_holding(&self, stock_id: &str, base_currency: &str) -> Result<StockHolding>;

    /// Computes holding views for every tracked stock, including stocks
    /// without any transactions (all derived fields zero).
    fn get_holdings(&self, base_currency: &str) -> Result<Vec<StockHolding>>;
}

/// Service composing stocks and their transactions into derived holdings
pub struct HoldingsService {
    stock_repository: Arc<dyn StockRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl HoldingsService {
    /// Creates a new HoldingsService instance with injected dependencies
    pub fn new(
        stock_repository: Arc<dyn StockRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            stock_repository,
            transaction_repository,
        }
    }

    fn build_holding(
        &self,
        stock: Stock,
        transactions: &[Transaction],
        base_currency: &str,
    ) -> StockHolding {
        StockHolding {
            base_currency: base_currency.to_string(),
            quantity: calculate_net_quantity(transactions),
            average_cost: calculate_average_cost(transactions),
            book_value: calculate_book_value(transactions),
            transaction_count: transactions.len(),
            stock,
        }
    }
}

impl HoldingsServiceTrait for HoldingsService {
    fn get_holding(&self, stock_id: &str, base_currency: &str) -> Result<StockHolding> {
        let stock = self.stock_repository.get_stock(stock_id)?;
        let transactions = self
            .transaction_repository
            .get_transactions_by_stock_id(stock_id)?;

        Ok(self.build_holding(stock, &transactions, base_currency))
    }

    fn get_holdings(&self, base_currency: &str) -> Result<Vec<StockHolding>> {
        let stocks = self.stock_repository.get_stocks()?;
        debug!("Computing holdings for {} stocks", stocks.len());

        let mut holdings = Vec::with_capacity(stocks.len());
        for stock in stocks {
            let transactions = self
                .transaction_repository
                .get_transactions_by_stock_id(&stock.id)?;
            holdings.push(self.build_holding(stock, &transactions, base_currency));
        }

        Ok(holdings)
    }
}
