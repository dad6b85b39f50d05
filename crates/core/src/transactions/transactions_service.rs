use log::debug;
use std::sync::Arc;

use crate::stocks::StockRepositoryTrait;
use crate::transactions::transactions_model::*;
use crate::transactions::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service for managing transactions
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    stock_repository: Arc<dyn StockRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance with injected dependencies
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        stock_repository: Arc<dyn StockRepositoryTrait>,
    ) -> Self {
        Self {
            transaction_repository,
            stock_repository,
        }
    }

    /// Validates a new transaction and normalizes it for persistence.
    fn prepare_new_transaction(&self, mut transaction: NewTransaction) -> Result<NewTransaction> {
        transaction.validate()?;

        // Verify the referenced stock exists before recording against it
        self.stock_repository.get_stock(&transaction.stock_id)?;

        if transaction.id.is_none() {
            transaction.id = Some(Uuid::new_v4().to_string());
        }
        transaction.currency = transaction.currency.to_uppercase();

        Ok(transaction)
    }

    /// Validates an updated transaction and normalizes it for persistence.
    fn prepare_update_transaction(
        &self,
        mut transaction: TransactionUpdate,
    ) -> Result<TransactionUpdate> {
        transaction.validate()?;

        // Verify the referenced stock exists
        self.stock_repository.get_stock(&transaction.stock_id)?;

        transaction.currency = transaction.currency.to_uppercase();

        Ok(transaction)
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    /// Retrieves a transaction by ID
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.transaction_repository.get_transaction(transaction_id)
    }

    /// Retrieves all transactions recorded against a stock
    fn get_transactions_by_stock_id(&self, stock_id: &str) -> Result<Vec<Transaction>> {
        self.transaction_repository
            .get_transactions_by_stock_id(stock_id)
    }

    /// Creates a new transaction
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let prepared = self.prepare_new_transaction(new_transaction)?;
        debug!(
            "Recording {} transaction for stock {}",
            prepared.transaction_type, prepared.stock_id
        );
        self.transaction_repository
            .create_transaction(prepared)
            .await
    }

    /// Updates an existing transaction
    async fn update_transaction(
        &self,
        transaction_update: TransactionUpdate,
    ) -> Result<Transaction> {
        let prepared = self.prepare_update_transaction(transaction_update)?;
        self.transaction_repository
            .update_transaction(prepared)
            .await
    }

    /// Deletes a transaction
    async fn delete_transaction(&self, transaction_id: String) -> Result<Transaction> {
        debug!("Deleting transaction {}", transaction_id);
        self.transaction_repository
            .delete_transaction(transaction_id)
            .await
    }
}
