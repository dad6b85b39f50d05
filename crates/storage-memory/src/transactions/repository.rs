use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use stockfolio_core::transactions::{
    parse_transaction_date, NewTransaction, Transaction, TransactionError,
    TransactionRepositoryTrait, TransactionType, TransactionUpdate,
};
use stockfolio_core::Result;

use crate::store::MemoryStore;

/// Repository for transaction records backed by the shared [`MemoryStore`].
pub struct TransactionRepository {
    store: Arc<MemoryStore>,
}

impl TransactionRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        TransactionRepository { store }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        let records = self.store.read()?;
        records
            .transactions
            .get(transaction_id)
            .cloned()
            .ok_or_else(|| TransactionError::NotFound(transaction_id.to_string()).into())
    }

    fn get_transactions_by_stock_id(&self, stock_id: &str) -> Result<Vec<Transaction>> {
        let records = self.store.read()?;
        let mut transactions: Vec<Transaction> = records
            .transactions
            .values()
            .filter(|transaction| transaction.stock_id == stock_id)
            .cloned()
            .collect();
        // Map iteration order is arbitrary; return oldest first.
        transactions.sort_by(|a, b| {
            a.transaction_date
                .cmp(&b.transaction_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(transactions)
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let transaction_type = TransactionType::from_str(&new_transaction.transaction_type)
            .map_err(TransactionError::InvalidData)?;
        let transaction_date = parse_transaction_date(&new_transaction.transaction_date)?;

        let now = Utc::now();
        let transaction = Transaction {
            id: new_transaction
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            stock_id: new_transaction.stock_id,
            transaction_type,
            transaction_date,
            quantity: new_transaction.quantity,
            unit_price: new_transaction.unit_price,
            currency: new_transaction.currency,
            exchange_rate: new_transaction.exchange_rate,
            fx_fee: new_transaction.fx_fee,
            notes: new_transaction.notes,
            created_at: now,
            updated_at: now,
        };

        let mut records = self.store.write()?;
        records
            .transactions
            .insert(transaction.id.clone(), transaction.clone());
        Ok(transaction)
    }

    async fn update_transaction(
        &self,
        transaction_update: TransactionUpdate,
    ) -> Result<Transaction> {
        let transaction_type = TransactionType::from_str(&transaction_update.transaction_type)
            .map_err(TransactionError::InvalidData)?;
        let transaction_date = parse_transaction_date(&transaction_update.transaction_date)?;

        let mut records = self.store.write()?;
        let transaction = records
            .transactions
            .get_mut(&transaction_update.id)
            .ok_or_else(|| TransactionError::NotFound(transaction_update.id.clone()))?;

        transaction.stock_id = transaction_update.stock_id;
        transaction.transaction_type = transaction_type;
        transaction.transaction_date = transaction_date;
        transaction.quantity = transaction_update.quantity;
        transaction.unit_price = transaction_update.unit_price;
        transaction.currency = transaction_update.currency;
        transaction.exchange_rate = transaction_update.exchange_rate;
        transaction.fx_fee = transaction_update.fx_fee;
        transaction.notes = transaction_update.notes;
        transaction.updated_at = Utc::now();

        Ok(transaction.clone())
    }

    async fn delete_transaction(&self, transaction_id: String) -> Result<Transaction> {
        let mut records = self.store.write()?;
        records
            .transactions
            .remove(&transaction_id)
            .ok_or_else(|| TransactionError::NotFound(transaction_id).into())
    }
}
