//! Transactions module - domain models, services, and traits.

mod transactions_constants;
mod transactions_errors;
mod transactions_model;
mod transactions_service;
mod transactions_traits;



pub use transactions_constants::*;
pub use transactions_errors::TransactionError;
pub use transactions_model::{
    parse_transaction_date, NewTransaction, Transaction, TransactionType, TransactionUpdate,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
