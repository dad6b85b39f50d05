use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Stock not found: {0}")]
    NotFound(String),

    #[error("Stock with symbol '{0}' already exists")]
    DuplicateSymbol(String),

    #[error("Invalid stock data: {0}")]
    InvalidData(String),
}
