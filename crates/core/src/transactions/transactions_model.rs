//! Transaction domain models.

use crate::transactions::transactions_errors::TransactionError;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Helper function to parse a transaction date string.
///
/// Accepts a full RFC3339 timestamp ("2024-03-01T14:30:00Z") or a plain
/// calendar date ("2024-03-01"), which is read as midnight UTC.
pub fn parse_transaction_date(raw: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(rfc3339_err) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            // Use midnight UTC for date-only values
            Ok(date) => Ok(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default())),
            Err(_) => Err(rfc3339_err),
        },
    }
}

/// Enum representing the side of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        use crate::transactions::transactions_constants::*;
        match self {
            TransactionType::Buy => TRANSACTION_TYPE_BUY,
            TransactionType::Sell => TRANSACTION_TYPE_SELL,
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use crate::transactions::transactions_constants::*;
        match s {
            s if s == TRANSACTION_TYPE_BUY => Ok(TransactionType::Buy),
            s if s == TRANSACTION_TYPE_SELL => Ok(TransactionType::Sell),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

/// Domain model representing a recorded transaction in the system
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    // Identity
    pub id: String,
    pub stock_id: String,

    // Classification
    pub transaction_type: TransactionType,

    // Timing
    #[serde(with = "timestamp_format")]
    pub transaction_date: DateTime<Utc>,

    // Quantities. `unit_price` is denominated in the transaction currency;
    // `exchange_rate` converts it into the base currency; `fx_fee` is a flat
    // fee already expressed in the base currency.
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub currency: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fx_fee: Option<Decimal>,

    // Metadata
    pub notes: Option<String>,

    // Audit
    #[serde(with = "timestamp_format")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp_format")]
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Get the exchange rate, defaulting to one if not set
    pub fn rate(&self) -> Decimal {
        self.exchange_rate.unwrap_or(Decimal::ONE)
    }

    /// Get the FX fee, defaulting to zero if not set
    pub fn fee(&self) -> Decimal {
        self.fx_fee.unwrap_or(Decimal::ZERO)
    }

    /// Whether this transaction adds shares to the position
    pub fn is_buy(&self) -> bool {
        self.transaction_type == TransactionType::Buy
    }
}

/// Input model for recording a new transaction
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub id: Option<String>,
    pub stock_id: String,
    pub transaction_type: String,
    pub transaction_date: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub currency: String,
    #[serde(default)]
    pub exchange_rate: Option<Decimal>,
    #[serde(default)]
    pub fx_fee: Option<Decimal>,
    pub notes: Option<String>,
}

impl NewTransaction {
    /// Validates the new transaction data
    pub fn validate(&self) -> std::result::Result<(), TransactionError> {
        validate_transaction_fields(
            &self.stock_id,
            &self.transaction_type,
            &self.transaction_date,
            self.quantity,
            self.unit_price,
            &self.currency,
            self.exchange_rate,
            self.fx_fee,
        )
    }
}

/// Input model for updating an existing transaction
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub id: String,
    pub stock_id: String,
    pub transaction_type: String,
    pub transaction_date: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub currency: String,
    #[serde(default)]
    pub exchange_rate: Option<Decimal>,
    #[serde(default)]
    pub fx_fee: Option<Decimal>,
    pub notes: Option<String>,
}

impl TransactionUpdate {
    /// Validates the updated transaction data
    pub fn validate(&self) -> std::result::Result<(), TransactionError> {
        if self.id.trim().is_empty() {
            return Err(TransactionError::InvalidData(
                "Transaction ID cannot be empty".to_string(),
            ));
        }
        validate_transaction_fields(
            &self.stock_id,
            &self.transaction_type,
            &self.transaction_date,
            self.quantity,
            self.unit_price,
            &self.currency,
            self.exchange_rate,
            self.fx_fee,
        )
    }
}

/// Shared validation for transaction inputs. Keeps the engine's trust
/// contract: records that reach valuation always carry positive quantity
/// and unit price, a positive exchange rate when set, and a non-negative
/// FX fee when set.
#[allow(clippy::too_many_arguments)]
fn validate_transaction_fields(
    stock_id: &str,
    transaction_type: &str,
    transaction_date: &str,
    quantity: Decimal,
    unit_price: Decimal,
    currency: &str,
    exchange_rate: Option<Decimal>,
    fx_fee: Option<Decimal>,
) -> std::result::Result<(), TransactionError> {
    use crate::transactions::transactions_constants::is_supported_transaction_type;

    if stock_id.trim().is_empty() {
        return Err(TransactionError::InvalidData(
            "Stock ID cannot be empty".to_string(),
        ));
    }
    if !is_supported_transaction_type(transaction_type) {
        return Err(TransactionError::InvalidData(format!(
            "Unknown transaction type: '{}'. Expected BUY or SELL",
            transaction_type
        )));
    }

    // Validate date format
    if parse_transaction_date(transaction_date).is_err() {
        return Err(TransactionError::InvalidData(
            "Invalid date format. Expected ISO 8601/RFC3339 or YYYY-MM-DD".to_string(),
        ));
    }

    if quantity <= Decimal::ZERO {
        return Err(TransactionError::InvalidData(format!(
            "Quantity must be positive, got {}",
            quantity
        )));
    }
    if unit_price <= Decimal::ZERO {
        return Err(TransactionError::InvalidData(format!(
            "Unit price must be positive, got {}",
            unit_price
        )));
    }
    if let Some(rate) = exchange_rate {
        if rate <= Decimal::ZERO {
            return Err(TransactionError::InvalidData(format!(
                "Exchange rate must be positive, got {}",
                rate
            )));
        }
    }
    if let Some(fee) = fx_fee {
        if fee < Decimal::ZERO {
            return Err(TransactionError::InvalidData(format!(
                "FX fee cannot be negative, got {}",
                fee
            )));
        }
    }
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(TransactionError::InvalidData(format!(
            "Invalid currency code: '{}'. Expected a 3-letter ISO code",
            currency
        )));
    }

    Ok(())
}

// Custom serialization for timestamps to ensure consistent ISO 8601 formatting
mod timestamp_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Always serialize in ISO 8601 format with UTC timezone
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_transaction_date(&s).map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid timestamp format: {}. Expected ISO 8601/RFC3339 or YYYY-MM-DD",
                s
            ))
        })
    }
}
