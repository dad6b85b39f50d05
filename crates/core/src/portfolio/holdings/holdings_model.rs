//! Holdings view models.

use crate::stocks::Stock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived view of a single stock position.
///
/// All monetary fields are expressed in the base currency. The view is
/// recomputed from the transaction history on every request and never
/// persisted, so identical histories always produce identical views and no
/// "computed at" timestamp is carried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockHolding {
    /// The stock this holding describes
    pub stock: Stock,
    /// Currency the derived amounts are denominated in
    pub base_currency: String,
    /// Signed net position: bought minus sold, negative when net short
    pub quantity: Decimal,
    /// Purchase-weighted average cost per share
    pub average_cost: Decimal,
    /// Net quantity × average cost
    pub book_value: Decimal,
    /// Number of recorded transactions behind the derived fields
    pub transaction_count: usize,
}
