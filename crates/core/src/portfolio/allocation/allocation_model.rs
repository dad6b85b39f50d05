//! Allocation models for the portfolio breakdown by sector.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Allocation bucket for a single sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocation {
    /// Sector name; stocks without a classification land in "Uncategorized"
    pub sector: String,
    /// Total book value in base currency
    pub value: Decimal,
    /// Share of total portfolio value (0-100, two decimal places)
    pub percentage: Decimal,
}

/// Complete portfolio breakdown by sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAllocation {
    /// Base currency all values are denominated in
    pub base_currency: String,
    /// Total portfolio book value in base currency
    pub total_value: Decimal,
    /// Buckets per sector, sorted by value descending
    pub sectors: Vec<SectorAllocation>,
}
