use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use crate::constants::UNCATEGORIZED_SECTOR;
use crate::portfolio::allocation::allocation_model::{PortfolioAllocation, SectorAllocation};
use crate::portfolio::holdings::HoldingsServiceTrait;
use crate::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Trait defining the contract for allocation queries.
pub trait AllocationServiceTrait: Send + Sync {
    /// Computes the sector breakdown of the whole portfolio, valued at cost.
    fn get_portfolio_allocation(&self, base_currency: &str) -> Result<PortfolioAllocation>;
}

/// Service aggregating holdings into a sector breakdown
pub struct AllocationService {
    holdings_service: Arc<dyn HoldingsServiceTrait>,
}

impl AllocationService {
    /// Creates a new AllocationService instance with injected dependencies
    pub fn new(holdings_service: Arc<dyn HoldingsServiceTrait>) -> Self {
        Self { holdings_service }
    }
}

impl AllocationServiceTrait for AllocationService {
    fn get_portfolio_allocation(&self, base_currency: &str) -> Result<PortfolioAllocation> {
        let holdings = self.holdings_service.get_holdings(base_currency)?;

        // Aggregate book values by sector
        let mut sector_values: HashMap<String, Decimal> = HashMap::new();
        let mut total_value = Decimal::ZERO;

        for holding in holdings {
            let sector = holding
                .stock
                .sector
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED_SECTOR.to_string());

            *sector_values.entry(sector).or_insert(Decimal::ZERO) += holding.book_value;
            total_value += holding.book_value;
        }

        // Zero and negative buckets are kept; a zero total yields 0% for
        // every bucket, and a negative total divides normally.
        let mut sectors: Vec<SectorAllocation> = sector_values
            .into_iter()
            .map(|(sector, value)| {
                let percentage = if total_value.is_zero() {
                    Decimal::ZERO
                } else {
                    (value / total_value * dec!(100)).round_dp(2)
                };

                SectorAllocation {
                    sector,
                    value,
                    percentage,
                }
            })
            .collect();

        // Sort by value descending; tie-break on name so the order is stable
        sectors.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.sector.cmp(&b.sector)));

        debug!(
            "Portfolio allocation across {} sectors, total value {}",
            sectors.len(),
            total_value
        );

        Ok(PortfolioAllocation {
            base_currency: base_currency.to_string(),
            total_value,
            sectors,
        })
    }
}
