pub mod allocation;
pub mod holdings;
pub mod valuation;

pub use allocation::{AllocationService, AllocationServiceTrait};
pub use holdings::{HoldingsService, HoldingsServiceTrait, StockHolding};
pub use valuation::{
    calculate_average_cost, calculate_book_value, calculate_net_quantity,
    calculate_transaction_total,
};
