//! Pure valuation engine over transaction histories.

mod valuation_calculator;


pub use valuation_calculator::{
    calculate_average_cost, calculate_book_value, calculate_net_quantity,
    calculate_transaction_total,
};
