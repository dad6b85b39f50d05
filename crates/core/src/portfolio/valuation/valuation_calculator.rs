//! Pure valuation arithmetic over transaction histories.
//!
//! Every function here is synchronous and infallible. Input validation
//! happens upstream in the service layer, so records arriving here always
//! carry positive quantities and prices; degenerate histories (no
//! transactions, no buys) fall back to zero as documented per function.

use crate::transactions::Transaction;
use rust_decimal::Decimal;

/// Calculates the base-currency cash effect of a single transaction.
///
/// The gross amount (`quantity × unit_price`) is converted with the
/// transaction's exchange rate (an absent rate counts as 1). A nonzero FX
/// fee is then added to a BUY's cost and subtracted from a SELL's proceeds;
/// the fee is assumed to already be denominated in base currency.
pub fn calculate_transaction_total(transaction: &Transaction) -> Decimal {
    let converted = transaction.quantity * transaction.unit_price * transaction.rate();

    let fee = transaction.fee();
    if fee.is_zero() {
        return converted;
    }

    if transaction.is_buy() {
        converted + fee
    } else {
        converted - fee
    }
}

/// Calculates the average cost per share in base currency.
///
/// Only BUY transactions contribute: each buy's unit price is normalized
/// with its exchange rate and weighted by its quantity. FX fees are not
/// part of the cost basis. Sells never change the figure; the model is
/// purchase-weighted average cost, not FIFO/LIFO lot relief.
///
/// A history without buys yields zero.
pub fn calculate_average_cost(transactions: &[Transaction]) -> Decimal {
    let mut total_cost = Decimal::ZERO;
    let mut total_quantity = Decimal::ZERO;

    for transaction in transactions.iter().filter(|t| t.is_buy()) {
        let normalized_price = transaction.unit_price * transaction.rate();
        total_cost += transaction.quantity * normalized_price;
        total_quantity += transaction.quantity;
    }

    if total_quantity.is_zero() {
        return Decimal::ZERO;
    }

    total_cost / total_quantity
}

/// Calculates the signed net position: bought quantity minus sold quantity.
///
/// Order-independent over the history. The result goes negative when sells
/// exceed buys; short positions are neither forbidden nor clamped.
pub fn calculate_net_quantity(transactions: &[Transaction]) -> Decimal {
    transactions.iter().fold(Decimal::ZERO, |net, transaction| {
        if transaction.is_buy() {
            net + transaction.quantity
        } else {
            net - transaction.quantity
        }
    })
}

/// Calculates the mark-to-cost book value: net quantity × average cost.
///
/// There is no live price feed in this model, so the position is valued at
/// what it cost rather than at market. Negative for net short histories.
pub fn calculate_book_value(transactions: &[Transaction]) -> Decimal {
    calculate_net_quantity(transactions) * calculate_average_cost(transactions)
}
