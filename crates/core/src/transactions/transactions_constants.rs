/// Transaction types
///
/// Each constant represents one of the supported transaction sides.

/// Purchase of shares. Increases the net position and contributes to the
/// average cost basis.
pub const TRANSACTION_TYPE_BUY: &str = "BUY";

/// Disposal of shares. Decreases the net position; the average cost basis
/// is left untouched.
pub const TRANSACTION_TYPE_SELL: &str = "SELL";

/// All supported transaction types.
pub const TRANSACTION_TYPES: [&str; 2] = [TRANSACTION_TYPE_BUY, TRANSACTION_TYPE_SELL];

/// Checks whether a raw string names a supported transaction type.
pub fn is_supported_transaction_type(transaction_type: &str) -> bool {
    TRANSACTION_TYPES.contains(&transaction_type)
}
