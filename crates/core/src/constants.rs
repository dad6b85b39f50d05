/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Sector bucket for stocks without a sector classification
pub const UNCATEGORIZED_SECTOR: &str = "Uncategorized";
