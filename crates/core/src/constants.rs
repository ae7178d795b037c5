/// Decimal precision for derived-value calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Calendar months covered by the dashboard expense trend
pub const EXPENSE_TREND_MONTHS: u32 = 6;

/// Number of categories in the dashboard top-spending list
pub const TOP_CATEGORIES_LIMIT: usize = 5;

/// Number of expenses in the dashboard recent-transactions list
pub const RECENT_EXPENSES_LIMIT: usize = 5;
