use rust_decimal::Decimal;

/// Multiplier turning a ratio into a percentage
pub const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Budget utilization at or above which a budget is over its limit
pub const BUDGET_OVER_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Budget utilization at or above which a budget is in warning
pub const BUDGET_WARNING_PERCENT: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Debts due within this many days (inclusive) are due soon
pub const DUE_SOON_DAYS: i64 = 7;

/// Number of holdings shown in the top performers card
pub const DEFAULT_TOP_PERFORMERS: usize = 3;

/// Milliseconds in one day
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Placeholder stored by the browser when no account has been selected
pub const NULL_ACCOUNT_SENTINEL: &str = "null";

/// Longest month series the analytics page charts
pub const MAX_SERIES_MONTHS: usize = 24;

/// Months covered by the analytics page when no range is chosen
pub const DEFAULT_ANALYTICS_MONTHS: u32 = 6;

/// Days counted as one month when projecting goal savings
pub const DAYS_PER_MONTH: i64 = 30;
