use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expenses::{CategorySummary, Expense, MonthlyExpense};
use crate::investments::AllocationSlice;
use crate::utils::decimal_serde;

/// Everything the dashboard renders, derived in one pass.
///
/// All monetary figures are in `currency`, the user's main currency.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub currency: String,

    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub total_expenses_this_month: Decimal,
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub total_expenses_last_month: Decimal,
    /// Month-over-month change. Absent when last month had no spend; the
    /// client renders no badge at all in that case.
    #[serde(
        default,
        deserialize_with = "decimal_serde::deserialize_option",
        serialize_with = "decimal_serde::serialize_option_amount"
    )]
    pub expense_change_percent: Option<Decimal>,

    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub total_portfolio_value: Decimal,
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub total_portfolio_cost: Decimal,
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub net_worth: Decimal,

    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub total_monthly_income: Decimal,
    pub income_streams_count: usize,

    pub top_categories: Vec<CategorySummary>,
    pub recent_expenses: Vec<Expense>,
    pub portfolio_allocation: Vec<AllocationSlice>,
    pub monthly_expense_trend: Vec<MonthlyExpense>,
}
