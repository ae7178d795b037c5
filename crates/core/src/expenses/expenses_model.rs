use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde;

/// A user-defined spending category.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A single expense record.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    #[serde(deserialize_with = "decimal_serde::deserialize")]
    pub amount: Decimal,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
    pub is_paid: bool,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence_rule: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// This-month totals partitioned by payment status.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub total_amount: Decimal,
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub paid_amount: Decimal,
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub unpaid_amount: Decimal,
    pub total_count: usize,
    pub paid_count: usize,
    pub unpaid_count: usize,
}

/// A category's slice of one month's spend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: Category,
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub total_amount: Decimal,
    /// Share of the month's total spend; 0 when the month total is zero.
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_rate"
    )]
    pub percentage: Decimal,
    pub transaction_count: usize,
}

/// Total spend for one calendar month, keyed "YYYY-MM".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpense {
    pub month: String,
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub total_amount: Decimal,
}
