use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde;

/// Category of an income stream, as carried on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IncomeType {
    Salary,
    Freelance,
    Investments,
    Rental,
    Business,
    Other,
}

impl IncomeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeType::Salary => "salary",
            IncomeType::Freelance => "freelance",
            IncomeType::Investments => "investments",
            IncomeType::Rental => "rental",
            IncomeType::Business => "business",
            IncomeType::Other => "other",
        }
    }
}

/// A recurring monthly income stream.
///
/// `amount` is the figure as entered: gross when `is_gross` is set, already
/// net otherwise. `tax_rate` is a percentage in [0, 100] (range validation
/// is the caller's concern) and `other_fees` a flat deduction; both apply
/// only to gross streams.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStream {
    pub id: String,
    pub name: String,
    pub income_type: IncomeType,
    #[serde(deserialize_with = "decimal_serde::deserialize")]
    pub amount: Decimal,
    pub currency: String,
    pub is_gross: bool,
    #[serde(default, deserialize_with = "decimal_serde::deserialize_option")]
    pub tax_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "decimal_serde::deserialize_option")]
    pub other_fees: Option<Decimal>,
    pub is_active: bool,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl IncomeStream {
    /// Take-home amount after tax and fee deductions.
    ///
    /// A stream entered as net passes through untouched, whatever its
    /// `tax_rate`/`other_fees` carry. For gross streams the percentage tax
    /// and flat fees are deducted and the result is floored at zero, so a
    /// misconfigured stream can never contribute negative income.
    pub fn net_amount(&self) -> Decimal {
        if !self.is_gross {
            return self.amount;
        }

        let mut net = self.amount;

        if let Some(tax_rate) = self.tax_rate {
            net -= self.amount * tax_rate / dec!(100);
        }

        if let Some(other_fees) = self.other_fees {
            net -= other_fees;
        }

        net.max(Decimal::ZERO)
    }
}
