use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde;

/// One quoted rate: units of `currency` per 1 unit of the table's base.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    pub currency: String,
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_rate"
    )]
    pub rate: Decimal,
}

/// Point-in-time snapshot of exchange rates anchored at `base`.
///
/// Fetched fresh per base-currency selection and never mutated in place.
/// The base currency itself implicitly maps to rate 1 and may be absent
/// from the explicit list.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateTable {
    pub base: String,
    pub rates: Vec<RateEntry>,
}

impl ExchangeRateTable {
    pub fn new(base: impl Into<String>, rates: Vec<RateEntry>) -> Self {
        ExchangeRateTable {
            base: base.into(),
            rates,
        }
    }
}
