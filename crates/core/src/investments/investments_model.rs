use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde;

/// Kind of holding, as carried on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stock,
    Crypto,
    Fund,
    Etf,
    Bond,
    Fii,
    Other,
}

/// A single holding inside a portfolio.
///
/// `current_price` is present-or-absent, not present-or-zero: an asset whose
/// quote has never been fetched carries no price, and everything derived
/// from it stays absent too.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub asset_type: AssetType,
    #[serde(deserialize_with = "decimal_serde::deserialize")]
    pub quantity: Decimal,
    /// Price paid per unit at purchase.
    #[serde(deserialize_with = "decimal_serde::deserialize")]
    pub purchase_price: Decimal,
    pub purchase_date: NaiveDate,
    #[serde(default, deserialize_with = "decimal_serde::deserialize_option")]
    pub current_price: Option<Decimal>,
    pub currency: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A named collection of assets. Ordering carries no meaning.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub assets: Vec<Asset>,
}

/// Derived valuation figures for one asset, in the asset's own currency.
///
/// The value-side fields are `None` when the asset has no current price so
/// display layers render a dash rather than "$0.00"; `gain_loss_percent` is
/// additionally `None` on a zero cost basis.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetrics {
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub total_cost: Decimal,
    #[serde(
        default,
        deserialize_with = "decimal_serde::deserialize_option",
        serialize_with = "decimal_serde::serialize_option_amount"
    )]
    pub current_value: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "decimal_serde::deserialize_option",
        serialize_with = "decimal_serde::serialize_option_amount"
    )]
    pub gain_loss: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "decimal_serde::deserialize_option",
        serialize_with = "decimal_serde::serialize_option_amount"
    )]
    pub gain_loss_percent: Option<Decimal>,
}

/// Portfolio-level roll-up of the per-asset metrics.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub total_cost: Decimal,
    #[serde(
        default,
        deserialize_with = "decimal_serde::deserialize_option",
        serialize_with = "decimal_serde::serialize_option_amount"
    )]
    pub current_value: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "decimal_serde::deserialize_option",
        serialize_with = "decimal_serde::serialize_option_amount"
    )]
    pub gain_loss: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "decimal_serde::deserialize_option",
        serialize_with = "decimal_serde::serialize_option_amount"
    )]
    pub gain_loss_percent: Option<Decimal>,
}

/// One wedge of the holdings allocation, in the reporting currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub asset_type: AssetType,
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub total_value: Decimal,
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_rate"
    )]
    pub percentage: Decimal,
}
