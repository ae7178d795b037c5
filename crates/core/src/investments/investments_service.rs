use std::collections::HashMap;

use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DECIMAL_PRECISION;
use crate::errors::Result;
use crate::fx::CurrencyConverter;

use super::investments_model::{
    AllocationSlice, Asset, AssetMetrics, AssetType, Portfolio, PortfolioTotals,
};

/// Derived metrics for a single asset, in the asset's own currency.
pub fn asset_metrics(asset: &Asset) -> AssetMetrics {
    let total_cost = asset.quantity * asset.purchase_price;
    let current_value = asset.current_price.map(|price| asset.quantity * price);
    let gain_loss = current_value.map(|value| value - total_cost);
    let gain_loss_percent = match gain_loss {
        Some(gain) if total_cost > Decimal::zero() => {
            Some((gain / total_cost * dec!(100)).round_dp(DECIMAL_PRECISION))
        }
        _ => None,
    };

    AssetMetrics {
        total_cost,
        current_value,
        gain_loss,
        gain_loss_percent,
    }
}

/// Rolls a portfolio's assets up into aggregate cost and value figures.
///
/// Cost sums over every asset; value sums only over assets that carry a
/// current price, so an unpriced asset weighs on cost but contributes no
/// value. When no asset is priced at all, the whole value side is absent.
/// Gain/loss and its percentage are computed from those two sums, with the
/// same zero-cost guard as the per-asset case.
pub fn portfolio_totals(portfolio: &Portfolio) -> PortfolioTotals {
    let mut total_cost = Decimal::ZERO;
    let mut value_sum = Decimal::ZERO;
    let mut has_value = false;

    for asset in &portfolio.assets {
        let metrics = asset_metrics(asset);
        total_cost += metrics.total_cost;
        if let Some(value) = metrics.current_value {
            value_sum += value;
            has_value = true;
        }
    }

    let current_value = has_value.then_some(value_sum);
    let gain_loss = current_value.map(|value| value - total_cost);
    let gain_loss_percent = match gain_loss {
        Some(gain) if total_cost > Decimal::zero() => {
            Some((gain / total_cost * dec!(100)).round_dp(DECIMAL_PRECISION))
        }
        _ => None,
    };

    PortfolioTotals {
        total_cost,
        current_value,
        gain_loss,
        gain_loss_percent,
    }
}

/// Share of combined holdings per asset type, in `target_currency`.
///
/// An unpriced asset is valued at cost here: it still owns a wedge of the
/// allocation even without a quote. Shares are 0 across the board when the
/// combined value is zero.
pub fn portfolio_allocation(
    portfolios: &[Portfolio],
    converter: &CurrencyConverter,
    target_currency: &str,
) -> Result<Vec<AllocationSlice>> {
    let mut by_type: HashMap<AssetType, Decimal> = HashMap::new();

    for asset in portfolios.iter().flat_map(|p| p.assets.iter()) {
        let metrics = asset_metrics(asset);
        let local_value = metrics.current_value.unwrap_or(metrics.total_cost);
        let value = converter.convert(local_value, &asset.currency, target_currency)?;
        *by_type.entry(asset.asset_type).or_insert(Decimal::ZERO) += value;
    }

    let total: Decimal = by_type.values().copied().sum();

    let mut slices: Vec<AllocationSlice> = by_type
        .into_iter()
        .map(|(asset_type, value)| AllocationSlice {
            asset_type,
            total_value: value.round_dp(DECIMAL_PRECISION),
            percentage: if total > Decimal::ZERO {
                (value / total * dec!(100)).round_dp(DECIMAL_PRECISION)
            } else {
                Decimal::ZERO
            },
        })
        .collect();

    slices.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    Ok(slices)
}
