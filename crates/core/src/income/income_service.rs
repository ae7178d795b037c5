use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DECIMAL_PRECISION;
use crate::errors::Result;
use crate::fx::CurrencyConverter;
use crate::utils::decimal_serde;

use super::income_model::IncomeStream;

/// Aggregate view of monthly income, normalized to a single currency.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSummary {
    pub currency: String,
    #[serde(
        deserialize_with = "decimal_serde::deserialize",
        serialize_with = "decimal_serde::serialize_amount"
    )]
    pub total_monthly_net: Decimal,
    pub active_count: usize,
    /// Net monthly total per income type, in `currency`.
    pub by_type: HashMap<String, Decimal>,
}

impl IncomeSummary {
    fn new(currency: String) -> Self {
        IncomeSummary {
            currency,
            total_monthly_net: Decimal::ZERO,
            active_count: 0,
            by_type: HashMap::new(),
        }
    }

    fn add_stream(&mut self, stream: &IncomeStream, converted_net: Decimal) {
        *self
            .by_type
            .entry(stream.income_type.as_str().to_string())
            .or_insert(Decimal::ZERO) += converted_net;
        self.total_monthly_net += converted_net;
        self.active_count += 1;
    }
}

/// Folds income streams into a monthly summary in `target_currency`.
///
/// Inactive streams are removed from the fold entirely, not zeroed. A stream
/// whose currency has no rate in the table fails the whole summary; silently
/// skipping it would understate the total.
pub fn summarize_incomes(
    streams: &[IncomeStream],
    converter: &CurrencyConverter,
    target_currency: &str,
) -> Result<IncomeSummary> {
    debug!(
        "Summarizing {} income streams in {}",
        streams.len(),
        target_currency
    );

    let mut summary = IncomeSummary::new(target_currency.to_string());

    for stream in streams.iter().filter(|s| s.is_active) {
        let net = stream.net_amount();
        let converted = converter.convert(net, &stream.currency, target_currency)?;
        summary.add_stream(stream, converted.round_dp(DECIMAL_PRECISION));
    }

    Ok(summary)
}
