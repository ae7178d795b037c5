use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::fx::fx_errors::FxError;
use crate::fx::fx_model::ExchangeRateTable;

/// Converts amounts between currencies using a snapshot rate table anchored
/// at a single base currency.
///
/// Rates are "units of X per 1 unit of base": converting X to the base
/// divides by X's rate, leaving the base multiplies by the target's rate,
/// and a pair with neither endpoint at the base triangulates through it.
#[derive(Debug)]
pub struct CurrencyConverter {
    base: String,
    rates: HashMap<String, Decimal>,
}

impl CurrencyConverter {
    /// Builds a converter from a fetched rate table.
    /// Rejects non-positive rates up front; they could never be applied.
    pub fn new(table: &ExchangeRateTable) -> Result<Self, FxError> {
        let mut rates = HashMap::with_capacity(table.rates.len());
        for entry in &table.rates {
            if entry.rate <= Decimal::ZERO {
                return Err(FxError::InvalidRate {
                    currency: entry.currency.clone(),
                    rate: entry.rate,
                });
            }
            rates.insert(entry.currency.clone(), entry.rate);
        }
        Ok(CurrencyConverter {
            base: table.base.clone(),
            rates,
        })
    }

    /// The currency the table's rates are expressed against.
    pub fn base_currency(&self) -> &str {
        &self.base
    }

    /// Rate for a single currency relative to the base.
    /// The base itself is always 1, even when absent from the table.
    fn rate_for(&self, currency: &str) -> Result<Decimal, FxError> {
        if currency == self.base {
            return Ok(Decimal::ONE);
        }
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| FxError::MissingRate(currency.to_string()))
    }

    /// Converts `amount` from one currency to another.
    ///
    /// Same-currency conversion returns the amount unchanged to avoid
    /// needless precision loss. A currency missing from the table is an
    /// error, never a silent pass-through of the raw amount.
    pub fn convert(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Decimal, FxError> {
        if from_currency == to_currency {
            return Ok(amount);
        }

        let in_base = amount / self.rate_for(from_currency)?;
        Ok(in_base * self.rate_for(to_currency)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::fx_model::RateEntry;
    use rust_decimal_macros::dec;

    fn table(base: &str, rates: &[(&str, Decimal)]) -> ExchangeRateTable {
        ExchangeRateTable::new(
            base,
            rates
                .iter()
                .map(|(currency, rate)| RateEntry {
                    currency: currency.to_string(),
                    rate: *rate,
                })
                .collect(),
        )
    }

    #[test]
    fn test_same_currency_is_identity() {
        let converter =
            CurrencyConverter::new(&table("USD", &[("EUR", dec!(0.9))])).unwrap();
        assert_eq!(
            converter.convert(dec!(123.45), "EUR", "EUR").unwrap(),
            dec!(123.45)
        );
        // Identity holds even for a currency the table has never heard of.
        assert_eq!(
            converter.convert(dec!(7), "XYZ", "XYZ").unwrap(),
            dec!(7)
        );
    }

    #[test]
    fn test_convert_to_base_divides() {
        let converter =
            CurrencyConverter::new(&table("USD", &[("EUR", dec!(0.9))])).unwrap();
        // 3000 EUR at 0.9 EUR per USD -> 3333.33 USD
        let converted = converter.convert(dec!(3000), "EUR", "USD").unwrap();
        assert_eq!(converted.round_dp(2), dec!(3333.33));
    }

    #[test]
    fn test_convert_from_base_multiplies() {
        let converter =
            CurrencyConverter::new(&table("USD", &[("EUR", dec!(0.9))])).unwrap();
        assert_eq!(
            converter.convert(dec!(100), "USD", "EUR").unwrap(),
            dec!(90.0)
        );
    }

    #[test]
    fn test_cross_pair_triangulates_through_base() {
        let converter = CurrencyConverter::new(&table(
            "USD",
            &[("EUR", dec!(0.8)), ("GBP", dec!(0.5))],
        ))
        .unwrap();
        // 80 EUR -> 100 USD -> 50 GBP
        assert_eq!(
            converter.convert(dec!(80), "EUR", "GBP").unwrap(),
            dec!(50.0)
        );
    }

    #[test]
    fn test_missing_rate_is_an_error_not_a_fallback() {
        let converter =
            CurrencyConverter::new(&table("USD", &[("EUR", dec!(0.9))])).unwrap();
        let err = converter.convert(dec!(10), "BRL", "USD").unwrap_err();
        assert_eq!(err, FxError::MissingRate("BRL".to_string()));
    }

    #[test]
    fn test_base_absent_from_table_still_maps_to_one() {
        let converter =
            CurrencyConverter::new(&table("USD", &[("JPY", dec!(150))])).unwrap();
        assert_eq!(
            converter.convert(dec!(2), "USD", "JPY").unwrap(),
            dec!(300)
        );
    }

    #[test]
    fn test_non_positive_rate_rejected_at_construction() {
        let err = CurrencyConverter::new(&table("USD", &[("EUR", dec!(0))])).unwrap_err();
        assert_eq!(
            err,
            FxError::InvalidRate {
                currency: "EUR".to_string(),
                rate: dec!(0),
            }
        );
        assert!(CurrencyConverter::new(&table("USD", &[("EUR", dec!(-1))])).is_err());
    }

    #[test]
    fn test_round_trip_recovers_amount() {
        let converter =
            CurrencyConverter::new(&table("USD", &[("EUR", dec!(0.93))])).unwrap();
        let there = converter.convert(dec!(250.00), "EUR", "USD").unwrap();
        let back = converter.convert(there, "USD", "EUR").unwrap();
        assert!((back - dec!(250.00)).abs() < dec!(0.000001));
    }
}
