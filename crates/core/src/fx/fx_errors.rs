use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building or using an exchange-rate snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    /// The rate table carries no entry for a currency a conversion needs.
    /// Conversions fail loudly instead of passing the raw amount through;
    /// a silently unconverted amount would understate every aggregate built
    /// on top of it.
    #[error("No exchange rate available for currency '{0}'")]
    MissingRate(String),

    /// A fetched rate is zero or negative and can never be applied.
    #[error("Invalid exchange rate for currency '{currency}': {rate}")]
    InvalidRate { currency: String, rate: Decimal },
}
