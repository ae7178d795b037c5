//! Core error types for the Ledgerly metrics crate.
//!
//! Divide-by-zero conditions (empty cost basis, empty last-month total) are
//! deliberately NOT errors; they surface as `Option::None` on the derived
//! fields so the presentation layer can render an absence indicator.

use thiserror::Error;

use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for derived-metric computation.
#[derive(Error, Debug)]
pub enum Error {
    /// A numeric wire field failed to parse. Amounts are never silently
    /// defaulted to zero.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Failed to convert between currencies: {0}")]
    Fx(#[from] FxError),
}
