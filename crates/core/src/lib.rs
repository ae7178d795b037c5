//! Ledgerly Core - derived financial metrics and multi-currency aggregation.
//!
//! This crate contains the computational core of Ledgerly: pure, synchronous
//! functions that derive display figures (net income, portfolio valuation,
//! expense aggregates, the dashboard fold) from entity records already
//! fetched from the Ledgerly GraphQL API. It performs no I/O; every
//! "now"-relative computation takes an explicit `as_of` date.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod expenses;
pub mod fx;
pub mod income;
pub mod investments;
pub mod settings;
pub mod utils;

// Re-export common types from the domain modules
pub use dashboard::*;
pub use expenses::*;
pub use income::*;
pub use investments::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
