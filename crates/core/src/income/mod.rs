//! Income module - income stream model and aggregation.

mod income_model;
mod income_service;

pub use income_model::{IncomeStream, IncomeType};
pub use income_service::{summarize_incomes, IncomeSummary};
