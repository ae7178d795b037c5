//! Expenses module - expense/category models and calendar-month aggregation.

mod expenses_model;
mod expenses_service;

pub use expenses_model::{Category, CategorySummary, Expense, ExpenseSummary, MonthlyExpense};
pub use expenses_service::{
    monthly_summary, monthly_trend, recent, top_categories, total_for_month,
};
