use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DECIMAL_PRECISION;
use crate::utils::time_utils::{in_month, month_key, previous_month};

use super::expenses_model::{CategorySummary, Expense, ExpenseSummary, MonthlyExpense};

/// Sum of expense amounts inside one calendar month.
pub fn total_for_month(expenses: &[Expense], year: i32, month: u32) -> Decimal {
    expenses
        .iter()
        .filter(|e| in_month(e.date, year, month))
        .map(|e| e.amount)
        .sum()
}

/// Paid/unpaid partition of the `as_of` month.
pub fn monthly_summary(expenses: &[Expense], as_of: NaiveDate) -> ExpenseSummary {
    let (year, month) = (as_of.year(), as_of.month());
    let mut summary = ExpenseSummary::default();

    for expense in expenses.iter().filter(|e| in_month(e.date, year, month)) {
        summary.total_amount += expense.amount;
        summary.total_count += 1;
        if expense.is_paid {
            summary.paid_amount += expense.amount;
            summary.paid_count += 1;
        } else {
            summary.unpaid_amount += expense.amount;
            summary.unpaid_count += 1;
        }
    }

    summary
}

/// Top spending categories of the `as_of` month, largest first.
///
/// Shares are of the month's total spend. A zero month total yields 0%
/// slices; the share is guarded, never divided.
pub fn top_categories(
    expenses: &[Expense],
    as_of: NaiveDate,
    limit: usize,
) -> Vec<CategorySummary> {
    let (year, month) = (as_of.year(), as_of.month());

    let mut by_category: HashMap<String, CategorySummary> = HashMap::new();
    for expense in expenses.iter().filter(|e| in_month(e.date, year, month)) {
        by_category
            .entry(expense.category.id.clone())
            .and_modify(|entry| {
                entry.total_amount += expense.amount;
                entry.transaction_count += 1;
            })
            .or_insert_with(|| CategorySummary {
                category: expense.category.clone(),
                total_amount: expense.amount,
                percentage: Decimal::ZERO,
                transaction_count: 1,
            });
    }

    let month_total: Decimal = by_category.values().map(|c| c.total_amount).sum();

    let mut summaries: Vec<CategorySummary> = by_category.into_values().collect();
    if month_total > Decimal::ZERO {
        for summary in &mut summaries {
            summary.percentage =
                (summary.total_amount / month_total * dec!(100)).round_dp(DECIMAL_PRECISION);
        }
    }

    summaries.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
    summaries.truncate(limit);
    summaries
}

/// Month totals for the trailing `months_back` calendar months ending at
/// `as_of`'s month, oldest first.
pub fn monthly_trend(expenses: &[Expense], as_of: NaiveDate, months_back: u32) -> Vec<MonthlyExpense> {
    let (mut year, mut month) = (as_of.year(), as_of.month());
    let mut trend = Vec::with_capacity(months_back as usize);

    for _ in 0..months_back {
        trend.push(MonthlyExpense {
            month: month_key(year, month),
            total_amount: total_for_month(expenses, year, month),
        });
        let (prev_year, prev_month) = previous_month(year, month);
        year = prev_year;
        month = prev_month;
    }

    trend.reverse();
    trend
}

/// The most recent expenses, newest first.
pub fn recent(expenses: &[Expense], limit: usize) -> Vec<Expense> {
    let mut sorted: Vec<Expense> = expenses.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}
