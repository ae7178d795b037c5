use chrono::{Datelike, NaiveDate};
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{
    DECIMAL_PRECISION, EXPENSE_TREND_MONTHS, RECENT_EXPENSES_LIMIT, TOP_CATEGORIES_LIMIT,
};
use crate::errors::Result;
use crate::expenses::{monthly_trend, recent, top_categories, total_for_month, Expense};
use crate::fx::{CurrencyConverter, ExchangeRateTable};
use crate::income::{summarize_incomes, IncomeStream};
use crate::investments::{asset_metrics, portfolio_allocation, Portfolio};
use crate::settings::ReportingPreferences;
use crate::utils::time_utils::previous_month;

use super::dashboard_model::DashboardSummary;

/// Derives the dashboard summary from already-loaded entities.
///
/// A stateless fold: nothing is cached between calls and identical inputs
/// produce identical outputs. The reference date is the explicit `as_of`
/// parameter, never the system clock.
pub struct DashboardService {
    preferences: ReportingPreferences,
}

impl DashboardService {
    pub fn new(preferences: ReportingPreferences) -> Self {
        DashboardService { preferences }
    }

    /// Folds expenses, income streams, and portfolios into the summary for
    /// `as_of`'s calendar month, normalized to the main currency.
    pub fn summarize(
        &self,
        expenses: &[Expense],
        incomes: &[IncomeStream],
        portfolios: &[Portfolio],
        rates: &ExchangeRateTable,
        as_of: NaiveDate,
    ) -> Result<DashboardSummary> {
        let main_currency = self.preferences.main_currency.as_str();
        debug!(
            "Building dashboard summary as of {} in {}",
            as_of, main_currency
        );

        let converter = CurrencyConverter::new(rates)?;

        let (year, month) = (as_of.year(), as_of.month());
        let (prev_year, prev_month) = previous_month(year, month);
        let total_expenses_this_month = total_for_month(expenses, year, month);
        let total_expenses_last_month = total_for_month(expenses, prev_year, prev_month);

        // No baseline month means no badge, not a 0% or 100% sentinel.
        let expense_change_percent = if total_expenses_last_month > Decimal::zero() {
            Some(
                ((total_expenses_this_month - total_expenses_last_month)
                    / total_expenses_last_month
                    * dec!(100))
                .round_dp(DECIMAL_PRECISION),
            )
        } else {
            None
        };

        // Portfolio cost counts every asset; value counts only priced ones.
        let mut total_portfolio_value = Decimal::ZERO;
        let mut total_portfolio_cost = Decimal::ZERO;
        for asset in portfolios.iter().flat_map(|p| p.assets.iter()) {
            let metrics = asset_metrics(asset);
            total_portfolio_cost +=
                converter.convert(metrics.total_cost, &asset.currency, main_currency)?;
            if let Some(value) = metrics.current_value {
                total_portfolio_value +=
                    converter.convert(value, &asset.currency, main_currency)?;
            }
        }
        total_portfolio_value = total_portfolio_value.round_dp(DECIMAL_PRECISION);
        total_portfolio_cost = total_portfolio_cost.round_dp(DECIMAL_PRECISION);

        // Liabilities are not modeled; net worth is the holdings' value.
        let net_worth = total_portfolio_value;

        let income = summarize_incomes(incomes, &converter, main_currency)?;

        Ok(DashboardSummary {
            currency: main_currency.to_string(),
            total_expenses_this_month,
            total_expenses_last_month,
            expense_change_percent,
            total_portfolio_value,
            total_portfolio_cost,
            net_worth,
            total_monthly_income: income.total_monthly_net,
            income_streams_count: income.active_count,
            top_categories: top_categories(expenses, as_of, TOP_CATEGORIES_LIMIT),
            recent_expenses: recent(expenses, RECENT_EXPENSES_LIMIT),
            portfolio_allocation: portfolio_allocation(portfolios, &converter, main_currency)?,
            monthly_expense_trend: monthly_trend(expenses, as_of, EXPENSE_TREND_MONTHS),
        })
    }
}
