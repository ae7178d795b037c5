//! Investments module - asset/portfolio models and derived valuation metrics.

mod investments_model;
mod investments_service;
mod investments_service_tests;

pub use investments_model::{
    AllocationSlice, Asset, AssetMetrics, AssetType, Portfolio, PortfolioTotals,
};
pub use investments_service::{asset_metrics, portfolio_allocation, portfolio_totals};
