//! Dashboard module - the one-pass fold behind the home screen.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::DashboardSummary;
pub use dashboard_service::DashboardService;
