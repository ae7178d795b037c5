//! Settings module - reporting preferences and supported-code registries.

mod settings_model;

pub use settings_model::{
    Currency, Language, ReportingPreferences, SUPPORTED_CURRENCIES, SUPPORTED_LANGUAGES,
};
