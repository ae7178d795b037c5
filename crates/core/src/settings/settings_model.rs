use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// A currency the tracker can report in.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

/// A display language the tracker supports.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

pub const SUPPORTED_CURRENCIES: [Currency; 10] = [
    Currency { code: "USD", name: "US Dollar", symbol: "$" },
    Currency { code: "EUR", name: "Euro", symbol: "€" },
    Currency { code: "GBP", name: "British Pound", symbol: "£" },
    Currency { code: "BRL", name: "Brazilian Real", symbol: "R$" },
    Currency { code: "JPY", name: "Japanese Yen", symbol: "¥" },
    Currency { code: "CNY", name: "Chinese Yuan", symbol: "¥" },
    Currency { code: "CAD", name: "Canadian Dollar", symbol: "$" },
    Currency { code: "AUD", name: "Australian Dollar", symbol: "$" },
    Currency { code: "CHF", name: "Swiss Franc", symbol: "CHF" },
    Currency { code: "INR", name: "Indian Rupee", symbol: "₹" },
];

pub const SUPPORTED_LANGUAGES: [Language; 2] = [
    Language { code: "en", name: "English", native_name: "English" },
    Language { code: "pt-BR", name: "Portuguese (Brazil)", native_name: "Português (Brasil)" },
];

/// Explicit reporting configuration threaded into the aggregation services.
///
/// The web client keeps the main currency and language in ambient context
/// providers; here they are plain values handed to each computation, which is
/// what keeps the derived-metric functions pure and testable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportingPreferences {
    pub main_currency: String,
    pub language: String,
}

impl ReportingPreferences {
    /// Validates both codes against the supported registries.
    pub fn new(main_currency: &str, language: &str) -> Result<Self> {
        if !SUPPORTED_CURRENCIES.iter().any(|c| c.code == main_currency) {
            return Err(Error::Validation(format!(
                "Invalid currency code: {}",
                main_currency
            )));
        }
        if !SUPPORTED_LANGUAGES.iter().any(|l| l.code == language) {
            return Err(Error::Validation(format!(
                "Invalid language code: {}",
                language
            )));
        }
        Ok(ReportingPreferences {
            main_currency: main_currency.to_string(),
            language: language.to_string(),
        })
    }

    /// Display symbol for the main currency.
    pub fn currency_symbol(&self) -> &'static str {
        SUPPORTED_CURRENCIES
            .iter()
            .find(|c| c.code == self.main_currency)
            .map(|c| c.symbol)
            .unwrap_or("$")
    }
}

impl Default for ReportingPreferences {
    fn default() -> Self {
        ReportingPreferences {
            main_currency: "USD".to_string(),
            language: "en".to_string(),
        }
    }
}
