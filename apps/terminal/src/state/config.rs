//! # Storefront Configuration
//!
//! Store name, tagline and currency display, resolved once at startup.
//!
//! ```text
//! PARADISE_STORE_NAME ─────┐
//! PARADISE_TAGLINE ────────┼──► from_env() ──► ConfigState (read-only)
//! PARADISE_CURRENCY_SYMBOL ┘        ▲
//!                         Default ──┘ for anything unset or blank
//! ```

use serde::{Deserialize, Serialize};

use paradise_core::Money;

const ENV_STORE_NAME: &str = "PARADISE_STORE_NAME";
const ENV_TAGLINE: &str = "PARADISE_TAGLINE";
const ENV_CURRENCY_SYMBOL: &str = "PARADISE_CURRENCY_SYMBOL";

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown on every page header
    pub store_name: String,

    /// Line shown under the store name
    pub tagline: String,

    /// ISO 4217, informational only
    pub currency_code: String,

    /// Prefix for every rendered price
    pub currency_symbol: String,

    /// Digits after the decimal point; prices are stored in this many
    /// minor units
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Paradise Nursery".to_string(),
            tagline: "Bringing the beauty of nature to your home.".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl ConfigState {
    /// Defaults overridden by the `PARADISE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    ///
    /// Blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(store_name) = var(ENV_STORE_NAME) {
            config.store_name = store_name;
        }

        if let Some(tagline) = var(ENV_TAGLINE) {
            config.tagline = tagline;
        }

        if let Some(symbol) = var(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Renders a cent amount with the configured symbol and decimals.
    ///
    /// ```rust,ignore
    /// assert_eq!(ConfigState::default().format_currency(5998), "$59.98");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let amount = cents.unsigned_abs();
        let places = usize::from(self.currency_decimals);

        if places == 0 {
            return format!("{}{}{}", sign, self.currency_symbol, amount);
        }

        let scale = 10_u64.pow(u32::from(self.currency_decimals));
        format!(
            "{}{}{}.{:0places$}",
            sign,
            self.currency_symbol,
            amount / scale,
            amount % scale,
            places = places
        )
    }

    pub fn format_money(&self, money: Money) -> String {
        self.format_currency(money.cents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency() {
        let usd = ConfigState::default();
        assert_eq!(usd.format_currency(5998), "$59.98");
        assert_eq!(usd.format_currency(7), "$0.07");
        assert_eq!(usd.format_currency(0), "$0.00");
        assert_eq!(usd.format_currency(-1250), "-$12.50");
    }

    #[test]
    fn test_format_currency_without_decimals() {
        let yen = ConfigState {
            currency_code: "JPY".to_string(),
            currency_symbol: "¥".to_string(),
            currency_decimals: 0,
            ..ConfigState::default()
        };
        assert_eq!(yen.format_currency(2999), "¥2999");
    }

    #[test]
    fn test_format_money() {
        let config = ConfigState::default();
        assert_eq!(config.format_money(Money::from_cents(7495)), "$74.95");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PARADISE_STORE_NAME", "Fern Gully"),
            ("PARADISE_CURRENCY_SYMBOL", "€"),
            ("PARADISE_TAGLINE", "   "),
        ]);
        let config = ConfigState::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.store_name, "Fern Gully");
        assert_eq!(config.currency_symbol, "€");
        // Blank values keep the default
        assert_eq!(config.tagline, ConfigState::default().tagline);
        assert_eq!(config.format_currency(2499), "€24.99");
    }

    #[test]
    fn test_from_lookup_without_vars_is_default() {
        let config = ConfigState::from_lookup(|_| None);
        assert_eq!(config, ConfigState::default());
    }
}
