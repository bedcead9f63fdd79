//! # Session Configuration
//!
//! Settings loaded once when the session starts.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CHILLI_*`)
//! 2. Defaults (this file)
//!
//! Read-only after startup, so no lock.

use std::env;

use chilli_core::invoice::DEFAULT_INVOICE_TYPE;
use chilli_core::Money;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Currency symbol for display
    pub currency_symbol: String,

    /// Document type sent with every invoice
    pub invoice_type: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            currency_symbol: "Rs.".to_string(),
            invoice_type: DEFAULT_INVOICE_TYPE.to_string(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from `CHILLI_*` environment variables, falling
    /// back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SessionConfig::default();

        let config = SessionConfig {
            currency_symbol: lookup("CHILLI_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            invoice_type: lookup("CHILLI_INVOICE_TYPE").unwrap_or(defaults.invoice_type),
        };

        if config.currency_symbol.trim().is_empty() {
            return Err(ConfigError::MissingRequired("CHILLI_CURRENCY_SYMBOL".to_string()));
        }
        if config.invoice_type.trim().is_empty() {
            return Err(ConfigError::MissingRequired("CHILLI_INVOICE_TYPE".to_string()));
        }

        Ok(config)
    }

    /// Formats an amount for display, e.g. `Rs. 1,250.00`.
    pub fn format_currency(&self, amount: Money) -> String {
        format!("{} {}", self.currency_symbol, amount)
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
