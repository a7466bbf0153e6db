use crate::core::{Error, Result};
use serde::Deserialize;
use std::env;

/// Gateway account and environment configuration.
///
/// Injected once at facade construction and read-only afterwards; the
/// lifecycle is owned by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Merchant store identifier assigned by the gateway
    pub store_id: String,
    /// Merchant customer identifier, sent as `CustomerId` on every request
    pub customer_id: String,
    /// Shared secret used for response checksum verification
    pub secret_key: String,
    /// Selects the production endpoint when true, the sandbox otherwise
    pub live_mode: bool,
    /// Default `Return_url` applied when a payment method does not set one
    pub return_url: Option<String>,
    /// Default `Callback_Url` applied when a payment method does not set one
    pub callback_url: Option<String>,
    /// Full endpoint URL override for sandboxes and tests; when unset the
    /// live/test constant is used
    pub base_url: Option<String>,
}

impl Config {
    pub fn new(
        store_id: impl Into<String>,
        customer_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            store_id: store_id.into(),
            customer_id: customer_id.into(),
            secret_key: secret_key.into(),
            live_mode: false,
            return_url: None,
            callback_url: None,
            base_url: None,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            store_id: env::var("GOMYPAY_STORE_ID")
                .map_err(|_| Error::configuration("GOMYPAY_STORE_ID not set"))?,
            customer_id: env::var("GOMYPAY_CUSTOMER_ID")
                .map_err(|_| Error::configuration("GOMYPAY_CUSTOMER_ID not set"))?,
            secret_key: env::var("GOMYPAY_SECRET_KEY")
                .map_err(|_| Error::configuration("GOMYPAY_SECRET_KEY not set"))?,
            live_mode: env::var("GOMYPAY_LIVE_MODE")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            return_url: env::var("GOMYPAY_RETURN_URL").ok(),
            callback_url: env::var("GOMYPAY_CALLBACK_URL").ok(),
            base_url: env::var("GOMYPAY_BASE_URL").ok(),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.store_id.is_empty() {
            return Err(Error::configuration("Store id must not be empty"));
        }

        if self.secret_key.is_empty() {
            return Err(Error::configuration("Secret key must not be empty"));
        }

        Ok(())
    }

    pub fn is_live_mode(&self) -> bool {
        self.live_mode
    }
}
