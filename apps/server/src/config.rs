use anyhow::Context;
use std::{net::SocketAddr, time::Duration};

use fxform_core::constants::BASE_CURRENCY;
use fxform_rates::provider::exchange_rate_api::DEFAULT_ENDPOINT;

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Rates endpoint; the base currency is appended as the last path segment
    pub rates_api_url: String,
    pub base_currency: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("FX_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid FX_LISTEN_ADDR")?;
        let rates_api_url =
            std::env::var("FX_RATES_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.into());
        let base_currency = std::env::var("FX_BASE_CURRENCY")
            .unwrap_or_else(|_| BASE_CURRENCY.into())
            .trim()
            .to_uppercase();
        let cors_allow = std::env::var("FX_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("FX_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Ok(Self {
            listen_addr,
            rates_api_url,
            base_currency,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
