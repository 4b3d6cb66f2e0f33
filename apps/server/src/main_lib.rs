use std::sync::{Arc, RwLock};

use crate::config::Config;
use fxform_core::fx::{FxService, FxServiceTrait};
use fxform_core::session::ConverterSession;
use fxform_rates::{ExchangeRateApiProvider, ExchangeRateProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub fx_service: Arc<dyn FxServiceTrait>,
    /// The single converter form served by this process
    pub session: RwLock<ConverterSession>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FX_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds state backed by the configured HTTP rates provider.
pub fn build_state(config: &Config) -> Arc<AppState> {
    let provider =
        ExchangeRateApiProvider::new(config.rates_api_url.clone(), config.request_timeout);
    build_state_with_provider(config, Arc::new(provider))
}

pub fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn ExchangeRateProvider>,
) -> Arc<AppState> {
    tracing::info!(
        "Using rates provider {} with base {}",
        provider.id(),
        config.base_currency
    );
    let fx_service = FxService::new(provider, &config.base_currency);
    Arc::new(AppState {
        fx_service: Arc::new(fx_service),
        session: RwLock::new(ConverterSession::default()),
    })
}

/// Fetches the rate table in the background. No retry: on failure the
/// table stays absent and conversions answer with "rates unavailable".
pub fn spawn_rate_fetch(state: Arc<AppState>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = state.fx_service.initialize().await {
            tracing::error!("Failed to fetch exchange rates: {}", e);
        }
    })
}
