use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use fxform_core::fx::ExchangeRateTable;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct CurrencyQuery {
    q: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CurrenciesResponse {
    base: String,
    currencies: Vec<String>,
    rates_loaded: bool,
}

/// Currency codes for the selectors, optionally filtered by `?q=`.
async fn list_currencies(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CurrencyQuery>,
) -> Json<CurrenciesResponse> {
    Json(CurrenciesResponse {
        base: state.fx_service.base_currency().to_string(),
        currencies: state.fx_service.list_currencies(query.q.as_deref()),
        rates_loaded: state.fx_service.is_loaded(),
    })
}

async fn get_rates(State(state): State<Arc<AppState>>) -> ApiResult<Json<ExchangeRateTable>> {
    let table = state.fx_service.get_rate_table()?;
    Ok(Json(table.as_ref().clone()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/currencies", get(list_currencies))
        .route("/rates", get(get_rates))
}
