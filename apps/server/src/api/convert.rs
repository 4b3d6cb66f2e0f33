use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::post, Json, Router};
use fxform_core::fx::ConversionResult;
use fxform_core::session::ConversionRequest;

/// Stateless conversion; does not touch the served session.
async fn convert(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConversionRequest>,
) -> ApiResult<Json<ConversionResult>> {
    let table = state.fx_service.get_rate_table()?;
    let result = request.evaluate(&table)?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/convert", post(convert))
}
