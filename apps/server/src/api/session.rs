use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fxform_core::fx::ConversionResult;
use fxform_core::session::{SessionUpdate, SessionView};

async fn get_session(State(state): State<Arc<AppState>>) -> ApiResult<Json<SessionView>> {
    let session = state.session.read()?;
    Ok(Json(session.view()))
}

/// Applies a partial update. Amount validation errors are reported in the
/// view, not as a failed request.
async fn update_session(
    State(state): State<Arc<AppState>>,
    Json(update): Json<SessionUpdate>,
) -> ApiResult<Json<SessionView>> {
    let mut session = state.session.write()?;
    if let Err(e) = session.apply(update) {
        tracing::debug!("Amount invalid after update: {}", e);
    }
    Ok(Json(session.view()))
}

/// Swaps the selectors. Amount validation errors are reported in the view,
/// not as a failed request.
async fn swap_currencies(State(state): State<Arc<AppState>>) -> ApiResult<Json<SessionView>> {
    let mut session = state.session.write()?;
    if let Err(e) = session.swap() {
        tracing::debug!("Amount invalid after swap: {}", e);
    }
    Ok(Json(session.view()))
}

async fn submit_session(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ConversionResult>> {
    let table = state.fx_service.get_rate_table()?;
    let mut session = state.session.write()?;
    let result = session.submit(&table)?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/session", get(get_session).put(update_session))
        .route("/session/swap", post(swap_currencies))
        .route("/session/convert", post(submit_session))
}
