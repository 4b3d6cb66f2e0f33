use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use fxform_rates::{ExchangeRateProvider, LatestRates, RatesError};
use fxform_server::{api::app_router, build_state_with_provider, config::Config, AppState};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

struct StaticProvider {
    online: bool,
}

#[async_trait]
impl ExchangeRateProvider for StaticProvider {
    fn id(&self) -> &'static str {
        "STATIC"
    }

    async fn fetch_latest(&self, base: &str) -> Result<LatestRates, RatesError> {
        if !self.online {
            return Err(RatesError::ProviderError {
                provider: "STATIC".to_string(),
                message: "offline".to_string(),
            });
        }
        let mut rates = BTreeMap::new();
        rates.insert("USD".to_string(), dec!(1));
        rates.insert("INR".to_string(), dec!(83));
        rates.insert("EUR".to_string(), dec!(0.92));
        Ok(LatestRates::new(base, rates, "STATIC"))
    }
}

async fn build_test_router(online: bool) -> (Router, Arc<AppState>) {
    let config = Config::from_env().unwrap();
    let state = build_state_with_provider(&config, Arc::new(StaticProvider { online }));
    let _ = state.fx_service.initialize().await;
    (app_router(state.clone(), &config), state)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn healthz_is_ok() {
    let (app, _) = build_test_router(true).await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn lists_and_searches_currencies() {
    let (app, _) = build_test_router(true).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/currencies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["base"], "USD");
    assert_eq!(body["ratesLoaded"], true);
    assert_eq!(body["currencies"], json!(["EUR", "INR", "USD"]));

    let (_, body) = send(&app, Method::GET, "/api/v1/currencies?q=in", None).await;
    assert_eq!(body["currencies"], json!(["INR"]));
}

#[tokio::test]
async fn stateless_convert() {
    let (app, _) = build_test_router(true).await;

    let request = json!({ "amount": "100", "fromCurrency": "USD", "toCurrency": "INR" });
    let (status, body) = send(&app, Method::POST, "/api/v1/convert", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["convertedAmount"], "8300.00");
    assert_eq!(body["amount"], "100.00");
}

#[tokio::test]
async fn convert_rejects_bad_grouping_with_field_errors() {
    let (app, _) = build_test_router(true).await;

    let request = json!({ "amount": "12,3,45", "fromCurrency": "USD" });
    let (status, body) = send(&app, Method::POST, "/api/v1/convert", Some(request)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["fields"]["amount"],
        "Invalid USD format or comma placement. The comma should be every after 3 digits."
    );
    assert_eq!(body["fields"]["toCurrency"], "Please select a currency.");
}

#[tokio::test]
async fn session_flow_with_swap() {
    let (app, _) = build_test_router(true).await;

    let (_, view) = send(&app, Method::GET, "/api/v1/session", None).await;
    assert_eq!(view["fromCurrency"], "USD");
    assert_eq!(view["toCurrency"], "INR");

    let update = json!({ "amount": "2 lakh", "fromCurrency": "INR", "toCurrency": "USD" });
    let (status, view) = send(&app, Method::PUT, "/api/v1/session", Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(view["amountError"].is_null());
    assert_eq!(view["amountPlaceholder"], "Enter the amount in INR");

    let (status, result) = send(&app, Method::POST, "/api/v1/session/convert", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["amount"], "200000.00");
    assert_eq!(result["convertedAmount"], "2409.64");

    // "2 lakh" is not a valid USD amount once the pair is swapped.
    let (status, view) = send(&app, Method::POST, "/api/v1/session/swap", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["fromCurrency"], "USD");
    assert_eq!(view["toCurrency"], "INR");
    assert!(view["amountError"].is_string());
    assert_eq!(view["result"]["convertedAmount"], "2409.64");

    let (_, view) = send(&app, Method::POST, "/api/v1/session/swap", None).await;
    assert_eq!(view["fromCurrency"], "INR");
    assert!(view["amountError"].is_null());
}

#[tokio::test]
async fn failed_fetch_reports_rates_unavailable() {
    let (app, state) = build_test_router(false).await;
    assert!(!state.fx_service.is_loaded());

    let (_, body) = send(&app, Method::GET, "/api/v1/currencies", None).await;
    assert_eq!(body["ratesLoaded"], false);
    assert_eq!(body["currencies"], json!([]));

    let request = json!({ "amount": "1", "fromCurrency": "USD", "toCurrency": "INR" });
    let (status, body) = send(&app, Method::POST, "/api/v1/convert", Some(request)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], 503);

    let (status, _) = send(&app, Method::GET, "/api/v1/rates", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
