//! Router-level specifications exercising the calculator endpoints end to end
//! through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use prospect_ai::calculators::calculator_router;
use prospect_ai::calculators::currency::StaticRateTable;
use prospect_ai::calculators::delivery::{
    DeliveryError, FormSubmission, FormTransport, WebhookEvent, WebhookRelay,
};
use prospect_ai::calculators::estimator::EstimatorConfig;
use prospect_ai::calculators::CalculatorService;
use serde_json::{json, Value};
use tower::ServiceExt;

struct NullFormTransport;

impl FormTransport for NullFormTransport {
    fn forward(&self, _submission: FormSubmission) -> Result<(), DeliveryError> {
        Ok(())
    }
}

struct NullWebhookRelay;

impl WebhookRelay for NullWebhookRelay {
    fn publish(&self, _event: WebhookEvent) -> Result<(), DeliveryError> {
        Ok(())
    }
}

fn app() -> axum::Router {
    let service = Arc::new(CalculatorService::new(
        Arc::new(StaticRateTable::default()),
        Arc::new(NullFormTransport),
        Arc::new(NullWebhookRelay),
        EstimatorConfig::default(),
    ));
    calculator_router(service)
}

async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds");

    let response = app.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let value = serde_json::from_slice(&bytes).expect("body is JSON");
    (status, value)
}

#[tokio::test]
async fn business_value_endpoint_returns_estimate_and_narrative() {
    let (status, body) = post_json(
        app(),
        "/api/v1/calculators/business-value",
        json!({
            "company_name": "Cedar Analytics",
            "industry": "technology",
            "revenue_bracket": "growing",
            "growth_goal": "grow-fast",
            "main_problems": ["manual-reporting", "data-silos", "no-forecasting"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["enriched"], false);

    let monthly_waste = body["estimate"]["monthly_waste"].as_f64().expect("number");
    assert!(monthly_waste > 0.0);
    assert!(monthly_waste <= (1_500_000.0 / 12.0) * 0.08);
    assert!(body["narrative"]["executive_summary"]
        .as_str()
        .expect("summary string")
        .contains("Cedar Analytics"));
}

#[tokio::test]
async fn business_value_endpoint_can_enrich_into_another_currency() {
    let (status, body) = post_json(
        app(),
        "/api/v1/calculators/business-value",
        json!({
            "company_name": "Cedar Analytics",
            "industry": "technology",
            "revenue_bracket": "growing",
            "currency": "EUR",
            "include_enriched": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["enriched"], true);
    assert!(body["narrative"]["competitive_insight"]
        .as_str()
        .expect("insight string")
        .contains("euro"));
}

#[tokio::test]
async fn enrichment_failure_degrades_to_the_synchronous_narrative() {
    let (status, body) = post_json(
        app(),
        "/api/v1/calculators/business-value",
        json!({
            "company_name": "Cedar Analytics",
            "currency": "XTS",
            "include_enriched": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["enriched"], false);
    assert!(body["narrative"]["executive_summary"].is_string());
}

#[tokio::test]
async fn roi_endpoint_honors_the_floor() {
    let (status, body) = post_json(
        app(),
        "/api/v1/calculators/roi",
        json!({
            "industry": "hospitality",
            "cost_reduction_pct": 0.0,
            "efficiency_gain_pct": 0.0,
            "complexity_seed": 17
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["roi_pct"].as_f64().expect("roi number") >= 120.0);
}

#[tokio::test]
async fn lead_endpoint_accepts_valid_submissions() {
    let (status, body) = post_json(
        app(),
        "/api/v1/leads",
        json!({
            "contact": {
                "first_name": "Dana",
                "email": "dana@prairiegoods.example",
                "country": "united-states"
            },
            "company_name": "Prairie Goods",
            "industry": "retail",
            "revenue_bracket": "steady"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["delivery"], "sent");
    assert!(body["lead_id"].as_str().expect("lead id").starts_with("lead-"));
}

#[tokio::test]
async fn lead_endpoint_rejects_intake_violations() {
    let (status, body) = post_json(
        app(),
        "/api/v1/leads",
        json!({
            "contact": {
                "first_name": "Dana",
                "email": "not-an-email"
            },
            "company_name": "Prairie Goods"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .expect("error string")
        .contains("e-mail"));
}
