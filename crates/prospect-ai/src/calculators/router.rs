use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::delivery::{FormTransport, WebhookRelay};
use super::domain::{FinancialEstimate, NarrativeContent, ProfileInput};
use super::roi::{RoiProjection, RoiRequest};
use super::service::{CalculatorService, LeadCaptureError};

/// Router builder exposing HTTP endpoints for the calculator widgets.
pub fn calculator_router<F, W>(service: Arc<CalculatorService<F, W>>) -> Router
where
    F: FormTransport + 'static,
    W: WebhookRelay + 'static,
{
    Router::new()
        .route(
            "/api/v1/calculators/business-value",
            post(business_value_handler::<F, W>),
        )
        .route("/api/v1/calculators/roi", post(roi_handler::<F, W>))
        .route("/api/v1/leads", post(capture_lead_handler::<F, W>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct BusinessValueRequest {
    #[serde(flatten)]
    pub(crate) profile: ProfileInput,
    #[serde(default)]
    pub(crate) currency: Option<String>,
    #[serde(default)]
    pub(crate) include_enriched: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct BusinessValueResponse {
    pub(crate) currency: String,
    pub(crate) enriched: bool,
    pub(crate) estimate: FinancialEstimate,
    pub(crate) narrative: NarrativeContent,
}

pub(crate) async fn business_value_handler<F, W>(
    State(service): State<Arc<CalculatorService<F, W>>>,
    axum::Json(payload): axum::Json<BusinessValueRequest>,
) -> axum::Json<BusinessValueResponse>
where
    F: FormTransport + 'static,
    W: WebhookRelay + 'static,
{
    let BusinessValueRequest {
        profile,
        currency,
        include_enriched,
    } = payload;

    let currency = currency.unwrap_or_else(|| "USD".to_string());
    let profile = profile.into_profile();
    let outcome = service.run(&profile);

    let (narrative, enriched) = if include_enriched {
        match service.enrich(&profile, &outcome.estimate, &currency).await {
            Ok(enriched_narrative) => (enriched_narrative, true),
            Err(err) => {
                warn!(error = %err, "narrative enrichment failed; serving synchronous fallback");
                (outcome.narrative, false)
            }
        }
    } else {
        (outcome.narrative, false)
    };

    axum::Json(BusinessValueResponse {
        currency,
        enriched,
        estimate: outcome.estimate,
        narrative,
    })
}

pub(crate) async fn roi_handler<F, W>(
    State(service): State<Arc<CalculatorService<F, W>>>,
    axum::Json(request): axum::Json<RoiRequest>,
) -> axum::Json<RoiProjection>
where
    F: FormTransport + 'static,
    W: WebhookRelay + 'static,
{
    axum::Json(service.project_roi(&request))
}

pub(crate) async fn capture_lead_handler<F, W>(
    State(service): State<Arc<CalculatorService<F, W>>>,
    axum::Json(submission): axum::Json<super::domain::LeadSubmission>,
) -> Response
where
    F: FormTransport + 'static,
    W: WebhookRelay + 'static,
{
    match service.capture_lead(submission) {
        Ok(receipt) => (StatusCode::ACCEPTED, axum::Json(receipt)).into_response(),
        Err(LeadCaptureError::Intake(violation)) => {
            let payload = json!({ "error": violation.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
