use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::currency::{format_amount, RateError, RateProvider};
use super::delivery::{
    DeliveryError, DeliveryStatus, FormSubmission, FormTransport, WebhookEvent, WebhookRelay,
};
use super::domain::{BusinessProfile, FinancialEstimate, NarrativeContent};
use super::estimator::{EstimationEngine, EstimatorConfig};
use super::intake::{IntakeGuard, IntakePolicy, IntakeViolation};
use super::narrative;
use super::roi::{self, RoiProjection, RoiRequest};
use super::coefficients;

/// Identifier wrapper for captured leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_lead_id() -> LeadId {
    let id = LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LeadId(format!("lead-{id:06}"))
}

/// One calculator run: the numbers plus the narrative built from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorOutcome {
    pub estimate: FinancialEstimate,
    pub narrative: NarrativeContent,
}

/// Result of capturing a lead. Delivery failure is carried here, not raised:
/// the estimate stays valid and displayed regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub lead_id: LeadId,
    pub delivery: DeliveryStatus,
    pub outcome: CalculatorOutcome,
}

/// Error raised by lead capture. Only intake can reject a submission.
#[derive(Debug, thiserror::Error)]
pub enum LeadCaptureError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
}

/// Error raised by the optional enrichment stage; callers swallow it and keep
/// the synchronous narrative.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error(transparent)]
    Rate(#[from] RateError),
}

/// Service composing the intake guard, estimation engine, narrative builder,
/// rate provider, and outbound gateways. Explicitly constructed and injected;
/// holds no global state beyond the lead id sequence.
pub struct CalculatorService<F, W> {
    guard: IntakeGuard,
    engine: EstimationEngine,
    rates: Arc<dyn RateProvider>,
    transport: Arc<F>,
    relay: Arc<W>,
}

impl<F, W> CalculatorService<F, W>
where
    F: FormTransport + 'static,
    W: WebhookRelay + 'static,
{
    pub fn new(
        rates: Arc<dyn RateProvider>,
        transport: Arc<F>,
        relay: Arc<W>,
        config: EstimatorConfig,
    ) -> Self {
        Self {
            guard: IntakeGuard::default(),
            engine: EstimationEngine::new(config),
            rates,
            transport,
            relay,
        }
    }

    pub fn with_intake_policy(mut self, policy: IntakePolicy) -> Self {
        self.guard = IntakeGuard::with_policy(policy);
        self
    }

    /// Synchronous calculator run: estimate plus narrative, amounts in USD.
    pub fn run(&self, profile: &BusinessProfile) -> CalculatorOutcome {
        let estimate = self.engine.estimate(profile);
        let narrative = narrative::build_narrative(profile, &estimate);
        CalculatorOutcome {
            estimate,
            narrative,
        }
    }

    /// Deterministic ROI projection for the companion widget.
    pub fn project_roi(&self, request: &RoiRequest) -> RoiProjection {
        roi::project_roi(request)
    }

    /// Optional second stage: re-render the narrative with amounts converted
    /// into `display_currency`. Stale rates do not block; conversion uses the
    /// last-known table and a refresh is left to the background.
    pub async fn enrich(
        &self,
        profile: &BusinessProfile,
        estimate: &FinancialEstimate,
        display_currency: &str,
    ) -> Result<NarrativeContent, EnrichmentError> {
        if self.rates.is_stale() {
            debug!(currency = display_currency, "exchange rates stale; converting with last-known table");
        }

        let factor = self.rates.convert(1.0, "USD", display_currency)?;
        let symbol = coefficients::currency(display_currency).symbol;

        Ok(narrative::build_enriched(
            profile,
            estimate,
            display_currency,
            &|amount| format_amount(amount * factor, symbol),
        ))
    }

    /// Validate a submission, compute its outcome, and hand the lead to the
    /// external collaborators. Form-transport failure downgrades the receipt;
    /// webhook failure is logged and swallowed.
    pub fn capture_lead(
        &self,
        submission: super::domain::LeadSubmission,
    ) -> Result<LeadReceipt, LeadCaptureError> {
        let form = FormSubmission::from_lead(&submission, Utc::now());
        let lead = self.guard.lead_from_submission(submission)?;
        let lead_id = next_lead_id();

        let outcome = self.run(&lead.profile);

        let delivery = match self.transport.forward(form.clone()) {
            Ok(()) => DeliveryStatus::Sent,
            Err(err) => {
                warn!(lead = %lead_id.0, error = %err, "form transport failed; estimate remains valid");
                DeliveryStatus::Failed
            }
        };

        let event = WebhookEvent::lead_captured(&lead.contact, form.fields);
        if let Err(err) = self.relay.publish(event) {
            match err {
                DeliveryError::EndpointMissing => {
                    debug!(lead = %lead_id.0, "webhook relay disabled; skipping")
                }
                other => warn!(lead = %lead_id.0, error = %other, "webhook relay failed; ignoring"),
            }
        }

        Ok(LeadReceipt {
            lead_id,
            delivery,
            outcome,
        })
    }
}
