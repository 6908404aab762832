use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ContactDetails, LeadSubmission};

/// Flat named-field payload accepted by the external form processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub fields: BTreeMap<String, String>,
    pub submitted_at: DateTime<Utc>,
}

impl FormSubmission {
    /// Flatten a lead submission the way the form processor expects it.
    pub fn from_lead(submission: &LeadSubmission, submitted_at: DateTime<Utc>) -> Self {
        let mut fields = BTreeMap::new();
        let contact = &submission.contact;
        let profile = &submission.profile;

        fields.insert("firstName".to_string(), contact.first_name.clone());
        fields.insert("email".to_string(), contact.email.clone());
        if let Some(phone) = &contact.phone {
            fields.insert("phone".to_string(), phone.clone());
        }
        fields.insert("country".to_string(), contact.country.clone());
        fields.insert("language".to_string(), contact.language.clone());
        fields.insert("companyName".to_string(), profile.company_name.clone());
        fields.insert("industry".to_string(), profile.industry.clone());
        fields.insert("location".to_string(), profile.location.clone());
        fields.insert("revenueBracket".to_string(), profile.revenue_bracket.clone());
        fields.insert("businessModel".to_string(), profile.business_model.clone());
        fields.insert("growthStage".to_string(), profile.growth_stage.clone());
        fields.insert("growthGoal".to_string(), profile.growth_goal.clone());
        fields.insert(
            "mainProblems".to_string(),
            profile
                .main_problems
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
        );
        fields.insert(
            "urgentNeeds".to_string(),
            profile
                .urgent_needs
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
        );
        fields.insert("decisionSpeed".to_string(), profile.decision_speed.clone());
        fields.insert("dataMaturity".to_string(), profile.data_maturity.clone());

        Self {
            fields,
            submitted_at,
        }
    }
}

/// Typed payload for the webhook receiver, serialized with the receiver's
/// field names (`type`, `firstName`, `formData`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub email: String,
    pub first_name: String,
    pub language: String,
    pub form_data: BTreeMap<String, String>,
}

impl WebhookEvent {
    pub fn lead_captured(contact: &ContactDetails, form_data: BTreeMap<String, String>) -> Self {
        Self {
            event_type: "lead_captured".to_string(),
            email: contact.email.clone(),
            first_name: contact.first_name.clone(),
            language: contact.language.clone(),
            form_data,
        }
    }
}

/// Delivery failure raised by either gateway.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("no endpoint configured for this gateway")]
    EndpointMissing,
    #[error("delivery transport unavailable: {0}")]
    Transport(String),
}

/// Whether the external form processor accepted the submission.
///
/// Failure is user-visible as a generic notice only; the computed estimate
/// stays valid either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

/// Outbound gateway to the external form processor (fire and forget).
pub trait FormTransport: Send + Sync {
    fn forward(&self, submission: FormSubmission) -> Result<(), DeliveryError>;
}

/// Outbound gateway to the webhook relay; failures are logged, never surfaced.
pub trait WebhookRelay: Send + Sync {
    fn publish(&self, event: WebhookEvent) -> Result<(), DeliveryError>;
}
