use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use prospect_ai::calculators::delivery::{
    DeliveryError, FormSubmission, FormTransport, WebhookEvent, WebhookRelay,
};
use prospect_ai::config::DeliveryConfig;
use tracing::{error, info};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryFormTransport {
    sent: Arc<Mutex<Vec<FormSubmission>>>,
}

impl InMemoryFormTransport {
    pub(crate) fn sent(&self) -> Vec<FormSubmission> {
        self.sent.lock().expect("transport mutex poisoned").clone()
    }
}

impl FormTransport for InMemoryFormTransport {
    fn forward(&self, submission: FormSubmission) -> Result<(), DeliveryError> {
        self.sent
            .lock()
            .expect("transport mutex poisoned")
            .push(submission);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryWebhookRelay {
    events: Arc<Mutex<Vec<WebhookEvent>>>,
}

impl InMemoryWebhookRelay {
    pub(crate) fn events(&self) -> Vec<WebhookEvent> {
        self.events.lock().expect("relay mutex poisoned").clone()
    }
}

impl WebhookRelay for InMemoryWebhookRelay {
    fn publish(&self, event: WebhookEvent) -> Result<(), DeliveryError> {
        self.events
            .lock()
            .expect("relay mutex poisoned")
            .push(event);
        Ok(())
    }
}

/// Fire-and-forget POST of the flattened form fields to the external
/// processor. Must be constructed inside a tokio runtime; the request is
/// spawned so the calculator response never waits on the collaborator.
pub(crate) struct HttpFormTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFormTransport {
    pub(crate) fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl FormTransport for HttpFormTransport {
    fn forward(&self, submission: FormSubmission) -> Result<(), DeliveryError> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        tokio::spawn(async move {
            match client.post(&endpoint).form(&submission.fields).send().await {
                Ok(response) if response.status().is_success() => {}
                Ok(response) => {
                    error!(%endpoint, status = %response.status(), "form processor rejected submission")
                }
                Err(err) => error!(%endpoint, error = %err, "form processor unreachable"),
            }
        });
        Ok(())
    }
}

/// Fire-and-forget JSON POST of the webhook payload.
pub(crate) struct HttpWebhookRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpWebhookRelay {
    pub(crate) fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl WebhookRelay for HttpWebhookRelay {
    fn publish(&self, event: WebhookEvent) -> Result<(), DeliveryError> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        tokio::spawn(async move {
            match client.post(&endpoint).json(&event).send().await {
                Ok(response) if response.status().is_success() => {}
                Ok(response) => {
                    error!(%endpoint, status = %response.status(), "webhook receiver rejected event")
                }
                Err(err) => error!(%endpoint, error = %err, "webhook receiver unreachable"),
            }
        });
        Ok(())
    }
}

/// Runtime-selected form gateway so `serve` can run with or without a
/// configured external processor.
pub(crate) enum FormGateway {
    Http(HttpFormTransport),
    Recording(InMemoryFormTransport),
}

impl FormGateway {
    pub(crate) fn from_config(config: &DeliveryConfig) -> Self {
        match &config.form_endpoint {
            Some(endpoint) => {
                info!(%endpoint, "forwarding form submissions over HTTP");
                Self::Http(HttpFormTransport::new(endpoint.clone()))
            }
            None => {
                info!("no form endpoint configured; recording submissions in memory");
                Self::Recording(InMemoryFormTransport::default())
            }
        }
    }
}

impl FormTransport for FormGateway {
    fn forward(&self, submission: FormSubmission) -> Result<(), DeliveryError> {
        match self {
            Self::Http(transport) => transport.forward(submission),
            Self::Recording(transport) => transport.forward(submission),
        }
    }
}

/// Runtime-selected webhook gateway; absence of an endpoint is reported as
/// `EndpointMissing`, which the service logs at debug and ignores.
pub(crate) enum WebhookGateway {
    Http(HttpWebhookRelay),
    Disabled,
}

impl WebhookGateway {
    pub(crate) fn from_config(config: &DeliveryConfig) -> Self {
        match &config.webhook_endpoint {
            Some(endpoint) => {
                info!(%endpoint, "relaying lead events over HTTP");
                Self::Http(HttpWebhookRelay::new(endpoint.clone()))
            }
            None => Self::Disabled,
        }
    }
}

impl WebhookRelay for WebhookGateway {
    fn publish(&self, event: WebhookEvent) -> Result<(), DeliveryError> {
        match self {
            Self::Http(relay) => relay.publish(event),
            Self::Disabled => Err(DeliveryError::EndpointMissing),
        }
    }
}
