use crate::cli::ServeArgs;
use crate::infra::{AppState, FormGateway, WebhookGateway};
use crate::routes::with_calculator_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use prospect_ai::calculators::currency::StaticRateTable;
use prospect_ai::calculators::estimator::EstimatorConfig;
use prospect_ai::calculators::CalculatorService;
use prospect_ai::config::AppConfig;
use prospect_ai::error::AppError;
use prospect_ai::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let rates = Arc::new(StaticRateTable::new(config.rates.max_age_hours));
    let transport = Arc::new(FormGateway::from_config(&config.delivery));
    let relay = Arc::new(WebhookGateway::from_config(&config.delivery));
    let calculator_service = Arc::new(CalculatorService::new(
        rates,
        transport,
        relay,
        EstimatorConfig::default(),
    ));

    let app = with_calculator_routes(calculator_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "business value calculators ready");

    axum::serve(listener, app).await?;
    Ok(())
}
