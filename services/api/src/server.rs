use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryDraftRepository, InMemoryNoticePublisher};
use crate::routes::with_portal_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use permit_portal::config::AppConfig;
use permit_portal::error::AppError;
use permit_portal::portal::status::{DemoStatusDirectory, StatusLookupService};
use permit_portal::portal::submission::SubmissionIntakeService;
use permit_portal::telemetry;

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

    let repository = Arc::new(InMemoryDraftRepository::default());
    let notices = Arc::new(InMemoryNoticePublisher::default());
    let intake = Arc::new(SubmissionIntakeService::new(repository, notices));

    let directory = Arc::new(DemoStatusDirectory::default());
    let status = Arc::new(StatusLookupService::new(directory));

    let app = with_portal_routes(intake, status)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "permit portal ready");

    axum::serve(listener, app).await?;
    Ok(())
}
