use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use permit_portal::portal::catalog::catalog_router;
use permit_portal::portal::status::{status_router, StatusDirectory, StatusLookupService};
use permit_portal::portal::submission::{
    submission_router, DraftRepository, NoticePublisher, SubmissionIntakeService,
};

/// Compose the portal routers with the service-level endpoints.
pub(crate) fn with_portal_routes<R, N, D>(
    intake: Arc<SubmissionIntakeService<R, N>>,
    status: Arc<StatusLookupService<D>>,
) -> axum::Router
where
    R: DraftRepository + 'static,
    N: NoticePublisher + 'static,
    D: StatusDirectory + 'static,
{
    catalog_router()
        .merge(submission_router(intake))
        .merge(status_router(status))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
