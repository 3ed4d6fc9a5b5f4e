use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicantDetails, DocumentUpload, DraftId};
use super::repository::{DraftRepository, NoticePublisher, RepositoryError};
use super::service::{IntakeError, SubmissionIntakeService};
use crate::portal::catalog::PermitType;

/// Router builder exposing HTTP endpoints for the intake workflow.
pub fn submission_router<R, N>(service: Arc<SubmissionIntakeService<R, N>>) -> Router
where
    R: DraftRepository + 'static,
    N: NoticePublisher + 'static,
{
    Router::new()
        .route("/api/v1/submissions", post(open_draft_handler::<R, N>))
        .route("/api/v1/submissions/:draft_id", get(draft_handler::<R, N>))
        .route(
            "/api/v1/submissions/:draft_id/documents/:document",
            put(upload_handler::<R, N>).delete(remove_handler::<R, N>),
        )
        .route(
            "/api/v1/submissions/:draft_id/applicant",
            put(applicant_handler::<R, N>),
        )
        .route(
            "/api/v1/submissions/:draft_id/submit",
            post(submit_handler::<R, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenDraftRequest {
    pub(crate) permit_type: PermitType,
}

pub(crate) async fn open_draft_handler<R, N>(
    State(service): State<Arc<SubmissionIntakeService<R, N>>>,
    Json(request): Json<OpenDraftRequest>,
) -> Response
where
    R: DraftRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.open_draft(request.permit_type) {
        Ok(record) => (StatusCode::CREATED, Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn draft_handler<R, N>(
    State(service): State<Arc<SubmissionIntakeService<R, N>>>,
    Path(draft_id): Path<String>,
) -> Response
where
    R: DraftRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.get(&DraftId(draft_id)) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn upload_handler<R, N>(
    State(service): State<Arc<SubmissionIntakeService<R, N>>>,
    Path((draft_id, document)): Path<(String, String)>,
    Json(candidate): Json<DocumentUpload>,
) -> Response
where
    R: DraftRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.upload_document(&DraftId(draft_id), &document, candidate) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn remove_handler<R, N>(
    State(service): State<Arc<SubmissionIntakeService<R, N>>>,
    Path((draft_id, document)): Path<(String, String)>,
) -> Response
where
    R: DraftRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.remove_document(&DraftId(draft_id), &document) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn applicant_handler<R, N>(
    State(service): State<Arc<SubmissionIntakeService<R, N>>>,
    Path(draft_id): Path<String>,
    Json(details): Json<ApplicantDetails>,
) -> Response
where
    R: DraftRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.update_applicant(&DraftId(draft_id), details) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<SubmissionIntakeService<R, N>>>,
    Path(draft_id): Path<String>,
) -> Response
where
    R: DraftRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.submit(&DraftId(draft_id)).await {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: IntakeError) -> Response {
    let status = match &err {
        IntakeError::UnknownDraft | IntakeError::Repository(RepositoryError::NotFound) => {
            StatusCode::NOT_FOUND
        }
        IntakeError::Upload(_) | IntakeError::MissingDocuments(_) | IntakeError::ConsentRequired => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        IntakeError::AlreadyInFlight
        | IntakeError::AlreadySubmitted
        | IntakeError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        IntakeError::Repository(RepositoryError::Unavailable(_))
        | IntakeError::Notice(_)
        | IntakeError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
