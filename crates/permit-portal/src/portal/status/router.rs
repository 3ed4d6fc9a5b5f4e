use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::directory::StatusDirectory;
use super::domain::{
    DocumentReviewStatus, ReviewNote, StageProgressEntry, StatusTone, SubmissionId,
    SubmissionStatusRecord,
};
use super::service::{StatusLookupError, StatusLookupService};
use crate::portal::catalog::PermitType;

/// Router builder exposing the status lookup endpoint.
pub fn status_router<D>(service: Arc<StatusLookupService<D>>) -> Router
where
    D: StatusDirectory + 'static,
{
    Router::new()
        .route("/api/v1/status/lookup", post(lookup_handler::<D>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusLookupRequest {
    pub(crate) submission_id: String,
    pub(crate) email: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DocumentReviewView {
    pub(crate) name: String,
    pub(crate) status: DocumentReviewStatus,
    pub(crate) label: &'static str,
    pub(crate) tone: StatusTone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) reviewed_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) note: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusLookupResponse {
    pub(crate) submission_id: SubmissionId,
    pub(crate) permit_type: PermitType,
    pub(crate) permit_label: &'static str,
    pub(crate) applicant_name: String,
    pub(crate) property_address: String,
    pub(crate) submitted_on: NaiveDate,
    pub(crate) estimated_completion: NaiveDate,
    pub(crate) status: &'static str,
    pub(crate) stage_progress: Vec<StageProgressEntry>,
    pub(crate) documents: Vec<DocumentReviewView>,
    pub(crate) review_notes: Vec<ReviewNote>,
}

impl StatusLookupResponse {
    fn from_record(record: SubmissionStatusRecord) -> Self {
        let stage_progress = record.stage_progress();
        let status = record.status_label();
        Self {
            submission_id: record.submission_id,
            permit_type: record.permit_type,
            permit_label: record.permit_type.label(),
            applicant_name: record.applicant_name,
            property_address: record.property_address,
            submitted_on: record.submitted_on,
            estimated_completion: record.estimated_completion,
            status,
            stage_progress,
            documents: record
                .documents
                .into_iter()
                .map(|document| DocumentReviewView {
                    label: document.status.label(),
                    tone: document.status.tone(),
                    name: document.name,
                    status: document.status,
                    reviewed_on: document.reviewed_on,
                    note: document.note,
                })
                .collect(),
            review_notes: record.review_notes,
        }
    }
}

pub(crate) async fn lookup_handler<D>(
    State(service): State<Arc<StatusLookupService<D>>>,
    Json(request): Json<StatusLookupRequest>,
) -> Response
where
    D: StatusDirectory + 'static,
{
    let id = SubmissionId(request.submission_id);
    match service.lookup(&id, &request.email) {
        Ok(record) => {
            let view = StatusLookupResponse::from_record(record);
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(err @ StatusLookupError::EmailRequired) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(err @ StatusLookupError::NotFound) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
