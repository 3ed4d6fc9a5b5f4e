//! Integration specifications for the submission status lookup surface.
//!
//! The demo directory record is exercised through both the service facade and
//! the HTTP router to pin down the canned payload and its error responses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use permit_portal::portal::status::{
    status_router, DemoStatusDirectory, DocumentReviewStatus, StageState, StatusLookupService,
    SubmissionId, DEMO_SUBMISSION_ID, NOT_FOUND_MESSAGE,
};

fn service() -> Arc<StatusLookupService<DemoStatusDirectory>> {
    Arc::new(StatusLookupService::new(Arc::new(
        DemoStatusDirectory::default(),
    )))
}

fn lookup_request(submission_id: &str, email: &str) -> Request<Body> {
    Request::post("/api/v1/status/lookup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "submission_id": submission_id, "email": email }).to_string(),
        ))
        .expect("request builds")
}

async fn read_json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[test]
fn demo_record_resolves_with_its_full_review_history() {
    let record = service()
        .lookup(
            &SubmissionId(DEMO_SUBMISSION_ID.to_string()),
            "john.smith@example.com",
        )
        .expect("demo id resolves");

    assert_eq!(record.applicant_name, "John Smith");
    assert_eq!(record.property_address, "123 Business Ave, City, State 12345");
    assert_eq!(record.status_label(), "Under Review");
    assert_eq!(record.current_step, 2);
    assert_eq!(record.documents.len(), 5);
    assert_eq!(record.review_notes.len(), 2);

    let fire_safety = record
        .documents
        .iter()
        .find(|document| document.name == "Fire Safety Certificate")
        .expect("fire safety entry present");
    assert_eq!(
        fire_safety.status,
        DocumentReviewStatus::CorrectionsNeeded
    );
    assert!(fire_safety
        .note
        .as_deref()
        .is_some_and(|note| note.contains("2024 revision")));
}

#[test]
fn stage_progress_marks_the_third_stage_active() {
    let record = service()
        .lookup(
            &SubmissionId(DEMO_SUBMISSION_ID.to_string()),
            "john.smith@example.com",
        )
        .expect("demo id resolves");

    let states: Vec<StageState> = record
        .stage_progress()
        .iter()
        .map(|entry| entry.state)
        .collect();
    assert_eq!(
        states,
        vec![
            StageState::Complete,
            StageState::Complete,
            StageState::Active,
            StageState::Pending
        ]
    );
}

#[tokio::test]
async fn lookup_route_returns_the_presented_record() {
    let router = status_router(service());

    let response = router
        .oneshot(lookup_request(DEMO_SUBMISSION_ID, "john.smith@example.com"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["permit_label"], "Commercial");
    assert_eq!(payload["status"], "Under Review");
    assert_eq!(payload["stage_progress"].as_array().map(Vec::len), Some(4));
    assert_eq!(payload["stage_progress"][2]["state"], "active");
    assert_eq!(payload["documents"].as_array().map(Vec::len), Some(5));
    assert_eq!(payload["documents"][0]["label"], "Approved");
    assert_eq!(payload["documents"][0]["tone"], "positive");
    assert_eq!(payload["review_notes"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn unknown_id_returns_not_found_with_the_fixed_message() {
    let router = status_router(service());

    let response = router
        .oneshot(lookup_request("SUB-9999-999", "someone@example.com"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn blank_email_returns_unprocessable_entity() {
    let router = status_router(service());

    let response = router
        .oneshot(lookup_request(DEMO_SUBMISSION_ID, "   "))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
