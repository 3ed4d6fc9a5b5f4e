//! Status lookup: resolves a submission identifier to a canned review-progress
//! record and renders the fixed four-stage progression.

pub mod directory;
pub mod domain;
pub mod router;
pub mod service;

pub use directory::{DemoStatusDirectory, DirectoryError, StatusDirectory, DEMO_SUBMISSION_ID};
pub use domain::{
    DocumentReview, DocumentReviewStatus, ReviewNote, ReviewStage, StageProgressEntry, StageState,
    StatusTone, SubmissionId, SubmissionStatusRecord,
};
pub use router::status_router;
pub use service::{StatusLookupError, StatusLookupService, NOT_FOUND_MESSAGE};
