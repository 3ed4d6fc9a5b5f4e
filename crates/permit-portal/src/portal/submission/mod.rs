//! Document-submission intake: checklist gating, applicant details, and the
//! simulated processing round-trip.
//!
//! A draft is opened per permit category and accumulates validated uploads
//! keyed by document name. Submission is gated on checklist completeness and
//! the consent flag; the post-gate processing step sits behind a trait so the
//! simulated latency can be swapped for a real back-office call.

pub mod checklist;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use checklist::{ChecklistProgress, DocumentChecklist, DocumentUploadError};
pub use domain::{
    ApplicantDetails, DocumentUpload, DraftId, DraftState, SubmissionReceipt, MAX_DOCUMENT_BYTES,
};
pub use repository::{
    DraftRecord, DraftRepository, DraftView, NoticeError, NoticePublisher, NoticeSeverity,
    PortalNotice, RepositoryError,
};
pub use router::submission_router;
pub use service::{
    IntakeError, ProcessingError, SimulatedProcessor, SubmissionIntakeService, SubmissionProcessor,
};
