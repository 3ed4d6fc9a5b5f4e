use std::collections::BTreeMap;

use serde::Serialize;

use super::checklist::{ChecklistProgress, DocumentChecklist};
use super::domain::{ApplicantDetails, DocumentUpload, DraftId, DraftState, SubmissionReceipt};
use crate::portal::catalog::PermitType;

/// Repository record holding one draft's checklist and applicant state.
#[derive(Debug, Clone)]
pub struct DraftRecord {
    pub id: DraftId,
    pub permit_type: PermitType,
    pub checklist: DocumentChecklist,
    pub applicant: ApplicantDetails,
    pub state: DraftState,
    pub receipt: Option<SubmissionReceipt>,
}

impl DraftRecord {
    /// Whether the gate would let this draft through right now.
    pub fn can_submit(&self) -> bool {
        self.state == DraftState::Draft
            && self.checklist.is_complete()
            && self.applicant.agrees_to_terms
    }

    pub fn view(&self) -> DraftView {
        DraftView {
            draft_id: self.id.clone(),
            permit_type: self.permit_type,
            state: self.state,
            processing_fee: self.permit_type.processing_fee(),
            progress: self.checklist.progress(),
            missing_documents: self.checklist.missing_required(),
            can_submit: self.can_submit(),
            uploads: self.checklist.uploads().clone(),
            receipt: self.receipt.clone(),
        }
    }
}

/// Storage abstraction so the intake service can be exercised in isolation.
pub trait DraftRepository: Send + Sync {
    fn insert(&self, record: DraftRecord) -> Result<DraftRecord, RepositoryError>;
    fn update(&self, record: DraftRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &DraftId) -> Result<Option<DraftRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("draft already exists")]
    Conflict,
    #[error("draft not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSeverity {
    Info,
    Warning,
}

/// User-facing notice emitted by the intake workflow; the UI renders these as
/// transient toasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortalNotice {
    pub severity: NoticeSeverity,
    pub title: String,
    pub detail: String,
}

impl PortalNotice {
    pub fn info(title: &str, detail: String) -> Self {
        Self {
            severity: NoticeSeverity::Info,
            title: title.to_string(),
            detail,
        }
    }

    pub fn warning(title: &str, detail: String) -> Self {
        Self {
            severity: NoticeSeverity::Warning,
            title: title.to_string(),
            detail,
        }
    }
}

/// Trait describing the outbound notice hook.
pub trait NoticePublisher: Send + Sync {
    fn publish(&self, notice: PortalNotice) -> Result<(), NoticeError>;
}

/// Notice dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NoticeError {
    #[error("notice transport unavailable: {0}")]
    Transport(String),
}

/// Serialized representation of a draft for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct DraftView {
    pub draft_id: DraftId,
    pub permit_type: PermitType,
    pub state: DraftState,
    pub processing_fee: u32,
    pub progress: ChecklistProgress,
    pub missing_documents: Vec<&'static str>,
    pub can_submit: bool,
    pub uploads: BTreeMap<&'static str, DocumentUpload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<SubmissionReceipt>,
}
