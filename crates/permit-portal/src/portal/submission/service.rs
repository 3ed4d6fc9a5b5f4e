use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::checklist::{DocumentChecklist, DocumentUploadError};
use super::domain::{ApplicantDetails, DocumentUpload, DraftId, DraftState, SubmissionReceipt};
use super::repository::{
    DraftRecord, DraftRepository, NoticeError, NoticePublisher, PortalNotice, RepositoryError,
};
use crate::portal::catalog::PermitType;

static DRAFT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_draft_id() -> DraftId {
    let id = DRAFT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    DraftId(format!("draft-{id:06}"))
}

/// Future returned by submission processors.
pub type ProcessingFuture =
    Pin<Box<dyn Future<Output = Result<SubmissionReceipt, ProcessingError>> + Send>>;

/// Seam for the post-gate processing step. The default implementation
/// simulates a fixed round-trip; a real deployment would transmit the
/// document package here.
pub trait SubmissionProcessor: Send + Sync {
    fn process(&self, record: &DraftRecord) -> ProcessingFuture;
}

/// Error raised by a submission processor.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("processing backend unavailable: {0}")]
    Unavailable(String),
}

/// Stand-in for the permitting back office: waits a fixed latency, then
/// acknowledges the package. The returned future is a plain deferred task, so
/// callers may drop it to cancel.
#[derive(Debug, Clone)]
pub struct SimulatedProcessor {
    latency: Duration,
}

impl SimulatedProcessor {
    pub const DEFAULT_LATENCY: Duration = Duration::from_secs(2);

    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedProcessor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

impl SubmissionProcessor for SimulatedProcessor {
    fn process(&self, record: &DraftRecord) -> ProcessingFuture {
        let latency = self.latency;
        let receipt = SubmissionReceipt {
            draft_id: record.id.clone(),
            permit_type: record.permit_type,
            fee_due: record.permit_type.processing_fee(),
            message: "Your submission is being processed. You'll receive confirmation within 24 hours.".to_string(),
        };

        Box::pin(async move {
            tokio::time::sleep(latency).await;
            Ok(receipt)
        })
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("draft not found")]
    UnknownDraft,
    #[error(transparent)]
    Upload(#[from] DocumentUploadError),
    #[error("missing required documents: {}", .0.join(", "))]
    MissingDocuments(Vec<&'static str>),
    #[error("please agree to the terms and conditions to proceed")]
    ConsentRequired,
    #[error("a submission is already in flight for this draft")]
    AlreadyInFlight,
    #[error("this draft has already been submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notice(#[from] NoticeError),
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

/// Service composing the checklist gate, draft repository, notice hook, and
/// processing seam.
pub struct SubmissionIntakeService<R, N> {
    repository: Arc<R>,
    notices: Arc<N>,
    processor: Arc<dyn SubmissionProcessor>,
}

impl<R, N> SubmissionIntakeService<R, N>
where
    R: DraftRepository + 'static,
    N: NoticePublisher + 'static,
{
    pub fn new(repository: Arc<R>, notices: Arc<N>) -> Self {
        Self::with_processor(repository, notices, Arc::new(SimulatedProcessor::default()))
    }

    pub fn with_processor(
        repository: Arc<R>,
        notices: Arc<N>,
        processor: Arc<dyn SubmissionProcessor>,
    ) -> Self {
        Self {
            repository,
            notices,
            processor,
        }
    }

    /// Open a fresh draft for a permit category.
    pub fn open_draft(&self, permit_type: PermitType) -> Result<DraftRecord, IntakeError> {
        let record = DraftRecord {
            id: next_draft_id(),
            permit_type,
            checklist: DocumentChecklist::for_permit(permit_type),
            applicant: ApplicantDetails::default(),
            state: DraftState::Draft,
            receipt: None,
        };

        Ok(self.repository.insert(record)?)
    }

    pub fn get(&self, draft_id: &DraftId) -> Result<DraftRecord, IntakeError> {
        self.repository
            .fetch(draft_id)?
            .ok_or(IntakeError::UnknownDraft)
    }

    /// Validate and store an upload for the named document slot. Validation
    /// failures surface a warning notice and leave the draft untouched.
    pub fn upload_document(
        &self,
        draft_id: &DraftId,
        name: &str,
        candidate: DocumentUpload,
    ) -> Result<DraftRecord, IntakeError> {
        let mut record = self.get(draft_id)?;
        ensure_open(&record)?;

        if let Err(err) = record.checklist.upload(name, candidate) {
            self.notices.publish(upload_warning(&err))?;
            return Err(IntakeError::Upload(err));
        }

        self.repository.update(record.clone())?;
        self.notices.publish(PortalNotice::info(
            "File uploaded successfully",
            format!("{name} has been uploaded."),
        ))?;
        Ok(record)
    }

    /// Remove an upload so the slot can be filled again. Absent names are a
    /// no-op, mirroring the file-picker reset behavior.
    pub fn remove_document(
        &self,
        draft_id: &DraftId,
        name: &str,
    ) -> Result<DraftRecord, IntakeError> {
        let mut record = self.get(draft_id)?;
        ensure_open(&record)?;

        if record.checklist.remove(name) {
            self.repository.update(record.clone())?;
        }
        Ok(record)
    }

    /// Replace the applicant details wholesale, consent flag included.
    pub fn update_applicant(
        &self,
        draft_id: &DraftId,
        details: ApplicantDetails,
    ) -> Result<DraftRecord, IntakeError> {
        let mut record = self.get(draft_id)?;
        ensure_open(&record)?;

        record.applicant = details;
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Gate and submit the draft. Gate failures surface a blocking warning
    /// and change nothing; success runs the processor and marks the draft
    /// submitted.
    pub async fn submit(&self, draft_id: &DraftId) -> Result<SubmissionReceipt, IntakeError> {
        let mut record = self.get(draft_id)?;
        ensure_open(&record)?;

        let missing = record.checklist.missing_required();
        if !missing.is_empty() {
            self.notices.publish(PortalNotice::warning(
                "Missing required documents",
                format!("Please upload: {}", missing.join(", ")),
            ))?;
            return Err(IntakeError::MissingDocuments(missing));
        }

        if !record.applicant.agrees_to_terms {
            self.notices.publish(PortalNotice::warning(
                "Terms and conditions required",
                "Please agree to the terms and conditions to proceed.".to_string(),
            ))?;
            return Err(IntakeError::ConsentRequired);
        }

        record.state = DraftState::Processing;
        self.repository.update(record.clone())?;

        match self.processor.process(&record).await {
            Ok(receipt) => {
                record.state = DraftState::Submitted;
                record.receipt = Some(receipt.clone());
                self.repository.update(record)?;
                self.notices.publish(PortalNotice::info(
                    "Documents submitted successfully",
                    receipt.message.clone(),
                ))?;
                Ok(receipt)
            }
            Err(err) => {
                // Reopen the gate so the applicant can retry.
                record.state = DraftState::Draft;
                self.repository.update(record)?;
                Err(IntakeError::Processing(err))
            }
        }
    }
}

fn ensure_open(record: &DraftRecord) -> Result<(), IntakeError> {
    match record.state {
        DraftState::Draft => Ok(()),
        DraftState::Processing => Err(IntakeError::AlreadyInFlight),
        DraftState::Submitted => Err(IntakeError::AlreadySubmitted),
    }
}

fn upload_warning(err: &DocumentUploadError) -> PortalNotice {
    match err {
        DocumentUploadError::UnsupportedFileType { .. } => PortalNotice::warning(
            "Invalid file type",
            "Please upload PDF files only.".to_string(),
        ),
        DocumentUploadError::FileTooLarge { .. } => PortalNotice::warning(
            "File too large",
            "Please upload files smaller than 25MB.".to_string(),
        ),
        DocumentUploadError::UnknownDocument { .. } => {
            PortalNotice::warning("Unknown document", err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_ids_are_sequential_and_padded() {
        let first = next_draft_id();
        let second = next_draft_id();
        assert!(first.0.starts_with("draft-"));
        assert_eq!(first.0.len(), "draft-000001".len());
        assert_ne!(first, second);
    }
}
