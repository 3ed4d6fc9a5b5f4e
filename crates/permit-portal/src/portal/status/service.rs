use std::sync::Arc;

use super::directory::{DirectoryError, StatusDirectory};
use super::domain::{SubmissionId, SubmissionStatusRecord};

/// Fixed user-facing message for identifiers the directory does not know.
pub const NOT_FOUND_MESSAGE: &str =
    "Submission not found. Please check your submission ID and email address.";

/// Error raised by the lookup service.
#[derive(Debug, thiserror::Error)]
pub enum StatusLookupError {
    #[error("email address is required")]
    EmailRequired,
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Service resolving submission identifiers against a status directory.
pub struct StatusLookupService<D> {
    directory: Arc<D>,
}

impl<D> StatusLookupService<D>
where
    D: StatusDirectory + 'static,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Resolve `id` to its status record. The email is required to be
    /// non-empty but is not matched against the record — the directory holds
    /// no applicant email to match, a known gap carried over from the demo
    /// data set rather than an access-control decision.
    pub fn lookup(
        &self,
        id: &SubmissionId,
        email: &str,
    ) -> Result<SubmissionStatusRecord, StatusLookupError> {
        if email.trim().is_empty() {
            return Err(StatusLookupError::EmailRequired);
        }

        self.directory
            .find(id)?
            .ok_or(StatusLookupError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::status::directory::{DemoStatusDirectory, DEMO_SUBMISSION_ID};

    fn service() -> StatusLookupService<DemoStatusDirectory> {
        StatusLookupService::new(Arc::new(DemoStatusDirectory::default()))
    }

    #[test]
    fn any_non_empty_email_is_accepted() {
        let record = service()
            .lookup(
                &SubmissionId(DEMO_SUBMISSION_ID.to_string()),
                "anyone@example.com",
            )
            .expect("demo id resolves");
        assert_eq!(record.submission_id.0, DEMO_SUBMISSION_ID);

        service()
            .lookup(&SubmissionId(DEMO_SUBMISSION_ID.to_string()), "not-an-email")
            .expect("email is not matched against the record");
    }

    #[test]
    fn empty_email_is_refused() {
        let result = service().lookup(&SubmissionId(DEMO_SUBMISSION_ID.to_string()), "  ");
        assert!(matches!(result, Err(StatusLookupError::EmailRequired)));
    }

    #[test]
    fn unknown_id_yields_the_fixed_message() {
        let err = service()
            .lookup(&SubmissionId("SUB-9999-999".to_string()), "a@example.com")
            .expect_err("unknown id");
        assert_eq!(err.to_string(), NOT_FOUND_MESSAGE);
    }
}
