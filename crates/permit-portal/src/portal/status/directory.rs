use chrono::NaiveDate;

use super::domain::{
    DocumentReview, DocumentReviewStatus, ReviewNote, ReviewStage, SubmissionId,
    SubmissionStatusRecord,
};
use crate::portal::catalog::PermitType;

/// Identifier of the single demonstration record the portal ships with.
pub const DEMO_SUBMISSION_ID: &str = "SUB-2024-001";

/// Read-only source of status records.
pub trait StatusDirectory: Send + Sync {
    fn find(&self, id: &SubmissionId) -> Result<Option<SubmissionStatusRecord>, DirectoryError>;
}

/// Error enumeration for directory failures.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("status directory unavailable: {0}")]
    Unavailable(String),
}

/// Directory seeded with the one canned record. There is no backing store;
/// every other identifier resolves to nothing.
#[derive(Debug, Clone)]
pub struct DemoStatusDirectory {
    records: Vec<SubmissionStatusRecord>,
}

impl Default for DemoStatusDirectory {
    fn default() -> Self {
        Self {
            records: vec![demo_record()],
        }
    }
}

impl StatusDirectory for DemoStatusDirectory {
    fn find(&self, id: &SubmissionId) -> Result<Option<SubmissionStatusRecord>, DirectoryError> {
        Ok(self
            .records
            .iter()
            .find(|record| record.submission_id == *id)
            .cloned())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("demo dates are valid")
}

fn demo_record() -> SubmissionStatusRecord {
    SubmissionStatusRecord {
        submission_id: SubmissionId(DEMO_SUBMISSION_ID.to_string()),
        permit_type: PermitType::Commercial,
        applicant_name: "John Smith".to_string(),
        property_address: "123 Business Ave, City, State 12345".to_string(),
        submitted_on: date(2024, 1, 15),
        estimated_completion: date(2024, 2, 2),
        status: ReviewStage::UnderReview,
        current_step: 2,
        documents: vec![
            DocumentReview {
                name: "EPA Form XYZ".to_string(),
                status: DocumentReviewStatus::Approved,
                reviewed_on: Some(date(2024, 1, 18)),
                note: None,
            },
            DocumentReview {
                name: "Site Plan".to_string(),
                status: DocumentReviewStatus::Approved,
                reviewed_on: Some(date(2024, 1, 18)),
                note: None,
            },
            DocumentReview {
                name: "Traffic Impact Study".to_string(),
                status: DocumentReviewStatus::UnderReview,
                reviewed_on: None,
                note: None,
            },
            DocumentReview {
                name: "Fire Safety Certificate".to_string(),
                status: DocumentReviewStatus::CorrectionsNeeded,
                reviewed_on: Some(date(2024, 1, 20)),
                note: Some("Certificate expired. Please submit 2024 revision.".to_string()),
            },
            DocumentReview {
                name: "Parking Analysis".to_string(),
                status: DocumentReviewStatus::Pending,
                reviewed_on: None,
                note: None,
            },
        ],
        review_notes: vec![
            ReviewNote {
                date: date(2024, 1, 18),
                note: "Initial document review completed for EPA Form and Site Plan.".to_string(),
            },
            ReviewNote {
                date: date(2024, 1, 20),
                note: "Fire Safety Certificate requires update - expired version submitted."
                    .to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_record_matches_the_published_sample() {
        let directory = DemoStatusDirectory::default();
        let record = directory
            .find(&SubmissionId(DEMO_SUBMISSION_ID.to_string()))
            .expect("directory reachable")
            .expect("demo record present");

        assert_eq!(record.permit_type, PermitType::Commercial);
        assert_eq!(record.applicant_name, "John Smith");
        assert_eq!(record.documents.len(), 5);
        assert_eq!(record.current_step, 2);
        assert_eq!(record.status_label(), "Under Review");
    }

    #[test]
    fn other_identifiers_resolve_to_nothing() {
        let directory = DemoStatusDirectory::default();
        let result = directory
            .find(&SubmissionId("SUB-9999-999".to_string()))
            .expect("directory reachable");
        assert!(result.is_none());
    }
}
