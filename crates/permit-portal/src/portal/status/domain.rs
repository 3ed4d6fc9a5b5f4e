use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::portal::catalog::PermitType;

/// Identifier printed on a submission confirmation (`SUB-2024-001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// Fixed four-stage review progression shown to applicants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStage {
    Received,
    UnderReview,
    CorrectionsNeeded,
    PermitReady,
}

impl ReviewStage {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Received,
            Self::UnderReview,
            Self::CorrectionsNeeded,
            Self::PermitReady,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::UnderReview => "Under Review",
            Self::CorrectionsNeeded => "Corrections Needed",
            Self::PermitReady => "Permit Ready for Pickup",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Received => "Documents submitted successfully",
            Self::UnderReview => "Administrative review in progress",
            Self::CorrectionsNeeded => "Address any document issues",
            Self::PermitReady => "Review complete, permit available",
        }
    }
}

/// How one stage renders relative to the record's current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageState {
    Complete,
    Active,
    Pending,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageProgressEntry {
    pub stage: ReviewStage,
    pub label: &'static str,
    pub description: &'static str,
    pub state: StageState,
}

/// Review status assigned to each submitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentReviewStatus {
    Approved,
    UnderReview,
    CorrectionsNeeded,
    Pending,
}

impl DocumentReviewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::UnderReview => "Under Review",
            Self::CorrectionsNeeded => "Corrections Needed",
            Self::Pending => "Pending",
        }
    }

    pub const fn tone(self) -> StatusTone {
        match self {
            Self::Approved => StatusTone::Positive,
            Self::UnderReview => StatusTone::Active,
            Self::CorrectionsNeeded => StatusTone::Attention,
            Self::Pending => StatusTone::Neutral,
        }
    }
}

/// Presentation hint for a review status; clients map these to colors and
/// icons. `Neutral` doubles as the fallback presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Positive,
    Active,
    Attention,
    Neutral,
}

/// Per-document review entry within a status record.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReview {
    pub name: String,
    pub status: DocumentReviewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Timestamped reviewer remark.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewNote {
    pub date: NaiveDate,
    pub note: String,
}

/// Read-only snapshot of a prior submission's review progress.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionStatusRecord {
    pub submission_id: SubmissionId,
    pub permit_type: PermitType,
    pub applicant_name: String,
    pub property_address: String,
    pub submitted_on: NaiveDate,
    pub estimated_completion: NaiveDate,
    /// Overall review status badge. Stored on the record rather than derived:
    /// the reviewing office advances it independently of the step indicator.
    pub status: ReviewStage,
    /// Index (0-3) into the fixed stage progression.
    pub current_step: usize,
    pub documents: Vec<DocumentReview>,
    pub review_notes: Vec<ReviewNote>,
}

impl SubmissionStatusRecord {
    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    /// Stages before the current step render complete, the current step
    /// active, later stages pending.
    pub fn stage_progress(&self) -> Vec<StageProgressEntry> {
        ReviewStage::ordered()
            .into_iter()
            .enumerate()
            .map(|(index, stage)| StageProgressEntry {
                stage,
                label: stage.label(),
                description: stage.description(),
                state: match index.cmp(&self.current_step) {
                    Ordering::Less => StageState::Complete,
                    Ordering::Equal => StageState::Active,
                    Ordering::Greater => StageState::Pending,
                },
            })
            .collect()
    }
}
