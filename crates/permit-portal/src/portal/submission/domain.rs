use serde::{Deserialize, Serialize};

use crate::portal::catalog::PermitType;

/// Identifier wrapper for drafts opened through the portal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftId(pub String);

/// Upper bound on a single uploaded document: 25 MB exactly.
pub const MAX_DOCUMENT_BYTES: u64 = 25 * 1024 * 1024;

/// Declared metadata for a candidate upload. Only the declared content type
/// is checked; the portal never sniffs file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Free-form applicant fields collected alongside the checklist. Nothing here
/// is validated beyond the consent flag at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantDetails {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub property_address: String,
    #[serde(default)]
    pub project_description: String,
    #[serde(default)]
    pub agrees_to_terms: bool,
}

/// Lifecycle of a draft within the intake workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftState {
    Draft,
    Processing,
    Submitted,
}

impl DraftState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Processing => "Processing",
            Self::Submitted => "Submitted",
        }
    }
}

/// Acknowledgement returned once the (simulated) processing round-trip
/// completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub draft_id: DraftId,
    pub permit_type: PermitType,
    pub fee_due: u32,
    pub message: String,
}
