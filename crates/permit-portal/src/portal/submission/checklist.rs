use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{DocumentUpload, MAX_DOCUMENT_BYTES};
use crate::portal::catalog::{DocumentRequirement, PermitCatalog, PermitType};

/// Validation errors raised for a candidate upload. None of these mutate the
/// checklist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentUploadError {
    #[error("unsupported file type '{found}': please upload PDF files only")]
    UnsupportedFileType { found: String },
    #[error("file is {size_bytes} bytes: please upload files smaller than 25MB")]
    FileTooLarge { size_bytes: u64 },
    #[error("'{name}' is not a document slot for this permit category")]
    UnknownDocument { name: String },
}

/// Counts backing the upload progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub total: usize,
}

impl ChecklistProgress {
    pub const fn is_complete(self) -> bool {
        self.completed == self.total
    }
}

/// Required-document checklist for one draft: the category's requirement list
/// plus the accepted uploads keyed by document name. Re-uploading under an
/// already-used name overwrites the prior entry.
#[derive(Debug, Clone)]
pub struct DocumentChecklist {
    requirements: Vec<DocumentRequirement>,
    uploads: BTreeMap<&'static str, DocumentUpload>,
}

impl DocumentChecklist {
    pub fn for_permit(permit_type: PermitType) -> Self {
        Self {
            requirements: PermitCatalog::standard()
                .requirements_for(permit_type)
                .to_vec(),
            uploads: BTreeMap::new(),
        }
    }

    pub fn requirements(&self) -> &[DocumentRequirement] {
        &self.requirements
    }

    pub fn uploads(&self) -> &BTreeMap<&'static str, DocumentUpload> {
        &self.uploads
    }

    pub fn uploaded(&self, name: &str) -> Option<&DocumentUpload> {
        self.uploads.get(name)
    }

    /// Validate and store a candidate upload for the named document slot.
    pub fn upload(
        &mut self,
        name: &str,
        candidate: DocumentUpload,
    ) -> Result<(), DocumentUploadError> {
        let slot = self
            .requirements
            .iter()
            .find(|requirement| requirement.name == name)
            .ok_or_else(|| DocumentUploadError::UnknownDocument {
                name: name.to_string(),
            })?;

        validate(&candidate)?;
        self.uploads.insert(slot.name, candidate);
        Ok(())
    }

    /// Remove the upload for `name` so the slot can be filled again. Returns
    /// whether anything was removed; absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        self.uploads.remove(name).is_some()
    }

    /// (required documents with an upload, total required documents).
    pub fn progress(&self) -> ChecklistProgress {
        let required: Vec<&DocumentRequirement> = self
            .requirements
            .iter()
            .filter(|requirement| requirement.required)
            .collect();
        let completed = required
            .iter()
            .filter(|requirement| self.uploads.contains_key(requirement.name))
            .count();

        ChecklistProgress {
            completed,
            total: required.len(),
        }
    }

    /// Names of required documents still missing an upload, in requirement
    /// order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.requirements
            .iter()
            .filter(|requirement| requirement.required)
            .filter(|requirement| !self.uploads.contains_key(requirement.name))
            .map(|requirement| requirement.name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.progress().is_complete()
    }
}

fn validate(candidate: &DocumentUpload) -> Result<(), DocumentUploadError> {
    let declared: mime::Mime =
        candidate
            .content_type
            .parse()
            .map_err(|_| DocumentUploadError::UnsupportedFileType {
                found: candidate.content_type.clone(),
            })?;

    if declared.essence_str() != mime::APPLICATION_PDF.essence_str() {
        return Err(DocumentUploadError::UnsupportedFileType {
            found: candidate.content_type.clone(),
        });
    }

    if candidate.size_bytes > MAX_DOCUMENT_BYTES {
        return Err(DocumentUploadError::FileTooLarge {
            size_bytes: candidate.size_bytes,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(file_name: &str, size_bytes: u64) -> DocumentUpload {
        DocumentUpload {
            file_name: file_name.to_string(),
            content_type: "application/pdf".to_string(),
            size_bytes,
        }
    }

    fn commercial_checklist() -> DocumentChecklist {
        DocumentChecklist::for_permit(PermitType::Commercial)
    }

    #[test]
    fn rejects_non_pdf_without_mutating_state() {
        let mut checklist = commercial_checklist();
        let candidate = DocumentUpload {
            file_name: "site-plan.docx".to_string(),
            content_type: "application/msword".to_string(),
            size_bytes: 1024,
        };

        let result = checklist.upload("Site Plan", candidate);
        assert!(matches!(
            result,
            Err(DocumentUploadError::UnsupportedFileType { .. })
        ));
        assert_eq!(checklist.progress().completed, 0);
        assert!(checklist.uploaded("Site Plan").is_none());
    }

    #[test]
    fn accepts_exactly_25mb_and_rejects_one_byte_more() {
        let mut checklist = commercial_checklist();

        checklist
            .upload("Site Plan", pdf("site-plan.pdf", MAX_DOCUMENT_BYTES))
            .expect("25MB exactly is within the limit");

        let result = checklist.upload(
            "Traffic Impact Study",
            pdf("traffic.pdf", MAX_DOCUMENT_BYTES + 1),
        );
        assert!(matches!(
            result,
            Err(DocumentUploadError::FileTooLarge { .. })
        ));
        assert_eq!(checklist.progress().completed, 1);
    }

    #[test]
    fn pdf_with_parameters_still_counts_as_pdf() {
        let mut checklist = commercial_checklist();
        let candidate = DocumentUpload {
            file_name: "epa.pdf".to_string(),
            content_type: "application/pdf; charset=binary".to_string(),
            size_bytes: 2048,
        };
        checklist
            .upload("EPA Form XYZ", candidate)
            .expect("declared type is still PDF");
    }

    #[test]
    fn re_upload_overwrites_silently() {
        let mut checklist = commercial_checklist();
        checklist
            .upload("Site Plan", pdf("v1.pdf", 100))
            .expect("first upload accepted");
        checklist
            .upload("Site Plan", pdf("v2.pdf", 200))
            .expect("overwrite accepted");

        let stored = checklist.uploaded("Site Plan").expect("entry present");
        assert_eq!(stored.file_name, "v2.pdf");
        assert_eq!(checklist.progress().completed, 1);
    }

    #[test]
    fn remove_reopens_the_slot() {
        let mut checklist = commercial_checklist();
        checklist
            .upload("Parking Analysis", pdf("parking.pdf", 100))
            .expect("upload accepted");
        assert_eq!(checklist.progress().completed, 1);

        assert!(checklist.remove("Parking Analysis"));
        assert_eq!(checklist.progress().completed, 0);
        assert!(!checklist.remove("Parking Analysis"));

        checklist
            .upload("Parking Analysis", pdf("parking-v2.pdf", 100))
            .expect("slot accepts a fresh upload");
        assert_eq!(checklist.progress().completed, 1);
    }

    #[test]
    fn unknown_slot_is_refused() {
        let mut checklist = commercial_checklist();
        let result = checklist.upload("Moon Survey", pdf("moon.pdf", 100));
        assert!(matches!(
            result,
            Err(DocumentUploadError::UnknownDocument { .. })
        ));
    }

    #[test]
    fn missing_required_lists_names_in_requirement_order() {
        let mut checklist = commercial_checklist();
        checklist
            .upload("Site Plan", pdf("site.pdf", 100))
            .expect("upload accepted");

        assert_eq!(
            checklist.missing_required(),
            vec![
                "EPA Form XYZ",
                "Traffic Impact Study",
                "Fire Safety Certificate",
                "Parking Analysis"
            ]
        );
        assert!(!checklist.is_complete());
    }
}
