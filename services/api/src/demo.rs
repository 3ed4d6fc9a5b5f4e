use crate::infra::{InMemoryDraftRepository, InMemoryNoticePublisher};
use clap::Args;
use std::sync::Arc;
use std::time::Duration;

use permit_portal::error::AppError;
use permit_portal::portal::catalog::{PermitCatalog, PermitType};
use permit_portal::portal::status::{
    DemoStatusDirectory, StageState, StatusLookupError, StatusLookupService, SubmissionId,
    DEMO_SUBMISSION_ID,
};
use permit_portal::portal::submission::{
    ApplicantDetails, DocumentUpload, IntakeError, NoticeSeverity, SimulatedProcessor,
    SubmissionIntakeService,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Permit category to walk through (residential, commercial, agricultural).
    #[arg(long, default_value = "commercial", value_parser = parse_permit_type)]
    pub(crate) permit_type: Option<PermitType>,
    /// Simulated processing latency in milliseconds.
    #[arg(long, default_value_t = 0)]
    pub(crate) latency_ms: u64,
}

#[derive(Args, Debug)]
pub(crate) struct StatusLookupArgs {
    /// Submission identifier printed on the confirmation (e.g. SUB-2024-001).
    #[arg(long, default_value = DEMO_SUBMISSION_ID)]
    pub(crate) submission_id: String,
    /// Email address used on the original submission.
    #[arg(long)]
    pub(crate) email: String,
}

fn parse_permit_type(raw: &str) -> Result<PermitType, String> {
    PermitType::from_path_segment(raw).ok_or_else(|| format!("unknown permit type '{raw}'"))
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let catalog = PermitCatalog::standard();

    println!("Permit categories");
    for category in catalog.categories() {
        println!(
            "\n{} (${} processing fee)",
            category.permit_type.label(),
            category.permit_type.processing_fee()
        );
        println!("  {}", category.description);
        println!("  Required documents:");
        for requirement in &category.requirements {
            println!("    - {}: {}", requirement.name, requirement.description);
        }
    }

    println!("\nSubmission process");
    for (index, step) in PermitCatalog::process_steps().iter().enumerate() {
        println!("  {}. {} - {}", index + 1, step.title, step.detail);
    }

    Ok(())
}

pub(crate) fn run_status_lookup(args: StatusLookupArgs) -> Result<(), AppError> {
    let service = StatusLookupService::new(Arc::new(DemoStatusDirectory::default()));
    let record = match service.lookup(&SubmissionId(args.submission_id), &args.email) {
        Ok(record) => record,
        Err(err @ StatusLookupError::Directory(_)) => return Err(AppError::Lookup(err)),
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    println!("Submission {}", record.submission_id.0);
    println!("  Permit type: {}", record.permit_type.label());
    println!("  Applicant: {}", record.applicant_name);
    println!("  Property: {}", record.property_address);
    println!(
        "  Submitted {} | estimated completion {}",
        record.submitted_on, record.estimated_completion
    );
    println!("  Status: {}", record.status_label());

    println!("\nReview progress");
    for entry in record.stage_progress() {
        let marker = match entry.state {
            StageState::Complete => "[x]",
            StageState::Active => "[>]",
            StageState::Pending => "[ ]",
        };
        println!("  {} {} - {}", marker, entry.label, entry.description);
    }

    println!("\nDocuments");
    for document in &record.documents {
        let reviewed = match document.reviewed_on {
            Some(date) => format!(" (reviewed {date})"),
            None => String::new(),
        };
        println!(
            "  - {}: {}{}",
            document.name,
            document.status.label(),
            reviewed
        );
        if let Some(note) = &document.note {
            println!("      {note}");
        }
    }

    if record.review_notes.is_empty() {
        println!("\nReview notes: none");
    } else {
        println!("\nReview notes");
        for note in &record.review_notes {
            println!("  - {}: {}", note.date, note.note);
        }
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let permit_type = args.permit_type.unwrap_or(PermitType::Commercial);
    let processor = Arc::new(SimulatedProcessor::new(Duration::from_millis(
        args.latency_ms,
    )));

    let repository = Arc::new(InMemoryDraftRepository::default());
    let notices = Arc::new(InMemoryNoticePublisher::default());
    let service = Arc::new(SubmissionIntakeService::with_processor(
        repository,
        notices.clone(),
        processor,
    ));

    println!("Document submission demo ({})", permit_type.label());
    let record = service.open_draft(permit_type)?;
    let draft_id = record.id.clone();
    println!(
        "- Opened draft {} with {} required documents (${} fee)",
        draft_id.0,
        record.checklist.progress().total,
        permit_type.processing_fee()
    );

    println!("\nSubmitting before any uploads");
    match service.submit(&draft_id).await {
        Ok(_) => println!("  Unexpectedly accepted"),
        Err(err) => println!("  Blocked: {err}"),
    }

    println!("\nUploading a non-PDF file");
    let rejected = DocumentUpload {
        file_name: "site-plan.docx".to_string(),
        content_type: content_type_for("site-plan.docx"),
        size_bytes: 120_000,
    };
    match service.upload_document(&draft_id, "Site Plan", rejected) {
        Ok(_) => println!("  Unexpectedly accepted"),
        Err(err) => println!("  Rejected: {err}"),
    }

    println!("\nUploading the required documents");
    let catalog = PermitCatalog::standard();
    for requirement in catalog.requirements_for(permit_type) {
        let file_name = format!(
            "{}.pdf",
            requirement.name.to_ascii_lowercase().replace(' ', "-")
        );
        let upload = DocumentUpload {
            file_name: file_name.clone(),
            content_type: content_type_for(&file_name),
            size_bytes: 240_000,
        };
        let record = service.upload_document(&draft_id, requirement.name, upload)?;
        let progress = record.checklist.progress();
        println!(
            "  - {} ({}/{} complete)",
            requirement.name, progress.completed, progress.total
        );
    }

    println!("\nRecording applicant details and consent");
    let record = service.update_applicant(
        &draft_id,
        ApplicantDetails {
            full_name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone: "555-0142".to_string(),
            property_address: "42 Commerce Way, City, State 12345".to_string(),
            project_description: "Two-story retail building".to_string(),
            agrees_to_terms: true,
        },
    )?;
    println!("  Ready to submit: {}", record.can_submit());

    let receipt = match service.submit(&draft_id).await {
        Ok(receipt) => receipt,
        Err(err @ IntakeError::Processing(_)) => {
            println!("  Processing failed, draft reopened: {err}");
            return Ok(());
        }
        Err(err) => return Err(AppError::from(err)),
    };
    println!("\nReceipt for {}", receipt.draft_id.0);
    println!("  Fee due: ${}", receipt.fee_due);
    println!("  {}", receipt.message);

    println!("\nNotices raised along the way");
    for notice in notices.events() {
        let severity = match notice.severity {
            NoticeSeverity::Info => "info",
            NoticeSeverity::Warning => "warn",
        };
        println!("  [{severity}] {}: {}", notice.title, notice.detail);
    }

    println!("\nChecking the demo status record");
    run_status_lookup(StatusLookupArgs {
        submission_id: DEMO_SUBMISSION_ID.to_string(),
        email: "jane.doe@example.com".to_string(),
    })
}

fn content_type_for(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
