//! Domain modules backing the portal's three surfaces.
//!
//! `catalog` holds the immutable permit categories shown on the landing page,
//! `submission` drives the gated document-upload workflow, and `status` serves
//! the canned review-progress lookup.

pub mod catalog;
pub mod status;
pub mod submission;
