//! Core library for the municipal land-use document submission portal.
//!
//! The portal exposes three surfaces: a static permit catalog, a gated
//! document-submission workflow, and a status lookup backed by a canned
//! demonstration directory. Each surface owns its state; nothing is shared
//! across them beyond the catalog constants.

pub mod config;
pub mod error;
pub mod portal;
pub mod telemetry;
