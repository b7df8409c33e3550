//! Adherence-Core Library
//!
//! Single-institution data capture for breast cancer chemotherapy adherence.
//! One JSON document per patient on local (or ephemeral container) storage,
//! built up progressively over the course of a study:
//!
//! ```text
//! Baseline intake ──► RecordStore::save_baseline
//!                              │
//!                    {root}/patient_{id}/patient_{id}.json
//!                              │
//! Cycle entry (×N) ──► RecordStore::append_cycle
//!                              │
//! Final follow-up  ──► RecordStore::save_final_followup
//! ```
//!
//! # Core Principle
//!
//! **The document on disk is the authoritative full state.** Every mutation
//! reads (or initializes) the record, edits it in memory, and atomically
//! rewrites the whole file. There is no partial-write protocol and no delete
//! operation.
//!
//! # Modules
//!
//! - [`models`]: Domain types (PatientRecord, BaselineData, CycleRecord, ...)
//! - [`store`]: File-backed record store with sanitized path addressing
//! - [`catalog`]: Form option catalogs and the district reference list
//! - [`config`]: Storage root and validation rule configuration

pub mod catalog;
pub mod config;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use catalog::CatalogError;
pub use config::{Config, ValidationRules};
pub use models::{
    BaselineData, Comorbidities, CycleDraft, CycleRecord, FinalFollowup, LabResults,
    MedicationEntry, PatientRecord, PatientStatus, YesNo,
};
pub use store::{sanitize_patient_id, RecordStore, StoreError, StoreResult};
