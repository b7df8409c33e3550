//! Adherence-Forms Library
//!
//! Transient form state and sequencing on top of [`adherence_core`]. Each
//! screen of the capture flow has a draft type holding unvalidated input;
//! a validated submission is converted into the immutable persisted model
//! and handed to the record store:
//!
//! ```text
//! BaselineForm ──validate──► BaselineData ──► RecordStore::save_baseline
//! CycleForm    ──validate──► CycleDraft   ──► RecordStore::append_cycle
//! FollowupForm ──validate──► FinalFollowup ─► RecordStore::save_final_followup
//! ```
//!
//! [`FormSession`] enforces the ordering: baseline first, then any number of
//! cycles, then the final follow-up. Validation failures carry per-field
//! messages for inline display and never reach storage; the draft survives
//! both validation and storage failures so the user can fix and retry.

pub mod baseline;
pub mod cycle;
pub mod followup;
pub mod session;
pub mod validate;

// Re-export commonly used types
pub use baseline::BaselineForm;
pub use cycle::{CycleForm, MedicationRow};
pub use followup::FollowupForm;
pub use session::{FormSession, SessionError, SessionState};
pub use validate::{FieldError, ValidationErrors};
