//! Session sequencing: baseline, then cycles, then the final follow-up.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use adherence_core::catalog::{self, CatalogError};
use adherence_core::config::{Config, ValidationRules};
use adherence_core::models::CycleRecord;
use adherence_core::store::{RecordStore, StoreError};

use crate::baseline::BaselineForm;
use crate::cycle::CycleForm;
use crate::followup::FollowupForm;
use crate::validate::ValidationErrors;

/// Where a capture session currently is in the flow.
///
/// There is no way back to `AwaitingBaseline`: re-editing baseline data is
/// out of scope, and a completed session accepts nothing further.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionState {
    /// Baseline intake not yet saved.
    AwaitingBaseline,
    /// Baseline saved; cycle entries (and eventually the final follow-up)
    /// may be submitted.
    AwaitingCycle,
    /// Data collection for this patient is finished.
    Completed,
}

/// Session errors.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("baseline has already been saved for this session")]
    BaselineAlreadySaved,

    #[error("baseline must be saved before adding treatment cycles")]
    BaselineNotSaved,

    #[error("at least one saved treatment cycle is required before the final follow-up")]
    NoCyclesSaved,

    #[error("data collection for this patient is complete")]
    SessionCompleted,
}

/// A single-user capture session for one patient.
///
/// Each submission is validated in full before the store is touched, so a
/// failed submission has no side effect and the draft can be corrected and
/// resubmitted.
pub struct FormSession {
    session_id: String,
    store: RecordStore,
    rules: ValidationRules,
    districts: Vec<String>,
    state: SessionState,
    patient_id: Option<String>,
    cycles_saved: usize,
}

impl FormSession {
    /// Start a session against an existing store.
    pub fn new(store: RecordStore, rules: ValidationRules, districts: Vec<String>) -> Self {
        let session_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(%session_id, "capture session started");
        Self {
            session_id,
            store,
            rules,
            districts,
            state: SessionState::AwaitingBaseline,
            patient_id: None,
            cycles_saved: 0,
        }
    }

    /// Start a session from configuration, loading the district reference
    /// list from its configured path.
    pub fn from_config(config: &Config) -> Result<Self, SessionError> {
        let districts = catalog::load_districts(&config.districts_path)?;
        Ok(Self::new(
            RecordStore::new(config.storage_root.clone()),
            config.rules.clone(),
            districts,
        ))
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The patient this session is collecting for, once baseline is saved.
    pub fn patient_id(&self) -> Option<&str> {
        self.patient_id.as_deref()
    }

    /// Cycles saved for this patient, including any persisted before the
    /// session started.
    pub fn saved_cycles(&self) -> usize {
        self.cycles_saved
    }

    /// District options for the baseline screen.
    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    /// Validate and persist the baseline intake.
    ///
    /// On success the session moves to cycle entry, or straight to
    /// `Completed` when the patient never started treatment.
    pub fn submit_baseline(&mut self, form: &BaselineForm) -> Result<SessionState, SessionError> {
        match self.state {
            SessionState::AwaitingBaseline => {}
            SessionState::AwaitingCycle => return Err(SessionError::BaselineAlreadySaved),
            SessionState::Completed => return Err(SessionError::SessionCompleted),
        }

        let baseline = form.validate(&self.rules, &self.districts)?;
        self.store.save_baseline(&baseline)?;

        // A returning patient may already have persisted cycles.
        self.cycles_saved = self.store.cycle_count(&baseline.patient_id)?;
        self.patient_id = Some(baseline.patient_id.clone());
        self.state = if baseline.started_treatment() {
            SessionState::AwaitingCycle
        } else {
            SessionState::Completed
        };

        tracing::info!(
            session_id = %self.session_id,
            patient_id = %baseline.patient_id,
            state = ?self.state,
            "baseline submitted"
        );
        Ok(self.state)
    }

    /// Validate and append one treatment cycle. The session stays in cycle
    /// entry, ready for the next one.
    pub fn submit_cycle(&mut self, form: &CycleForm) -> Result<CycleRecord, SessionError> {
        match self.state {
            SessionState::AwaitingCycle => {}
            SessionState::AwaitingBaseline => return Err(SessionError::BaselineNotSaved),
            SessionState::Completed => return Err(SessionError::SessionCompleted),
        }
        let patient_id = self
            .patient_id
            .clone()
            .ok_or(SessionError::BaselineNotSaved)?;

        let draft = form.validate(&self.rules)?;
        let cycle = self.store.append_cycle(&patient_id, draft)?;
        self.cycles_saved += 1;

        tracing::info!(
            session_id = %self.session_id,
            patient_id = %patient_id,
            cycle_number = cycle.cycle_number,
            "cycle submitted"
        );
        Ok(cycle)
    }

    /// Validate and persist the final follow-up, completing the session.
    /// Requires at least one saved cycle.
    pub fn submit_final_followup(
        &mut self,
        form: &FollowupForm,
    ) -> Result<SessionState, SessionError> {
        match self.state {
            SessionState::AwaitingCycle => {}
            SessionState::AwaitingBaseline => return Err(SessionError::BaselineNotSaved),
            SessionState::Completed => return Err(SessionError::SessionCompleted),
        }
        if self.cycles_saved == 0 {
            return Err(SessionError::NoCyclesSaved);
        }
        let patient_id = self
            .patient_id
            .clone()
            .ok_or(SessionError::BaselineNotSaved)?;

        let followup = form.validate()?;
        self.store.save_final_followup(&patient_id, &followup)?;
        self.state = SessionState::Completed;

        tracing::info!(
            session_id = %self.session_id,
            patient_id = %patient_id,
            "final follow-up submitted, session complete"
        );
        Ok(self.state)
    }
}
