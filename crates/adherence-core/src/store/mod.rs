//! File-backed patient record store.
//!
//! One JSON document per patient under the storage root. Every mutation is
//! read-or-init, edit in memory, rewrite the whole document; the rewrite
//! goes through a temp file and rename so a crash mid-save never leaves a
//! half-written record. Single-user tool: no locking, no retries.

mod paths;

pub use paths::sanitize_patient_id;

use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{BaselineData, CycleDraft, CycleRecord, FinalFollowup, PatientRecord};

/// Storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("patient id must not be empty")]
    EmptyPatientId,

    #[error("failed to read patient record at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("patient record at {path} is not valid JSON")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize record for patient {patient_id}")]
    Serialize {
        patient_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write patient record at {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// File-backed store mapping patient ids to single JSON documents.
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    /// Create a store rooted at the given directory. The directory is
    /// created lazily on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the record file for a (raw) patient id.
    pub fn record_path(&self, patient_id: &str) -> PathBuf {
        paths::record_path(&self.root, &sanitize_patient_id(patient_id))
    }

    /// Whether a record file exists for this patient.
    pub fn exists(&self, patient_id: &str) -> bool {
        self.record_path(patient_id).is_file()
    }

    /// Load the persisted record, or a fresh empty one if none exists yet.
    ///
    /// A file that exists but does not parse yields [`StoreError::Corrupt`]
    /// rather than being silently replaced.
    pub fn load_or_init(&self, patient_id: &str) -> StoreResult<PatientRecord> {
        if patient_id.trim().is_empty() {
            return Err(StoreError::EmptyPatientId);
        }

        let path = self.record_path(patient_id);
        match fs::read(&path) {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt { path, source })
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                Ok(PatientRecord::new(patient_id))
            }
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    /// Number of cycles persisted for this patient (0 if no record yet).
    pub fn cycle_count(&self, patient_id: &str) -> StoreResult<usize> {
        Ok(self.load_or_init(patient_id)?.cycle_count())
    }

    /// Write or overwrite the baseline section, preserving any existing
    /// cycles and follow-up. Returns the record file path.
    pub fn save_baseline(&self, baseline: &BaselineData) -> StoreResult<PathBuf> {
        let mut record = self.load_or_init(&baseline.patient_id)?;
        record.baseline_data = Some(baseline.clone());
        record.touch();

        let path = self.write_record(&record)?;
        tracing::info!(patient_id = %baseline.patient_id, ?path, "saved baseline");
        Ok(path)
    }

    /// Append a cycle to the patient's record.
    ///
    /// The cycle number is assigned here as the next 1-based position, so
    /// existing cycles are never renumbered or replaced. Returns the cycle
    /// as persisted.
    pub fn append_cycle(&self, patient_id: &str, draft: CycleDraft) -> StoreResult<CycleRecord> {
        let mut record = self.load_or_init(patient_id)?;
        let cycle = CycleRecord::from_draft(draft, &record.patient_id, record.next_cycle_number());
        record.treatment_cycles.push(cycle.clone());
        record.touch();

        self.write_record(&record)?;
        tracing::info!(
            patient_id = %record.patient_id,
            cycle_number = cycle.cycle_number,
            "appended treatment cycle"
        );
        Ok(cycle)
    }

    /// Write or overwrite the final follow-up section, preserving baseline
    /// and cycles. Returns the record file path.
    pub fn save_final_followup(
        &self,
        patient_id: &str,
        followup: &FinalFollowup,
    ) -> StoreResult<PathBuf> {
        let mut record = self.load_or_init(patient_id)?;
        record.final_followup = Some(followup.clone());
        record.touch();

        let path = self.write_record(&record)?;
        tracing::info!(patient_id = %record.patient_id, ?path, "saved final follow-up");
        Ok(path)
    }

    /// Sanitized ids of all patients with a record under the root, sorted.
    pub fn list_patients(&self) -> StoreResult<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.root.clone(),
                    source,
                })
            }
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Read {
                path: self.root.clone(),
                source,
            })?;
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name();
            if let Some(id) = name.to_string_lossy().strip_prefix("patient_") {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Atomically rewrite the record file: serialize to a temp file in the
    /// patient directory, then rename over the target.
    fn write_record(&self, record: &PatientRecord) -> StoreResult<PathBuf> {
        let sanitized = sanitize_patient_id(&record.patient_id);
        let dir = paths::patient_dir(&self.root, &sanitized);
        let path = paths::record_path(&self.root, &sanitized);

        fs::create_dir_all(&dir).map_err(|source| StoreError::Write {
            path: dir.clone(),
            source,
        })?;

        let json =
            serde_json::to_vec_pretty(record).map_err(|source| StoreError::Serialize {
                patient_id: record.patient_id.clone(),
                source,
            })?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|source| StoreError::Write {
            path: dir.clone(),
            source,
        })?;
        tmp.write_all(&json).map_err(|source| StoreError::Write {
            path: tmp.path().to_path_buf(),
            source,
        })?;
        tmp.persist(&path).map_err(|err| StoreError::Write {
            path: path.clone(),
            source: err.error,
        })?;

        tracing::debug!(?path, bytes = json.len(), "rewrote patient record");
        Ok(path)
    }
}
