//! The progressive patient record document.

use serde::{Deserialize, Serialize};

use super::{BaselineData, CycleRecord, FinalFollowup};

/// The full patient document as persisted to disk.
///
/// One document exists per sanitized patient id. It grows in three stages:
/// baseline at first save, one appended [`CycleRecord`] per treatment cycle,
/// and a [`FinalFollowup`] at the end of collection. Sections are never
/// removed and cycles are never reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// Original patient identifier, verbatim. The sanitized form used for
    /// path addressing is derived on demand and never stored.
    pub patient_id: String,
    /// Baseline intake section, `None` until the first baseline save.
    pub baseline_data: Option<BaselineData>,
    /// Append-only chronological cycle list.
    #[serde(default)]
    pub treatment_cycles: Vec<CycleRecord>,
    /// Final follow-up section, `None` until the closing save.
    #[serde(default)]
    pub final_followup: Option<FinalFollowup>,
    /// RFC 3339 creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// RFC 3339 timestamp of the most recent save.
    #[serde(default)]
    pub updated_at: String,
}

impl PatientRecord {
    /// Create a fresh record for a patient with no data collected yet.
    pub fn new(patient_id: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            patient_id: patient_id.into(),
            baseline_data: None,
            treatment_cycles: Vec::new(),
            final_followup: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// True once a baseline has been saved.
    pub fn has_baseline(&self) -> bool {
        self.baseline_data.is_some()
    }

    /// Number of cycles saved so far.
    pub fn cycle_count(&self) -> usize {
        self.treatment_cycles.len()
    }

    /// The 1-based number the next appended cycle will receive.
    pub fn next_cycle_number(&self) -> u32 {
        self.treatment_cycles.len() as u32 + 1
    }

    /// Refresh the `updated_at` timestamp.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = PatientRecord::new("WMJ11");
        assert_eq!(record.patient_id, "WMJ11");
        assert!(!record.has_baseline());
        assert_eq!(record.cycle_count(), 0);
        assert_eq!(record.next_cycle_number(), 1);
        assert!(record.final_followup.is_none());
    }

    #[test]
    fn test_document_shape() {
        let record = PatientRecord::new("1275/17");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["patient_id"], "1275/17");
        assert!(json.get("baseline_data").is_some());
        assert!(json["treatment_cycles"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_deserializes_minimal_document() {
        // Documents written by hand or older tooling may omit the
        // timestamps and follow-up section.
        let record: PatientRecord = serde_json::from_str(
            r#"{"patient_id": "WMJ11", "baseline_data": null, "treatment_cycles": []}"#,
        )
        .unwrap();
        assert_eq!(record.patient_id, "WMJ11");
        assert_eq!(record.cycle_count(), 0);
    }
}
