//! Treatment cycle models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::YesNo;

/// One medication administered (or prescribed) during a cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationEntry {
    pub name: String,
    /// Dose as entered, e.g. "60" or "1.5".
    pub dose: String,
    /// Dose unit, e.g. "mg", "mg/m2".
    pub unit: String,
    /// Route of administration, when recorded.
    pub route: Option<String>,
    /// Whether the medication was actually administered.
    pub administered: bool,
}

/// Laboratory results recorded at the cycle visit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabResults {
    /// Total white blood cell count.
    pub wbc: f64,
    /// Hemoglobin level (g/dL).
    pub hemoglobin: f64,
    /// Platelet count.
    pub platelets: u64,
}

/// A validated treatment cycle awaiting its position in the record.
///
/// The store assigns `cycle_number` at append time, so drafts carry every
/// field except the number and the owning patient id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleDraft {
    pub regimen_prescribed: String,
    pub prescription_date: NaiveDate,
    pub medications: Vec<MedicationEntry>,
    pub chemo_received_date: Option<NaiveDate>,
    pub laboratory: LabResults,
    /// Was chemotherapy received on the day of prescription?
    pub chemo_on_prescription_day: Option<YesNo>,
    pub chemo_delay_reason: Option<String>,
    pub side_effects_present: Option<YesNo>,
    pub side_effects: Vec<String>,
    pub side_effects_other: Option<String>,
    /// General condition of the patient at the clinic visit.
    pub patient_condition: Option<String>,
    pub condition_other: Option<String>,
    /// Hospitalization between this cycle and the previous one.
    pub hospitalization: Option<YesNo>,
    pub hospitalization_reason: Option<String>,
}

/// A persisted treatment cycle.
///
/// Once appended to a record, a cycle is never mutated or reordered;
/// `cycle_number` equals its 1-based position in `treatment_cycles`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleRecord {
    pub cycle_number: u32,
    pub patient_id: String,
    pub regimen_prescribed: String,
    pub prescription_date: NaiveDate,
    pub medications: Vec<MedicationEntry>,
    pub chemo_received_date: Option<NaiveDate>,
    pub laboratory: LabResults,
    pub chemo_on_prescription_day: Option<YesNo>,
    pub chemo_delay_reason: Option<String>,
    pub side_effects_present: Option<YesNo>,
    pub side_effects: Vec<String>,
    pub side_effects_other: Option<String>,
    pub patient_condition: Option<String>,
    pub condition_other: Option<String>,
    pub hospitalization: Option<YesNo>,
    pub hospitalization_reason: Option<String>,
}

impl CycleRecord {
    /// Materialize a draft at its assigned position in a patient's record.
    pub fn from_draft(draft: CycleDraft, patient_id: &str, cycle_number: u32) -> Self {
        Self {
            cycle_number,
            patient_id: patient_id.to_string(),
            regimen_prescribed: draft.regimen_prescribed,
            prescription_date: draft.prescription_date,
            medications: draft.medications,
            chemo_received_date: draft.chemo_received_date,
            laboratory: draft.laboratory,
            chemo_on_prescription_day: draft.chemo_on_prescription_day,
            chemo_delay_reason: draft.chemo_delay_reason,
            side_effects_present: draft.side_effects_present,
            side_effects: draft.side_effects,
            side_effects_other: draft.side_effects_other,
            patient_condition: draft.patient_condition,
            condition_other: draft.condition_other,
            hospitalization: draft.hospitalization,
            hospitalization_reason: draft.hospitalization_reason,
        }
    }
}
