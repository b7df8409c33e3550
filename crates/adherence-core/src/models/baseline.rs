//! Baseline intake models (collected at first visit only).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::YesNo;

/// Comorbidity checkboxes from the baseline intake form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Comorbidities {
    pub diabetes: bool,
    pub hypertension: bool,
    pub hiv: bool,
    pub none_captured: bool,
    pub other: bool,
    /// Free text, present only when `other` is checked.
    pub other_specify: Option<String>,
}

/// The one-time baseline section of a patient record.
///
/// Field names follow the intake form numbering; option-valued fields hold
/// the selected catalog string verbatim (see [`crate::catalog`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BaselineData {
    /// Original patient identifier, verbatim. May contain characters that
    /// are unsafe in filesystem paths; storage addressing sanitizes a copy
    /// and never rewrites this field.
    pub patient_id: String,
    /// Age in years at admission.
    pub age: u32,
    pub date_admitted: NaiveDate,
    /// Highest level of education.
    pub education_level: String,
    pub marital_status: String,
    /// Main source of income.
    pub income_source: String,
    /// Free text, present only when income source is "Other".
    pub income_other: Option<String>,
    /// District of residence, from the district reference list.
    pub district: String,
    pub initial_diagnosis: String,
    /// Whether immunohistochemistry results are present.
    pub immunohisto_present: YesNo,
    /// Selected result markers, empty unless results are present.
    pub immunohisto_results: Vec<String>,
    pub immunohisto_other: Option<String>,
    /// Disease stage at first diagnosis.
    pub disease_stage: String,
    pub comorbidities: Comorbidities,
    /// Number of chemotherapy cycles prescribed.
    pub chemo_cycles_prescribed: u32,
    pub regimen_prescribed: String,
    /// Whether the patient started treatment. `No` ends data collection for
    /// this patient after the baseline save.
    pub treatment_started: YesNo,
    pub treatment_not_started_reason: Option<String>,
    pub treatment_not_started_other: Option<String>,
}

impl BaselineData {
    /// True if the patient went on to treatment and cycle entry applies.
    pub fn started_treatment(&self) -> bool {
        self.treatment_started.is_yes()
    }
}
